use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::mipi::types::Plain16Image;

pub trait Plain16Writer {
    fn write_plain16(&self, image: &Plain16Image, output: &mut dyn Write) -> Result<()>;
}
