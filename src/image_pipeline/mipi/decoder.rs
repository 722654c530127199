use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::geometry::ImageGeometry;
use crate::image_pipeline::mipi::types::Plain16Image;

pub trait MipiDecoder {
    fn decode(&self, source: &mut dyn Read, geometry: &ImageGeometry) -> Result<Plain16Image>;
}
