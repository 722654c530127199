use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::mipi::types::Plain16Image;
use crate::image_pipeline::plain16::writer::Plain16Writer;

/// Writes PLAIN16 data as headerless little-endian u16 in raster order.
///
/// All `width * height` cells are written, including the zero cells past the
/// last decoded line of a truncated source.
pub struct RawPlain16Writer;

impl Plain16Writer for RawPlain16Writer {
    fn write_plain16(&self, image: &Plain16Image, output: &mut dyn Write) -> Result<()> {
        debug!(
            width = image.width,
            height = image.height,
            "writing PLAIN16 image"
        );

        let mut buffer = Vec::with_capacity(image.data.len() * 2);
        for &pixel in &image.data {
            buffer.extend_from_slice(&pixel.to_le_bytes());
        }
        output.write_all(&buffer)?;

        debug!(bytes = buffer.len(), "PLAIN16 write complete");
        Ok(())
    }
}
