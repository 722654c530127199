//! Unpacked image data types

/// Represents an unpacked PLAIN16 image
#[derive(Debug, Clone)]
pub struct Plain16Image {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in lines
    pub height: usize,
    /// Packed sample depth of the source (8, 10, 12 or 14)
    pub bits_per_sample: u32,
    /// Complete lines recovered from the source; fewer than `height` when
    /// the stream ended mid-line
    pub decoded_lines: usize,
    /// Pixel data in raster order, one u16 cell per pixel. Values occupy the
    /// low `bits_per_sample` bits; cells past the last decoded line are zero.
    pub data: Vec<u16>,
}
