//! Line-oriented bit-unpacking of MIPI CSI-2 packed streams.
//!
//! Every supported depth packs a fixed-size group of bytes into a fixed
//! number of pixels: the leading bytes carry the high 8 bits of each pixel
//! and the trailing byte(s) carry the low bits of the whole group. One
//! decode loop drives all depths; only the group layout differs.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::geometry::{BitDepth, ImageGeometry};
use crate::image_pipeline::mipi::decoder::MipiDecoder;
use crate::image_pipeline::mipi::types::Plain16Image;

/// Byte/pixel layout of one packed group.
struct GroupLayout {
    group_bytes: usize,
    pixels_per_group: usize,
    unpack: fn(&[u8], &mut [u16]),
}

impl GroupLayout {
    /// `None` for PLAIN16, which has no packed groups to expand.
    fn for_depth(depth: BitDepth) -> Option<Self> {
        let (group_bytes, pixels_per_group, unpack): (usize, usize, fn(&[u8], &mut [u16])) =
            match depth {
                BitDepth::Mipi8 => (1, 1, unpack_mipi8),
                BitDepth::Mipi10 => (5, 4, unpack_mipi10),
                BitDepth::Mipi12 => (3, 2, unpack_mipi12),
                BitDepth::Mipi14 => (7, 4, unpack_mipi14),
                BitDepth::Plain16 => return None,
            };
        Some(Self {
            group_bytes,
            pixels_per_group,
            unpack,
        })
    }
}

fn unpack_mipi8(group: &[u8], out: &mut [u16]) {
    out[0] = group[0] as u16;
}

// 5 bytes -> 4 pixels. b0..b3 hold the high 8 bits, b4 the low 2 bits of
// each pixel, pixel 0 in the least significant pair.
fn unpack_mipi10(group: &[u8], out: &mut [u16]) {
    let low = group[4] as u16;
    out[0] = ((group[0] as u16) << 2) | (low & 0x3);
    out[1] = ((group[1] as u16) << 2) | ((low >> 2) & 0x3);
    out[2] = ((group[2] as u16) << 2) | ((low >> 4) & 0x3);
    out[3] = ((group[3] as u16) << 2) | ((low >> 6) & 0x3);
}

// 3 bytes -> 2 pixels. b2 carries pixel 0's low nibble in its low half.
fn unpack_mipi12(group: &[u8], out: &mut [u16]) {
    let low = group[2] as u16;
    out[0] = ((group[0] as u16) << 4) | (low & 0xF);
    out[1] = ((group[1] as u16) << 4) | ((low >> 4) & 0xF);
}

// 7 bytes -> 4 pixels. b4..b6 form a big-endian 24-bit word holding the low
// 6 bits of each pixel, pixel 0 most significant.
fn unpack_mipi14(group: &[u8], out: &mut [u16]) {
    let low = ((group[4] as u32) << 16) | ((group[5] as u32) << 8) | group[6] as u32;
    out[0] = ((group[0] as u16) << 6) | ((low >> 18) & 0x3F) as u16;
    out[1] = ((group[1] as u16) << 6) | ((low >> 12) & 0x3F) as u16;
    out[2] = ((group[2] as u16) << 6) | ((low >> 6) & 0x3F) as u16;
    out[3] = ((group[3] as u16) << 6) | (low & 0x3F) as u16;
}

/// Reads until `buf` is full or the stream ends; returns the bytes read.
fn read_full(source: &mut dyn Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// MIPI decoder that unpacks a stream line by line.
///
/// One line buffer of the padded line length is allocated up front and
/// overwritten on every iteration. Pixels are emitted in raster order into a
/// pre-sized buffer of `width * height` cells, so a truncated source leaves
/// the trailing cells zero rather than shrinking the image.
pub struct LineUnpacker {
    strict: bool,
}

impl LineUnpacker {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// A strict unpacker fails with [`ConversionError::TruncatedSource`]
    /// when the stream ends in the middle of a line, instead of dropping
    /// the partial line.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl Default for LineUnpacker {
    fn default() -> Self {
        Self::new()
    }
}

impl MipiDecoder for LineUnpacker {
    fn decode(&self, source: &mut dyn Read, geometry: &ImageGeometry) -> Result<Plain16Image> {
        let Some(layout) = GroupLayout::for_depth(geometry.bit_depth) else {
            return Err(ConversionError::UnsupportedFormat(
                "PLAIN16 sources are already unpacked".to_string(),
            ));
        };

        let unpadded = geometry.bytes_per_line();
        let padded = geometry.padded_bytes_per_line();

        debug!(
            width = geometry.width,
            height = geometry.height,
            bits = geometry.bit_depth.bits(),
            padded_bytes_per_line = padded,
            "unpacking MIPI stream"
        );

        let mut data = vec![0u16; geometry.pixel_count()];
        let mut line = vec![0u8; padded];
        let mut written = 0;
        let mut decoded_lines = 0;

        while decoded_lines < geometry.height {
            let got = read_full(source, &mut line)?;
            if got < padded {
                if got > 0 && self.strict {
                    return Err(ConversionError::TruncatedSource {
                        line: decoded_lines,
                        expected: padded,
                        got,
                    });
                }
                if got > 0 {
                    debug!(
                        line = decoded_lines,
                        expected = padded,
                        got,
                        "short read, dropping partial line"
                    );
                }
                break;
            }
            // Padding bytes past `unpadded` were read but carry no pixels.
            for group in line[..unpadded].chunks_exact(layout.group_bytes) {
                let out = &mut data[written..written + layout.pixels_per_group];
                (layout.unpack)(group, out);
                written += layout.pixels_per_group;
            }
            decoded_lines += 1;
        }

        debug!(decoded_lines, pixels = written, "unpacking complete");

        Ok(Plain16Image {
            width: geometry.width,
            height: geometry.height,
            bits_per_sample: geometry.bit_depth.bits(),
            decoded_lines,
            data,
        })
    }
}
