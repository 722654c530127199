//! MIPI raw stream decoding module
//!
//! This module provides line-oriented bit-unpacking of MIPI CSI-2 packed
//! pixel streams.

mod decoder;
mod line_unpacker;
pub mod types;

pub use decoder::MipiDecoder;
pub use line_unpacker::LineUnpacker;
pub use types::Plain16Image;
