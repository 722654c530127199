//! Image processing pipeline module
//!
//! This module provides a structured approach to MIPI raw format conversions,
//! with separate modules for line geometry, bit-unpacking, PLAIN16 writing,
//! source validation and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod geometry;
pub mod mipi;
pub mod plain16;
pub mod validate;

pub use common::{
    ConversionError,
    Result,
};

pub use geometry::{
    BitDepth,
    ImageGeometry,
};

pub use mipi::{
    LineUnpacker,
    MipiDecoder,
    Plain16Image,
};

pub use plain16::{
    ConversionConfig,
    ConversionConfigBuilder,
    Plain16Writer,
    RawPlain16Writer,
};

pub use conversions::{
    MipiToPlain16Pipeline,
};
