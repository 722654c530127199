//! PLAIN16 writing module
//!
//! This module provides raw PLAIN16 output writing and the conversion
//! configuration.

mod raw_writer;
mod writer;
pub mod types;

pub use raw_writer::RawPlain16Writer;
pub use types::{ConversionConfig, ConversionConfigBuilder};
pub use writer::Plain16Writer;
