//! Pre-flight source file validation
//!
//! Checks that a source file is at least as large as the geometry predicts
//! before any decoding starts. Advisory only: a file that shrinks after this
//! check still hits the decoder's own end-of-stream handling.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::geometry::ImageGeometry;

/// Verifies the file at `path` can hold a complete image of `geometry`.
///
/// Returns the actual file size on success.
pub fn check_source_size(path: &Path, geometry: &ImageGeometry) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| ConversionError::StatError(format!("{}: {}", path.display(), e)))?;

    let expected = geometry.min_source_size();
    let actual = metadata.len();

    debug!(expected, actual, "checking source file size");

    if actual < expected {
        return Err(ConversionError::InsufficientFileSize { expected, actual });
    }
    Ok(actual)
}
