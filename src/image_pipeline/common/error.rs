use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Unsupported bit depth {0}, supported depths are 8, 10, 12, 14 and 16")]
    UnsupportedBitDepth(i64),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(i64, i64),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to stat input file: {0}")]
    StatError(String),

    #[error("Input file too small: expected at least {expected} bytes, found {actual}")]
    InsufficientFileSize { expected: u64, actual: u64 },

    #[error("Source truncated in line {line}: expected {expected} bytes, got {got}")]
    TruncatedSource {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
