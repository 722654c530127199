//! Conversion configuration types

/// Configuration for MIPI to PLAIN16 conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Whether to check the source file size against the geometry before
    /// converting
    pub validate_source_size: bool,
    /// Whether a stream ending mid-line is an error (true) or the partial
    /// line is silently dropped (false)
    pub strict_line_reads: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            validate_source_size: true,
            strict_line_reads: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    validate_source_size: Option<bool>,
    strict_line_reads: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn validate_source_size(mut self, validate: bool) -> Self {
        self.validate_source_size = Some(validate);
        self
    }

    pub fn strict_line_reads(mut self, strict: bool) -> Self {
        self.strict_line_reads = Some(strict);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            validate_source_size: self
                .validate_source_size
                .unwrap_or(default.validate_source_size),
            strict_line_reads: self.strict_line_reads.unwrap_or(default.strict_line_reads),
        }
    }
}
