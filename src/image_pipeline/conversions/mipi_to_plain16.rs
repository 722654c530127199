use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    geometry::{BitDepth, ImageGeometry},
    mipi::{LineUnpacker, MipiDecoder},
    plain16::{ConversionConfig, Plain16Writer, RawPlain16Writer},
    validate,
};

pub struct MipiToPlain16Pipeline<D: MipiDecoder, W: Plain16Writer> {
    decoder: D,
    writer: W,
    config: ConversionConfig,
}

impl MipiToPlain16Pipeline<LineUnpacker, RawPlain16Writer> {
    pub fn new(config: ConversionConfig) -> Self {
        let decoder = if config.strict_line_reads {
            LineUnpacker::strict()
        } else {
            LineUnpacker::new()
        };
        Self {
            decoder,
            writer: RawPlain16Writer,
            config,
        }
    }
}

impl<D: MipiDecoder, W: Plain16Writer> MipiToPlain16Pipeline<D, W> {
    pub fn with_custom(decoder: D, writer: W, config: ConversionConfig) -> Self {
        Self {
            decoder,
            writer,
            config,
        }
    }

    /// Unpacks `source` into PLAIN16 and writes it to `output`.
    ///
    /// A PLAIN16 source needs no conversion: the call succeeds immediately
    /// and nothing is written to `output`.
    #[instrument(skip(self, source, geometry, output), fields(width = geometry.width, height = geometry.height, bits = geometry.bit_depth.bits()))]
    pub fn convert(
        &self,
        source: &mut dyn Read,
        geometry: &ImageGeometry,
        output: &mut dyn Write,
    ) -> Result<()> {
        if geometry.bit_depth == BitDepth::Plain16 {
            info!("source is already PLAIN16, nothing to unpack");
            return Ok(());
        }

        info!("starting MIPI to PLAIN16 conversion");

        let image = {
            let _span = tracing::info_span!("decode_mipi").entered();
            self.decoder.decode(source, geometry)?
        };

        {
            let _span = tracing::info_span!("write_plain16").entered();
            self.writer.write_plain16(&image, output)?;
        }

        info!(
            width = image.width,
            height = image.height,
            decoded_lines = image.decoded_lines,
            "conversion complete"
        );
        Ok(())
    }

    /// File-to-file conversion with the optional pre-flight size check.
    #[instrument(skip(self, input_path, output_path, geometry))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        geometry: &ImageGeometry,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        // The short-circuit comes before any file access: a PLAIN16 request
        // succeeds without touching either path.
        if geometry.bit_depth == BitDepth::Plain16 {
            info!("source is already PLAIN16, no output produced");
            return Ok(());
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "converting file"
        );

        if self.config.validate_source_size {
            let _span = tracing::info_span!("check_source_size").entered();
            validate::check_source_size(input_path, geometry)?;
        }

        let mut source = {
            let _span = tracing::info_span!("open_input_file").entered();
            let file = std::fs::File::open(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?;
            BufReader::new(file)
        };

        let mut output = {
            let _span = tracing::info_span!("create_output_file").entered();
            let file = std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
            BufWriter::new(file)
        };

        self.convert(&mut source, geometry, &mut output)?;

        output.flush().map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        })?;

        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
