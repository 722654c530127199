use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use mipi_plain16_rs::image_pipeline::{
    BitDepth, ConversionConfig, ImageGeometry, MipiToPlain16Pipeline,
};
use mipi_plain16_rs::logger;

/// Unpacked output lands next to the input, always under this name.
const OUTPUT_PATH: &str = "TestPlain16.raw";

/// Convert MIPI CSI-2 bit-packed raw images to PLAIN16
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the packed MIPI raw input file
    input: PathBuf,
    /// Image width in pixels
    #[arg(allow_negative_numbers = true)]
    width: i64,
    /// Image height in lines
    #[arg(allow_negative_numbers = true)]
    height: i64,
    /// Packed bit depth: 8, 10, 12, 14 or 16
    #[arg(allow_negative_numbers = true)]
    bit_depth: i64,
    /// Byte boundary each packed line is padded up to; 0 for none
    #[arg(allow_negative_numbers = true)]
    alignment_bytes: i64,
}

fn run(args: Args) -> anyhow::Result<()> {
    info!(input = %args.input.display(), "Input MIPI raw file");

    let geometry = ImageGeometry::new(args.width, args.height, args.bit_depth, args.alignment_bytes)?;

    let config = ConversionConfig::builder().validate_source_size(true).build();
    let pipeline = MipiToPlain16Pipeline::new(config);

    pipeline.convert_file(&args.input, OUTPUT_PATH, &geometry)?;

    if geometry.bit_depth == BitDepth::Plain16 {
        return Ok(());
    }

    let written = std::fs::metadata(OUTPUT_PATH)
        .with_context(|| format!("failed to stat output file {OUTPUT_PATH}"))?;
    info!(
        output = OUTPUT_PATH,
        bytes = written.len(),
        "Conversion successful"
    );

    Ok(())
}

fn main() -> ExitCode {
    logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {e}");
            ExitCode::FAILURE
        }
    }
}
