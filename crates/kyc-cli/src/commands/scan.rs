//! Scan command - recognize and validate a single document image.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use kyc_core::models::config::KycConfig;
use kyc_core::{DocumentType, KycValidator, PureOcrEngine, ValidationResult};

use super::{format_result, load_config, write_output, OutputFormat};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image
    #[arg(required = true)]
    input: PathBuf,

    /// Document type (national_id, tax_id, driving_license)
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }

    if !args.document_type.is_supported() {
        anyhow::bail!(
            "Unsupported document type: {} (expected national_id, tax_id or driving_license)",
            args.document_type
        );
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );

    let result = scan_image(&args.input, args.document_type, &config, &pb)?;
    pb.finish_and_clear();

    if result.is_unreadable() {
        eprintln!(
            "{} No text recognized; retake the photo in better light",
            style("!").yellow()
        );
    }

    let output = format_result(&result, args.format)?;
    write_output(&output, args.output.as_deref())?;

    debug!("Total scan time: {:?}", start.elapsed());

    Ok(())
}

/// Load the OCR engine and run one image through the validator.
fn scan_image(
    path: &std::path::Path,
    document_type: DocumentType,
    config: &KycConfig,
    pb: &ProgressBar,
) -> anyhow::Result<ValidationResult> {
    pb.set_message("Loading OCR models...");
    let engine = PureOcrEngine::from_config(&config.ocr)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;

    pb.set_message("Reading image...");
    let image = image::open(path)?;

    pb.set_message("Recognizing text...");
    let validator = KycValidator::from_config(config);
    Ok(validator.validate_image(&engine, document_type, &image)?)
}
