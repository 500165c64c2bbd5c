//! Batch processing command for multiple document files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use kyc_core::models::config::KycConfig;
use kyc_core::{DocumentType, KycValidator, PureOcrEngine, ValidationResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Document type (national_id, tax_id, driving_license)
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    result: Option<ValidationResult>,
    error: Option<String>,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tiff", "tif", "bmp"];

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }

    if !args.document_type.is_supported() {
        anyhow::bail!("Unsupported document type: {}", args.document_type);
    }

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = extension(p);
            ext == "txt" || IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let validator = KycValidator::from_config(&config);
    let mut engine: Option<PureOcrEngine> = None;
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, args.document_type, &validator, &config, &mut engine) {
            Ok(result) => results.push(FileResult {
                path,
                result: Some(result),
                error: None,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        result: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for file in &results {
            if let Some(result) = &file.result {
                // a.txt and a.png must not share an output file
                let name = file
                    .path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("document");
                let output_path = output_dir.join(format!("{}.json", name));
                fs::write(&output_path, serde_json::to_string_pretty(result)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let valid = results
        .iter()
        .filter(|r| r.result.as_ref().is_some_and(|v| v.success()))
        .count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} valid, {} with findings, {} failed",
        style(valid).green(),
        style(results.len() - valid - failed.len()).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for file in &failed {
            println!(
                "  - {}: {}",
                file.path.display(),
                file.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn process_single_file(
    path: &Path,
    document_type: DocumentType,
    validator: &KycValidator,
    config: &KycConfig,
    engine: &mut Option<PureOcrEngine>,
) -> anyhow::Result<ValidationResult> {
    let ext = extension(path);

    if ext == "txt" {
        let text = fs::read_to_string(path)?;
        return Ok(validator.extract_and_validate(document_type, &text)?);
    }

    // Models are loaded on the first image only
    if engine.is_none() {
        let loaded = PureOcrEngine::from_config(&config.ocr)
            .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;
        *engine = Some(loaded);
    }
    let Some(engine) = engine.as_ref() else {
        anyhow::bail!("OCR engine unavailable");
    };

    let image = image::open(path)?;
    Ok(validator.validate_image(engine, document_type, &image)?)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "document_type", "success", "confidence", "errors"])?;

    for file in results {
        let filename = file.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(result) = &file.result {
            let errors = result
                .validation_errors()
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            wtr.write_record([
                filename,
                result.document_type().as_str(),
                if result.success() { "true" } else { "false" },
                &result.confidence().to_string(),
                &errors,
            ])?;
        } else {
            wtr.write_record([
                filename,
                "",
                "false",
                "",
                file.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
