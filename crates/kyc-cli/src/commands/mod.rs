//! Subcommands and the output helpers they share.

pub mod batch;
pub mod config;
pub mod detect;
pub mod extract;
pub mod scan;
pub mod validate;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use console::style;

use kyc_core::models::config::KycConfig;
use kyc_core::ValidationResult;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kyc")
        .join("config.json")
}

/// Load the configuration from an explicit path, the default path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KycConfig> {
    if let Some(path) = config_path {
        return Ok(KycConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(KycConfig::from_file(&default_path)?)
    } else {
        Ok(KycConfig::default())
    }
}

/// Read recognized text from a file, or from stdin when no file is given.
pub fn read_text(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

pub fn format_result(result: &ValidationResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_text(result: &ValidationResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", result.document_type()));
    output.push_str(&format!(
        "Status: {}\n",
        if result.success() { "valid" } else { "invalid" }
    ));
    output.push_str(&format!("Confidence: {}\n", result.confidence()));
    output.push('\n');

    output.push_str("Fields:\n");
    for field in result.extracted_data().keys() {
        let value = result.extracted_data().get(field).unwrap_or("-");
        output.push_str(&format!("  {}: {}\n", field, value));
    }

    if !result.validation_errors().is_empty() {
        output.push('\n');
        output.push_str("Errors:\n");
        for error in result.validation_errors() {
            output.push_str(&format!("  - {}\n", error));
        }
    }

    output
}

/// Print to stdout, or write to a file when an output path is given.
pub fn write_output(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output_path) = path {
        fs::write(output_path, output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }
    Ok(())
}
