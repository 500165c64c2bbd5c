//! Extract command - extract and validate fields from recognized text.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use kyc_core::{DocumentType, KycError, KycValidator};

use super::{format_result, read_text, write_output, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file (default: stdin)
    input: Option<PathBuf>,

    /// Document type; detected from the text when omitted
    #[arg(short = 't', long = "type")]
    document_type: Option<DocumentType>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = read_text(args.input.as_deref())?;

    let validator = KycValidator::new();
    let result = match args.document_type {
        Some(document_type) => validator.extract_and_validate(document_type, &text)?,
        None => match validator.detect_and_validate(&text) {
            Ok(result) => {
                debug!("Detected document type: {}", result.document_type());
                result
            }
            Err(KycError::UndetectedDocument) => {
                anyhow::bail!("Could not detect the document type; pass --type")
            }
            Err(e) => return Err(e.into()),
        },
    };

    let output = format_result(&result, args.format)?;
    write_output(&output, args.output.as_deref())
}
