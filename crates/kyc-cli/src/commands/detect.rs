//! Detect command - print the document type of recognized text.

use std::path::PathBuf;

use clap::Args;

use kyc_core::detect_document_type;

use super::read_text;

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Text file (default: stdin)
    input: Option<PathBuf>,
}

pub async fn run(args: DetectArgs) -> anyhow::Result<()> {
    let text = read_text(args.input.as_deref())?;
    println!("{}", detect_document_type(&text));
    Ok(())
}
