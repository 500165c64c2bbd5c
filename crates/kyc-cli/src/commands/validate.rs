//! Validate command - check manually entered fields.

use clap::Args;

use kyc_core::{DocumentType, KycValidator, ManualFields};

use super::{format_result, write_output, OutputFormat};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Document type (national_id, tax_id, driving_license)
    #[arg(short = 't', long = "type")]
    document_type: DocumentType,

    /// Document number
    #[arg(short, long)]
    number: String,

    /// Holder name
    #[arg(long)]
    name: Option<String>,

    /// Date of birth (DD/MM/YYYY or DD-MM-YYYY)
    #[arg(long)]
    dob: Option<String>,

    /// Holder address
    #[arg(long)]
    address: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let mut fields = ManualFields::new(args.number);
    if let Some(name) = args.name {
        fields = fields.with_name(name);
    }
    if let Some(dob) = args.dob {
        fields = fields.with_date_of_birth(dob);
    }
    if let Some(address) = args.address {
        fields = fields.with_address(address);
    }

    let result = KycValidator::new().validate_manual(args.document_type, &fields)?;

    let output = format_result(&result, args.format)?;
    write_output(&output, None)
}
