//! Identity document field extraction and validation.

mod assembler;
mod detector;
mod manual;
pub mod rules;
mod scoring;
mod validator;

pub use detector::detect_document_type;
pub use manual::validate_fields;
pub use rules::FieldExtraction;
pub use validator::KycValidator;

pub use crate::models::document::ConfidenceLevel;

use crate::error::{KycError, Result};
use crate::models::document::DocumentType;

/// Run the extractor for a document type.
///
/// Extraction itself never fails; `Unknown` has no extractor and is rejected.
pub fn extract_fields(document_type: DocumentType, text: &str) -> Result<FieldExtraction> {
    match document_type {
        DocumentType::NationalId => Ok(rules::extract_national_id(text)),
        DocumentType::TaxId => Ok(rules::extract_tax_id(text)),
        DocumentType::DrivingLicense => Ok(rules::extract_driving_license(text)),
        DocumentType::Unknown => Err(KycError::UnsupportedDocumentType(
            document_type.to_string(),
        )),
    }
}
