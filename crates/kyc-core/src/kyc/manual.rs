//! Validation of manually entered fields.
//!
//! Values are checked as given, with full-string matches: a typed value must
//! contain nothing but the field.

use tracing::debug;

use super::rules::dates::is_date_shape;
use super::rules::patterns::{DRIVING_LICENSE_EXACT, NATIONAL_ID_EXACT, TAX_ID_EXACT};
use crate::error::{KycError, Result};
use crate::models::document::{DocumentType, ManualFields, ValidationError};

/// Check manually entered fields against the structural rules of a document
/// type.
///
/// Returns the findings, or `UnsupportedDocumentType` when the document type
/// has no rules.
pub fn validate_fields(
    document_type: DocumentType,
    fields: &ManualFields,
) -> Result<Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !document_number_valid(document_type, &fields.document_number)? {
        errors.push(ValidationError::InvalidDocumentNumber(document_type));
    }

    // An empty string counts as not supplied.
    if let Some(dob) = fields.date_of_birth.as_deref().filter(|d| !d.is_empty()) {
        if !is_date_shape(dob) {
            errors.push(ValidationError::InvalidDateOfBirth);
        }
    }

    debug!(
        "Manual {} validation: {} findings",
        document_type,
        errors.len()
    );

    Ok(errors)
}

fn document_number_valid(document_type: DocumentType, number: &str) -> Result<bool> {
    let valid = match document_type {
        DocumentType::NationalId => NATIONAL_ID_EXACT.is_match(&number.replace(' ', "")),
        DocumentType::TaxId => TAX_ID_EXACT.is_match(&number.to_uppercase()),
        DocumentType::DrivingLicense => DRIVING_LICENSE_EXACT.is_match(&number.to_uppercase()),
        DocumentType::Unknown => {
            return Err(KycError::UnsupportedDocumentType(document_type.to_string()));
        }
    };
    Ok(valid)
}
