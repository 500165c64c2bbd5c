//! Tax ID (PAN) field extraction.

use tracing::debug;

use super::dates::find_labeled_dob;
use super::normalize::{collapse_whitespace, normalize};
use super::patterns::{NAME_LABELED, NAME_LOOSE, TAX_ID_DOB, TAX_ID_NUMBER};
use super::FieldExtraction;
use crate::models::document::{DocumentType, Field, TaxHolderKind, ValidationError};

/// Extract document number, name and date of birth.
///
/// Numbers and dates are matched on an uppercased copy; the name is searched
/// in the original text first so mixed-case names survive.
pub fn extract_tax_id(text: &str) -> FieldExtraction {
    let upper = normalize(DocumentType::TaxId, text);
    let mut extraction = FieldExtraction::new(DocumentType::TaxId);

    let number = TAX_ID_NUMBER.find(&upper).map(|m| m.as_str().to_string());
    match number.as_deref().map(holder_kind) {
        None => extraction.report(ValidationError::DocumentNumberNotFound(DocumentType::TaxId)),
        Some(kind) if !kind.is_individual() => {
            extraction.report(ValidationError::NonIndividualTaxId(kind))
        }
        Some(_) => {}
    }
    extraction.record(Field::DocumentNumber, number);

    if !extraction.record(Field::Name, extract_name(text, &upper)) {
        extraction.report(ValidationError::NameNotVisible);
    }

    extraction.record(Field::DateOfBirth, find_labeled_dob(&TAX_ID_DOB, &upper));

    debug!(
        "Tax ID extraction: {} fields found, {} findings",
        extraction.fields.found_count(),
        extraction.errors.len()
    );

    extraction
}

/// Holder category from the 4th character of a tax ID.
pub fn holder_kind(tax_id: &str) -> TaxHolderKind {
    match tax_id.chars().nth(3) {
        Some(code) => TaxHolderKind::from_code(code),
        None => TaxHolderKind::Unknown(' '),
    }
}

/// Label-anchored name extraction.
///
/// Tries letters-only capture on the original text, then any-character
/// capture on the uppercased text. Whitespace in the result is collapsed.
pub fn extract_name(original: &str, upper: &str) -> Option<String> {
    let captured = match NAME_LABELED.captures(original) {
        Some(caps) => collapse_whitespace(&caps[1]),
        None => {
            let caps = NAME_LOOSE.captures(upper)?;
            collapse_whitespace(&caps[1])
        }
    };

    if captured.is_empty() {
        None
    } else {
        Some(captured)
    }
}
