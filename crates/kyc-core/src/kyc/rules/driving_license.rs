//! Driving license field extraction.

use tracing::debug;

use super::dates::find_labeled_dob;
use super::normalize::normalize;
use super::patterns::{DRIVING_LICENSE_DOB, DRIVING_LICENSE_NUMBER};
use super::FieldExtraction;
use crate::models::document::{DocumentType, Field, ValidationError};

/// Extract document number and date of birth.
///
/// The number (state code, RTO code, year and serial) is returned as one
/// token, separators included.
pub fn extract_driving_license(text: &str) -> FieldExtraction {
    let text = normalize(DocumentType::DrivingLicense, text);
    let mut extraction = FieldExtraction::new(DocumentType::DrivingLicense);

    let number = DRIVING_LICENSE_NUMBER
        .find(&text)
        .map(|m| m.as_str().to_string());
    if !extraction.record(Field::DocumentNumber, number) {
        extraction.report(ValidationError::DocumentNumberNotFound(DocumentType::DrivingLicense));
    }

    if !extraction.record(Field::DateOfBirth, find_labeled_dob(&DRIVING_LICENSE_DOB, &text)) {
        extraction.report(ValidationError::DateOfBirthNotFound);
    }

    debug!(
        "Driving license extraction: {} fields found, {} findings",
        extraction.fields.found_count(),
        extraction.errors.len()
    );

    extraction
}
