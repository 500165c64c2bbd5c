//! National ID (Aadhaar) field extraction.

use tracing::debug;

use super::dates::find_date;
use super::normalize::normalize;
use super::patterns::{GENDER, NATIONAL_ID_NUMBER};
use super::FieldExtraction;
use crate::models::document::{DocumentType, Field, ValidationError};

/// Extract document number, date of birth and gender.
///
/// Gender is best-effort: its absence is not a finding.
pub fn extract_national_id(text: &str) -> FieldExtraction {
    let text = normalize(DocumentType::NationalId, text);
    let mut extraction = FieldExtraction::new(DocumentType::NationalId);

    let number = NATIONAL_ID_NUMBER.find(&text).map(|m| m.as_str().to_string());
    if !extraction.record(Field::DocumentNumber, number) {
        extraction.report(ValidationError::DocumentNumberNotFound(DocumentType::NationalId));
    }

    if !extraction.record(Field::DateOfBirth, find_date(&text)) {
        extraction.report(ValidationError::DateOfBirthNotFound);
    }

    let gender = GENDER.captures(&text).map(|caps| caps[1].to_string());
    extraction.record(Field::Gender, gender);

    debug!(
        "National ID extraction: {} fields found, {} findings",
        extraction.fields.found_count(),
        extraction.errors.len()
    );

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_full_card() {
        let text = "Government of India\nRahul Sharma\nDOB: 15/08/1990\nMale\n1234 5678 9012\nAadhaar - Aam Aadmi ka Adhikar";
        let extraction = extract_national_id(text);

        assert_eq!(extraction.fields.get(Field::DocumentNumber), Some("123456789012"));
        assert_eq!(extraction.fields.get(Field::DateOfBirth), Some("15/08/1990"));
        assert_eq!(extraction.fields.get(Field::Gender), Some("Male"));
        assert!(extraction.errors.is_empty());
    }

    #[test]
    fn test_gender_is_optional() {
        let extraction = extract_national_id("DOB 01-01-1985\n9876 5432 1098");
        assert_eq!(extraction.fields.get(Field::Gender), None);
        assert!(extraction.errors.is_empty());
    }

    #[test]
    fn test_female_not_matched_as_male() {
        let extraction = extract_national_id("FEMALE\n123456789012\n01/01/1990");
        assert_eq!(extraction.fields.get(Field::Gender), Some("FEMALE"));
    }

    #[test]
    fn test_longer_digit_run_rejected() {
        let extraction = extract_national_id("VID: 9123 4567 8901 2345\n01/01/1990");
        assert_eq!(extraction.fields.get(Field::DocumentNumber), None);
        assert_eq!(
            extraction.errors,
            vec![ValidationError::DocumentNumberNotFound(DocumentType::NationalId)]
        );
    }

    #[test]
    fn test_empty_text_reports_all_findings() {
        let extraction = extract_national_id("");
        assert_eq!(extraction.fields.found_count(), 0);
        assert_eq!(
            extraction.errors,
            vec![
                ValidationError::DocumentNumberNotFound(DocumentType::NationalId),
                ValidationError::DateOfBirthNotFound,
            ]
        );
    }

    #[test]
    fn test_never_populates_name() {
        let extraction = extract_national_id("Name: Rahul\n123456789012");
        assert!(!extraction.fields.contains_key(Field::Name));
    }
}
