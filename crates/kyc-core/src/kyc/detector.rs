//! Document type detection from recognized text.

use tracing::debug;

use super::rules::normalize::normalize;
use super::rules::patterns::{
    DRIVING_LICENSE_MARKERS, NATIONAL_ID_MARKERS, TAX_ID_MARKERS, TAX_ID_NUMBER,
};
use crate::models::document::DocumentType;

/// Detect the document type from its recognized text.
///
/// Marker phrases are checked in priority order and the first hit wins. A
/// bare tax-ID-shaped token also counts as a tax ID, after the national ID
/// markers.
pub fn detect_document_type(text: &str) -> DocumentType {
    let upper = normalize(DocumentType::Unknown, text);
    let contains_any = |markers: &[&str]| markers.iter().any(|m| upper.contains(m));

    let detected = if contains_any(NATIONAL_ID_MARKERS) {
        DocumentType::NationalId
    } else if contains_any(TAX_ID_MARKERS) || TAX_ID_NUMBER.is_match(&upper) {
        DocumentType::TaxId
    } else if contains_any(DRIVING_LICENSE_MARKERS) {
        DocumentType::DrivingLicense
    } else {
        DocumentType::Unknown
    };

    debug!("Detected document type: {}", detected);
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_national_id() {
        assert_eq!(
            detect_document_type("Unique Identification Authority of India"),
            DocumentType::NationalId
        );
        assert_eq!(detect_document_type("aadhaar\n1234 5678 9012"), DocumentType::NationalId);
    }

    #[test]
    fn test_national_id_marker_wins_over_tax_token() {
        assert_eq!(
            detect_document_type("AADHAAR enrolment ref ABCDE1234F"),
            DocumentType::NationalId
        );
    }

    #[test]
    fn test_detect_tax_id_by_marker_or_token() {
        assert_eq!(detect_document_type("Income Tax Department"), DocumentType::TaxId);
        assert_eq!(detect_document_type("xyz abcpe1234f xyz"), DocumentType::TaxId);
    }

    #[test]
    fn test_tax_token_wins_over_license_marker() {
        assert_eq!(
            detect_document_type("Driving Licence ABCDE1234F"),
            DocumentType::TaxId
        );
    }

    #[test]
    fn test_detect_driving_license_spellings() {
        assert_eq!(detect_document_type("DRIVING LICENCE"), DocumentType::DrivingLicense);
        assert_eq!(detect_document_type("Driving License"), DocumentType::DrivingLicense);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_document_type(""), DocumentType::Unknown);
        assert_eq!(detect_document_type("Passport of Narnia"), DocumentType::Unknown);
    }
}
