//! Common regex patterns and marker phrases for identity documents.
//!
//! Search patterns (used by the extractors) find a token anywhere in the text.
//! `*_EXACT` patterns are anchored at both ends and are used for manual entry,
//! where the input should contain nothing but the value.

use lazy_static::lazy_static;
use regex::Regex;

/// Individual-holder code at the 4th position of a tax ID.
pub const INDIVIDUAL_HOLDER_CODE: char = 'P';

/// Phrases that only appear on national identity cards.
pub const NATIONAL_ID_MARKERS: &[&str] = &["AADHAAR", "UNIQUE IDENTIFICATION"];

/// Phrases printed by the tax authority.
pub const TAX_ID_MARKERS: &[&str] = &["INCOME TAX", "PERMANENT ACCOUNT NUMBER"];

/// Driving license headers (both spellings occur).
pub const DRIVING_LICENSE_MARKERS: &[&str] = &["DRIVING LICENCE", "DRIVING LICENSE"];

lazy_static! {
    // National ID: 12 digits as a whole token
    pub static ref NATIONAL_ID_NUMBER: Regex = Regex::new(
        r"\b\d{12}\b"
    ).unwrap();

    pub static ref NATIONAL_ID_EXACT: Regex = Regex::new(
        r"^\d{12}$"
    ).unwrap();

    // Tax ID: 5 letters, 4 digits, 1 letter (e.g. ABCDE1234F)
    pub static ref TAX_ID_NUMBER: Regex = Regex::new(
        r"\b[A-Z]{5}[0-9]{4}[A-Z]\b"
    ).unwrap();

    pub static ref TAX_ID_EXACT: Regex = Regex::new(
        r"^[A-Z]{5}[0-9]{4}[A-Z]$"
    ).unwrap();

    // Driving license: state code + RTO code + 11 digit year/serial
    pub static ref DRIVING_LICENSE_NUMBER: Regex = Regex::new(
        r"\b[A-Z]{2}[-\s]?\d{2}[-\s]?\d{11}\b"
    ).unwrap();

    pub static ref DRIVING_LICENSE_EXACT: Regex = Regex::new(
        r"^[A-Z]{2}[-\s]?\d{2}[-\s]?\d{11}$"
    ).unwrap();

    // Dates: DD/MM/YYYY or DD-MM-YYYY, shape only
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\d{2}[/-]\d{2}[/-]\d{4}"
    ).unwrap();

    pub static ref DATE_DMY_EXACT: Regex = Regex::new(
        r"^\d{2}[/-]\d{2}[/-]\d{4}$"
    ).unwrap();

    // Labeled date of birth on tax ID cards: at most one colon after the label
    pub static ref TAX_ID_DOB: Regex = Regex::new(
        r"(?i)(?:DOB|D\.O\.B|DATE\s*OF\s*BIRTH)\s*:?\s*(\d{2}[-/]\d{2}[-/]\d{4})"
    ).unwrap();

    // Labeled date of birth on driving licenses: any run of colons and spaces
    pub static ref DRIVING_LICENSE_DOB: Regex = Regex::new(
        r"(?i)(?:DOB|D\.O\.B|DATE OF BIRTH)[:\s]*(\d{2}[-/]\d{2}[-/]\d{4})"
    ).unwrap();

    pub static ref GENDER: Regex = Regex::new(
        r"(?i)\b(Male|Female)\b"
    ).unwrap();

    // Name: letters and spaces after the label, up to the next known label
    pub static ref NAME_LABELED: Regex = Regex::new(
        r"(?is)NAME\s*:?\s*([A-Z][A-Z\s]+?)\s*(?:GENDER|DOB|D\.O\.B|PAN\s*NUMBER|FATHER|$)"
    ).unwrap();

    // Name fallback: anything after the label, up to the next known label
    pub static ref NAME_LOOSE: Regex = Regex::new(
        r"(?is)NAME\s*:?\s*(.+?)(?:GENDER|DOB|PAN\s*NUMBER|$)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_patterns_are_anchored() {
        assert!(TAX_ID_EXACT.is_match("ABCDE1234F"));
        assert!(!TAX_ID_EXACT.is_match("XABCDE1234F"));
        assert!(TAX_ID_NUMBER.is_match("ID ABCDE1234F"));
        assert!(!NATIONAL_ID_EXACT.is_match("1234567890123"));
    }

    #[test]
    fn test_national_id_requires_whole_token() {
        assert!(NATIONAL_ID_NUMBER.find("12345678901234").is_none());
        assert_eq!(
            NATIONAL_ID_NUMBER.find("no. 123456789012 ").map(|m| m.as_str()),
            Some("123456789012")
        );
    }

    #[test]
    fn test_driving_license_separators() {
        assert!(DRIVING_LICENSE_EXACT.is_match("MH12 20110012345"));
        assert!(DRIVING_LICENSE_EXACT.is_match("MH-12-20110012345"));
        assert!(DRIVING_LICENSE_EXACT.is_match("MH1220110012345"));
        assert!(!DRIVING_LICENSE_EXACT.is_match("MH12--20110012345"));
    }

    #[test]
    fn test_labeled_dob_spellings() {
        for text in ["DOB: 01/02/1990", "D.O.B 01/02/1990", "Date of Birth : 01-02-1990"] {
            assert!(TAX_ID_DOB.is_match(text), "{text}");
            assert!(DRIVING_LICENSE_DOB.is_match(text), "{text}");
        }
    }

    #[test]
    fn test_labeled_dob_separators() {
        assert!(!TAX_ID_DOB.is_match("DOB:: 01/01/2000"));
        assert!(DRIVING_LICENSE_DOB.is_match("DOB:: 01/01/2000"));
        assert!(!TAX_ID_DOB.is_match("D.O.B. 01/01/1990"));
        assert!(!DRIVING_LICENSE_DOB.is_match("D.O.B. 01/01/1990"));
        assert!(TAX_ID_DOB.is_match("DATEOFBIRTH 01/01/1990"));
        assert!(!DRIVING_LICENSE_DOB.is_match("DATEOFBIRTH 01/01/1990"));
    }
}
