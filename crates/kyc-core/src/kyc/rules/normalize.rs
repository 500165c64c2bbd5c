//! Canonical text forms used before pattern matching.
//!
//! All functions are total: empty input gives empty output.

use crate::models::document::DocumentType;

/// Remove spaces and turn line breaks into single spaces.
///
/// National ID numbers are printed in groups of four and may be split by the
/// recognizer; dropping the spaces rejoins them while the line breaks still
/// separate words.
pub fn strip_spaces(text: &str) -> String {
    text.replace(' ', "").replace('\n', " ")
}

/// Uppercase copy of the text.
pub fn fold_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Uppercase copy with line breaks flattened into spaces.
pub fn flatten_upper(text: &str) -> String {
    text.to_uppercase().replace('\n', " ")
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The form a document type's extractor matches numbers and dates against.
///
/// Name extraction does not use this form; it needs the original casing.
pub fn normalize(document_type: DocumentType, text: &str) -> String {
    match document_type {
        DocumentType::NationalId => strip_spaces(text),
        DocumentType::TaxId | DocumentType::Unknown => fold_upper(text),
        DocumentType::DrivingLicense => flatten_upper(text),
    }
}
