//! Date of birth extraction.
//!
//! Dates are matched by shape only (DD/MM/YYYY or DD-MM-YYYY). Calendar
//! validity is never checked: `31/02/1990` is accepted as written.

use regex::Regex;

use super::patterns::{DATE_DMY, DATE_DMY_EXACT};

/// First date-shaped token anywhere in the text.
pub fn find_date(text: &str) -> Option<String> {
    DATE_DMY.find(text).map(|m| m.as_str().to_string())
}

/// Date captured by a DOB label pattern (`DOB`, `D.O.B`, `Date of Birth`).
///
/// Each document type has its own label pattern; see `TAX_ID_DOB` and
/// `DRIVING_LICENSE_DOB`.
pub fn find_labeled_dob(label: &Regex, text: &str) -> Option<String> {
    label.captures(text).map(|caps| caps[1].to_string())
}

/// Whether the whole value has the date shape.
pub fn is_date_shape(value: &str) -> bool {
    DATE_DMY_EXACT.is_match(value)
}
