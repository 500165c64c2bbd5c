//! Confidence scoring.

use crate::models::document::ConfidenceLevel;

/// Findings tolerated before confidence drops from medium to low.
const MEDIUM_MAX_ERRORS: usize = 2;

impl ConfidenceLevel {
    /// Confidence for a given number of findings: none is high, one or two
    /// is medium, anything more is low.
    pub fn from_error_count(error_count: usize) -> Self {
        match error_count {
            0 => Self::High,
            n if n <= MEDIUM_MAX_ERRORS => Self::Medium,
            _ => Self::Low,
        }
    }
}
