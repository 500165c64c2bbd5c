//! Rule-based field extractors for identity documents.
//!
//! Each extractor is a pure function from recognized text to the fields it
//! found plus the findings for the fields it did not. Rules are ordered and
//! the first match wins.

pub mod dates;
pub mod driving_license;
pub mod national_id;
pub mod normalize;
pub mod patterns;
pub mod tax_id;

pub use dates::{find_date, find_labeled_dob, is_date_shape};
pub use driving_license::extract_driving_license;
pub use national_id::extract_national_id;
pub use normalize::{collapse_whitespace, flatten_upper, fold_upper, normalize, strip_spaces};
pub use tax_id::{extract_name, extract_tax_id, holder_kind};

use crate::models::document::{DocumentType, ExtractedFields, Field, ValidationError};

/// Fields found in one document plus findings for those that were not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExtraction {
    /// Found values, keyed by the document type's fixed field set.
    pub fields: ExtractedFields,
    /// Missing or invalid fields.
    pub errors: Vec<ValidationError>,
}

impl FieldExtraction {
    /// Empty extraction for a document type.
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            fields: ExtractedFields::for_extraction(document_type),
            errors: Vec::new(),
        }
    }

    /// Store a matched value. Returns whether a value was found.
    fn record(&mut self, field: Field, value: Option<String>) -> bool {
        let found = value.is_some();
        self.fields.set(field, value);
        found
    }

    /// Add a finding.
    fn report(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}
