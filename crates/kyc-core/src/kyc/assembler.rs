//! Result assembly.

use crate::models::document::{
    ConfidenceLevel, DocumentType, ExtractedFields, ValidationError, ValidationResult,
};

impl ValidationResult {
    /// Combine fields and findings into a result.
    ///
    /// `success` and `confidence` are derived from the findings; nothing else
    /// is checked here.
    pub fn assemble(
        document_type: DocumentType,
        extracted_data: ExtractedFields,
        validation_errors: Vec<ValidationError>,
    ) -> Self {
        Self {
            success: validation_errors.is_empty(),
            document_type,
            confidence: ConfidenceLevel::from_error_count(validation_errors.len()),
            extracted_data,
            validation_errors,
        }
    }

    /// Result for an image the recognizer could not read any text from.
    ///
    /// Extraction never ran, so every field is absent and the single finding
    /// is [`ValidationError::NoTextExtracted`]. Confidence is always low.
    pub fn unreadable(document_type: DocumentType) -> Self {
        Self {
            success: false,
            document_type,
            extracted_data: ExtractedFields::for_extraction(document_type),
            validation_errors: vec![ValidationError::NoTextExtracted],
            confidence: ConfidenceLevel::Low,
        }
    }

    /// Whether this result comes from a recognition-stage failure.
    pub fn is_unreadable(&self) -> bool {
        self.validation_errors
            .iter()
            .any(|e| matches!(e, ValidationError::NoTextExtracted))
    }
}
