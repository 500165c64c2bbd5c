//! Entry points combining extraction, manual validation and scoring.

use image::DynamicImage;
use tracing::{debug, info, warn};

use super::{detect_document_type, extract_fields, validate_fields};
use crate::error::{KycError, Result};
use crate::models::config::KycConfig;
use crate::models::document::{DocumentType, ManualFields, ValidationResult};
use crate::ocr::{ImagePreprocessor, TextRecognizer};

/// Validates identity documents from recognized text, images or typed input.
///
/// Holds no mutable state; one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct KycValidator {
    /// Applied to images before recognition.
    preprocessor: ImagePreprocessor,
}

impl KycValidator {
    /// Create a validator with default preprocessing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator from configuration.
    pub fn from_config(config: &KycConfig) -> Self {
        Self {
            preprocessor: ImagePreprocessor::from_config(&config.preprocessing),
        }
    }

    /// Set the image preprocessor.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Extract and validate fields from recognized text.
    ///
    /// The caller is expected to have handled empty recognition output with
    /// [`ValidationResult::unreadable`]; empty text still yields a result
    /// listing every missing field.
    pub fn extract_and_validate(
        &self,
        document_type: DocumentType,
        raw_text: &str,
    ) -> Result<ValidationResult> {
        let extraction = extract_fields(document_type, raw_text)?;
        let result =
            ValidationResult::assemble(document_type, extraction.fields, extraction.errors);

        debug!(
            "Validated {}: success={}, confidence={}",
            document_type,
            result.success(),
            result.confidence()
        );

        Ok(result)
    }

    /// Detect the document type, then extract and validate.
    pub fn detect_and_validate(&self, raw_text: &str) -> Result<ValidationResult> {
        match detect_document_type(raw_text) {
            DocumentType::Unknown => Err(KycError::UndetectedDocument),
            document_type => self.extract_and_validate(document_type, raw_text),
        }
    }

    /// Validate manually entered fields. The values are echoed back as the
    /// result's data.
    pub fn validate_manual(
        &self,
        document_type: DocumentType,
        fields: &ManualFields,
    ) -> Result<ValidationResult> {
        let errors = validate_fields(document_type, fields)?;
        Ok(ValidationResult::assemble(
            document_type,
            fields.to_extracted_fields(),
            errors,
        ))
    }

    /// Preprocess and recognize an image, then extract and validate.
    ///
    /// When the recognizer returns no text the result is
    /// [`ValidationResult::unreadable`] and no extractor runs.
    pub fn validate_image(
        &self,
        recognizer: &dyn TextRecognizer,
        document_type: DocumentType,
        image: &DynamicImage,
    ) -> Result<ValidationResult> {
        if !document_type.is_supported() {
            return Err(KycError::UnsupportedDocumentType(document_type.to_string()));
        }

        let prepared = self.preprocessor.process(image);
        let text = recognizer.recognize(&prepared)?;

        if text.trim().is_empty() {
            warn!("No text recognized in {} image", document_type);
            return Ok(ValidationResult::unreadable(document_type));
        }

        info!("Recognized {} characters", text.chars().count());
        self.extract_and_validate(document_type, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrError;
    use crate::models::document::{ConfidenceLevel, Field, ValidationError};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct FixedText {
        text: &'static str,
        calls: Cell<usize>,
    }

    impl FixedText {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                calls: Cell::new(0),
            }
        }
    }

    impl TextRecognizer for FixedText {
        fn recognize(&self, image: &DynamicImage) -> std::result::Result<String, OcrError> {
            assert!(matches!(image, DynamicImage::ImageLuma8(_)));
            self.calls.set(self.calls.get() + 1);
            Ok(self.text.to_string())
        }
    }

    struct Broken;

    impl TextRecognizer for Broken {
        fn recognize(&self, _image: &DynamicImage) -> std::result::Result<String, OcrError> {
            Err(OcrError::Recognition("engine crashed".to_string()))
        }
    }

    fn blank_image() -> DynamicImage {
        DynamicImage::new_rgb8(8, 8)
    }

    #[test]
    fn test_national_id_high_confidence() {
        let text = "GOVERNMENT OF INDIA\nRahul Sharma\nDOB 15/08/1990\nMale\n1234 5678 9012";
        let result = KycValidator::new()
            .extract_and_validate(DocumentType::NationalId, text)
            .unwrap();

        assert!(result.success());
        assert_eq!(result.confidence(), ConfidenceLevel::High);
        assert_eq!(result.extracted_data().get(Field::DocumentNumber), Some("123456789012"));
        assert_eq!(result.extracted_data().get(Field::DateOfBirth), Some("15/08/1990"));
        assert_eq!(result.extracted_data().get(Field::Gender), Some("Male"));
    }

    #[test]
    fn test_non_individual_tax_id_is_not_high() {
        let text = "INCOME TAX DEPARTMENT\nABCDE1234F\nName: Acme Traders\nDOB: 01/04/2001";
        let result = KycValidator::new()
            .extract_and_validate(DocumentType::TaxId, text)
            .unwrap();

        assert!(!result.success());
        assert_eq!(result.extracted_data().get(Field::DocumentNumber), Some("ABCDE1234F"));
        assert_ne!(result.confidence(), ConfidenceLevel::High);
    }

    #[test]
    fn test_driving_license_empty_text() {
        let result = KycValidator::new()
            .extract_and_validate(DocumentType::DrivingLicense, "")
            .unwrap();

        assert!(!result.success());
        assert_eq!(result.extracted_data().found_count(), 0);
        assert_eq!(result.validation_errors().len(), 2);
        assert_eq!(result.confidence(), ConfidenceLevel::Medium);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let validator = KycValidator::new();
        assert!(matches!(
            validator.extract_and_validate(DocumentType::Unknown, "anything"),
            Err(KycError::UnsupportedDocumentType(_))
        ));
        assert!(matches!(
            validator.validate_manual(DocumentType::Unknown, &ManualFields::new("x")),
            Err(KycError::UnsupportedDocumentType(_))
        ));
    }

    #[test]
    fn test_detect_and_validate() {
        let validator = KycValidator::new();
        let result = validator
            .detect_and_validate("Driving Licence\nMH12 20110012345\nDOB: 21-06-1988")
            .unwrap();
        assert_eq!(result.document_type(), DocumentType::DrivingLicense);
        assert!(result.success());

        assert!(matches!(
            validator.detect_and_validate("grocery list"),
            Err(KycError::UndetectedDocument)
        ));
    }

    #[test]
    fn test_manual_result_echoes_input() {
        let fields = ManualFields::new("abcpe1234f")
            .with_name("Asha Rao")
            .with_date_of_birth("1990-08-15");
        let result = KycValidator::new()
            .validate_manual(DocumentType::TaxId, &fields)
            .unwrap();

        assert_eq!(result.validation_errors(), &[ValidationError::InvalidDateOfBirth]);
        assert_eq!(result.confidence(), ConfidenceLevel::Medium);
        assert_eq!(result.extracted_data().get(Field::DocumentNumber), Some("abcpe1234f"));
        assert_eq!(result.extracted_data().get(Field::Address), None);
        assert!(result.extracted_data().contains_key(Field::Address));
    }

    #[test]
    fn test_image_without_text_short_circuits() {
        let recognizer = FixedText::new("  \n ");
        let result = KycValidator::new()
            .validate_image(&recognizer, DocumentType::NationalId, &blank_image())
            .unwrap();

        assert_eq!(recognizer.calls.get(), 1);
        assert!(result.is_unreadable());
        assert_eq!(result.validation_errors(), &[ValidationError::NoTextExtracted]);
        assert_eq!(result.confidence(), ConfidenceLevel::Low);
    }

    #[test]
    fn test_image_with_text_is_extracted() {
        let recognizer = FixedText::new("ABCPE1234F\nName: Asha Rao");
        let result = KycValidator::new()
            .validate_image(&recognizer, DocumentType::TaxId, &blank_image())
            .unwrap();

        assert!(result.success());
        assert_eq!(result.extracted_data().get(Field::Name), Some("Asha Rao"));
    }

    #[test]
    fn test_image_unknown_type_skips_recognition() {
        let recognizer = FixedText::new("ABCPE1234F");
        let result =
            KycValidator::new().validate_image(&recognizer, DocumentType::Unknown, &blank_image());

        assert!(matches!(result, Err(KycError::UnsupportedDocumentType(_))));
        assert_eq!(recognizer.calls.get(), 0);
    }

    #[test]
    fn test_recognizer_failure_propagates() {
        let result =
            KycValidator::new().validate_image(&Broken, DocumentType::TaxId, &blank_image());
        assert!(matches!(result, Err(KycError::Ocr(OcrError::Recognition(_)))));
    }
}
