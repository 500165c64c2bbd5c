//! Core library for KYC identity document validation.
//!
//! This crate provides:
//! - Document type detection from recognized text
//! - Field extraction for national ID, tax ID and driving license documents
//! - Structural validation of manually entered fields
//! - Confidence scoring and result assembly
//! - A thin recognition seam (image preprocessing, pluggable OCR engine)

pub mod error;
pub mod kyc;
pub mod models;
pub mod ocr;

pub use error::{KycError, OcrError, Result};
pub use kyc::{
    ConfidenceLevel, FieldExtraction, KycValidator, detect_document_type, extract_fields,
    validate_fields,
};
pub use models::document::{
    DocumentType, ExtractedFields, Field, ManualFields, TaxHolderKind, ValidationError,
    ValidationResult,
};
pub use ocr::{ImagePreprocessor, TextRecognizer};
#[cfg(feature = "ocr")]
pub use ocr::PureOcrEngine;
