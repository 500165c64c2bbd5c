//! Error types for the kyc-core library.
//!
//! These are caller-contract and I/O failures. Missing or malformed fields are
//! not errors: they are reported as [`ValidationError`](crate::ValidationError)
//! findings inside a successful result.

use thiserror::Error;

/// Main error type for the kyc library.
#[derive(Error, Debug)]
pub enum KycError {
    /// The caller asked for a document type the validator does not handle.
    #[error("unsupported document type: {0}")]
    UnsupportedDocumentType(String),

    /// Auto-detection found no known document markers in the text.
    #[error("could not detect document type from recognized text")]
    UndetectedDocument,

    /// Text recognition error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the text-recognition stage.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the kyc library.
pub type Result<T> = std::result::Result<T, KycError>;
