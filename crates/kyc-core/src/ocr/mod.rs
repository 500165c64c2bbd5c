//! Text recognition seam.
//!
//! The validator does not care which engine turns an image into text; it only
//! needs something implementing [`TextRecognizer`]. A pure-Rust engine is
//! provided behind the `ocr` feature.

mod preprocessing;
#[cfg(feature = "ocr")]
mod pure_engine;

pub use preprocessing::ImagePreprocessor;
#[cfg(feature = "ocr")]
pub use pure_engine::PureOcrEngine;

use image::DynamicImage;

use crate::error::OcrError;

/// Turns a document image into recognized text.
pub trait TextRecognizer {
    /// Recognize all text in the image. An empty string means nothing was
    /// recognized; errors are reserved for engine failures.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
