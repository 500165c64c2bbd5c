//! Image preprocessing for OCR.

use image::{DynamicImage, GrayImage, RgbImage};
use tracing::debug;

use crate::models::config::PreprocessingConfig;

/// Grayscale conversion and contrast enhancement applied before recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreprocessor {
    /// Convert to single-channel luma.
    grayscale: bool,
    /// Contrast factor; 1.0 leaves the image unchanged.
    contrast: f32,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with default settings.
    pub fn new() -> Self {
        Self {
            grayscale: true,
            contrast: 2.0,
        }
    }

    /// Create a preprocessor from configuration.
    pub fn from_config(config: &PreprocessingConfig) -> Self {
        Self {
            grayscale: config.grayscale,
            contrast: config.contrast,
        }
    }

    /// Set grayscale conversion.
    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Set contrast factor.
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Prepare an image for recognition.
    pub fn process(&self, image: &DynamicImage) -> DynamicImage {
        debug!(
            "Preprocessing {}x{} image (grayscale: {}, contrast: {})",
            image.width(),
            image.height(),
            self.grayscale,
            self.contrast
        );

        let gray = image.to_luma8();
        let mean = mean_luma(&gray);

        if self.grayscale {
            let mut gray = gray;
            for pixel in gray.pixels_mut() {
                pixel[0] = self.stretch(pixel[0], mean);
            }
            DynamicImage::ImageLuma8(gray)
        } else {
            let mut rgb: RgbImage = image.to_rgb8();
            for pixel in rgb.pixels_mut() {
                for channel in pixel.0.iter_mut() {
                    *channel = self.stretch(*channel, mean);
                }
            }
            DynamicImage::ImageRgb8(rgb)
        }
    }

    /// Push a value away from the mean by the contrast factor.
    fn stretch(&self, value: u8, mean: f32) -> u8 {
        let stretched = mean + self.contrast * (value as f32 - mean);
        stretched.round().clamp(0.0, 255.0) as u8
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Average luma, rounded to a whole gray level.
fn mean_luma(gray: &GrayImage) -> f32 {
    let count = gray.width() as u64 * gray.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = gray.pixels().map(|p| p[0] as u64).sum();
    (sum as f32 / count as f32).round()
}
