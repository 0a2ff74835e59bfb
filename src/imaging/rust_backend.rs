//! Pure Rust image processing backend — zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image` crate |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |
//!
//! The resize is a plain stretch to the requested dimensions. Derivative
//! targets are fixed squares, so non-square sources come out distorted;
//! that is the intended behavior, not a bug to fix with cropping.

use super::backend::{BackendError, ImageBackend};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

impl ImageBackend for RustBackend {
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);

        let file = File::create(&params.output)?;
        let mut encoder =
            JpegEncoder::new_with_quality(BufWriter::new(file), params.quality.value());
        // JPEG has no alpha channel, so PNG sources are flattened to RGB
        encoder.encode_image(&resized.to_rgb8()).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to encode {}: {}",
                params.output.display(),
                e
            ))
        })
    }
}
