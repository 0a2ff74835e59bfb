//! Image processing backend trait.
//!
//! A backend performs exactly one operation: decode a source image and write
//! a resized copy. Keeping it behind a trait lets the pipeline logic run in
//! tests against a recording mock, with no real image files involved.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust via the
//! `image` crate, statically linked.

use super::params::ResizeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode the source, resample to the exact target dimensions, and
    /// write the output file.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::Quality;
    use std::cell::RefCell;

    /// Mock backend that records operations without touching any pixels.
    #[derive(Default)]
    pub struct MockBackend {
        pub operations: RefCell<Vec<RecordedResize>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedResize {
        pub source: String,
        pub output: String,
        pub width: u32,
        pub height: u32,
        pub quality: u8,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get_operations(&self) -> Vec<RecordedResize> {
            self.operations.borrow().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedResize {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
                quality: params.quality.value(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        backend
            .resize(&ResizeParams {
                source: "/source.png".into(),
                output: "/out/1S.jpg".into(),
                width: 256,
                height: 256,
                quality: Quality::new(85),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedResize {
                width: 256,
                height: 256,
                quality: 85,
                ..
            }
        ));
        assert_eq!(ops[0].output, "/out/1S.jpg");
    }
}
