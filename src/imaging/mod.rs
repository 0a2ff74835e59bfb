//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (JPEG, PNG) | `image` crate |
//! | **Resize** | `resize_exact` + Lanczos3 (stretch to fixed squares) |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Parameters**: data structures describing operations, plus the fixed
//!   size presets
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: derivative generation on top of a backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use operations::create_lod_variants;
pub use params::{LOD_PRESETS, Quality, ResizeParams, SizePreset};
pub use rust_backend::RustBackend;
