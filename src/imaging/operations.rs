//! High-level image operations.
//!
//! One function: render a batch member at every fixed preset. The naming
//! convention ties the output back to its place in the batch via sequence
//! digit plus size label, e.g. `3M.jpg`.

use super::backend::{BackendError, ImageBackend};
use super::params::{LOD_PRESETS, Quality, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Create one derivative per preset for a single source image.
///
/// Outputs land in `output_dir` as `<sequence><label>.jpg` and are
/// overwritten unconditionally if they already exist. Returns the output
/// filenames in preset order (S, M, L).
pub fn create_lod_variants(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    sequence: char,
    quality: Quality,
) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(LOD_PRESETS.len());

    for preset in LOD_PRESETS {
        let name = format!("{}{}.jpg", sequence, preset.label);
        backend.resize(&ResizeParams {
            source: source.to_path_buf(),
            output: output_dir.join(&name),
            width: preset.edge,
            height: preset.edge,
            quality,
        })?;
        names.push(name);
    }

    Ok(names)
}
