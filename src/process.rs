//! Derivative generation — the LOD pipeline.
//!
//! Stage 2, used only by the `lod` command. Takes the scanner's discoveries
//! from an input tree, renders every batch member at the three fixed
//! resolutions, and builds the index over the derivative files instead of
//! the sources.
//!
//! ## Output structure
//!
//! ```text
//! images/pears/
//! ├── 2997541437/
//! │   ├── 1S.jpg   1M.jpg   1L.jpg
//! │   ├── 2S.jpg   2M.jpg   2L.jpg
//! │   ├── 3S.jpg   3M.jpg   3L.jpg
//! │   └── 4S.jpg   4M.jpg   4L.jpg    # 4 sources × 3 sizes = complete
//! └── 864554162/
//!     └── ...
//! ```
//!
//! A complete derivative group therefore has 12 entries; srefs with any
//! other source count are rejected. Their files are still written: the
//! resize happens before the completeness filter, and nothing is cleaned
//! up afterwards.
//!
//! Sources whose stem lacks a trailing sequence digit cannot be named under
//! the `<digit><label>.jpg` convention; they are skipped and reported.

use crate::imaging::{
    BackendError, ImageBackend, LOD_PRESETS, Quality, RustBackend, create_lod_variants,
};
use crate::naming;
use crate::scan::{self, GalleryIndex, RejectedGroup, ScanError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Member count of a complete derivative group.
pub const LOD_GROUP_SIZE: usize = scan::GROUP_SIZE * LOD_PRESETS.len();

/// LOD pipeline result. `index` references derivative paths joined from the
/// output root as given, so the file is usable as-is from wherever the
/// command ran.
#[derive(Debug, Serialize)]
pub struct LodReport {
    pub index: GalleryIndex,
    pub rejected: Vec<RejectedGroup>,
    /// Source images that were rendered.
    pub sources: usize,
    /// Source images skipped because their stem has no trailing digit.
    pub skipped_unnumbered: Vec<String>,
}

/// Run the LOD pipeline with the production backend.
pub fn process(
    source_root: &Path,
    output_root: &Path,
    quality: Quality,
) -> Result<LodReport, ProcessError> {
    process_with_backend(&RustBackend::new(), source_root, output_root, quality)
}

/// Run the LOD pipeline using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    source_root: &Path,
    output_root: &Path,
    quality: Quality,
) -> Result<LodReport, ProcessError> {
    let discovered = scan::discover(source_root)?;

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    let mut sources = 0usize;

    for img in &discovered {
        let stem = Path::new(&img.rel_path)
            .file_stem()
            .unwrap()
            .to_string_lossy();
        let Some(sequence) = naming::trailing_sequence_digit(&stem) else {
            skipped.push(img.rel_path.clone());
            continue;
        };

        let sref_dir = output_root.join(&img.sref);
        fs::create_dir_all(&sref_dir)?;

        let names = create_lod_variants(
            backend,
            &source_root.join(&img.rel_path),
            &sref_dir,
            sequence,
            quality,
        )?;
        sources += 1;

        for name in names {
            let path = output_root.join(&img.sref).join(name);
            entries.push((img.sref.clone(), path.to_string_lossy().to_string()));
        }
    }

    let (index, rejected) = scan::group(entries, LOD_GROUP_SIZE);

    Ok(LodReport {
        index,
        rejected,
        sources,
        skipped_unnumbered: skipped,
    })
}
