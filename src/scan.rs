//! Filesystem scanning and sref grouping.
//!
//! Stage 1 of every pipeline. Walks a directory tree, keeps image files that
//! carry an sref code in their name, and buckets them into complete groups.
//!
//! ## What counts as a group
//!
//! A generation batch produces four images sharing one sref code:
//!
//! ```text
//! images/
//! ├── pears--sref_111_1.png
//! ├── pears--sref_111_2.png
//! ├── pears--sref_111_3.png
//! ├── pears--sref_111_4.png    # group "111", complete
//! ├── plums--sref_222_1.png    # group "222", incomplete, rejected
//! └── notes.txt                # not an image, skipped
//! ```
//!
//! Only groups with exactly the expected member count make it into the
//! [`GalleryIndex`]; everything else lands in the rejected list with its
//! actual count, so partial batches are visible instead of silently gone.
//!
//! ## Determinism
//!
//! Discovered entries are sorted by (sref, path) and the index is a
//! [`BTreeMap`], so two scans of the same tree serialize byte-identically
//! no matter what order the filesystem yields entries in.

use crate::naming;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Extensions accepted by the scanner. The suffix match is case-sensitive:
/// `photo.PNG` is not picked up, matching the generator's output casing.
const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Member count of a complete source group (one generation batch).
pub const GROUP_SIZE: usize = 4;

/// The gallery index: sref code → root-relative image paths, in
/// (sref, path) order. The sole artifact every emitter consumes.
pub type GalleryIndex = BTreeMap<String, Vec<String>>;

/// A single image found during traversal, before grouping.
///
/// Field order matters: the derived ordering sorts by sref first, then path,
/// which is the order groups are built in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveredImage {
    /// Digit code extracted from the filename.
    pub sref: String,
    /// Path relative to the scanned root.
    pub rel_path: String,
}

/// A group that failed the completeness filter, with its actual size.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RejectedGroup {
    pub sref: String,
    pub count: usize,
}

/// Scan result: the accepted index plus everything that was dropped.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub index: GalleryIndex,
    pub rejected: Vec<RejectedGroup>,
}

/// Scan `root` and group the discovered images into complete batches.
pub fn scan(root: &Path) -> Result<ScanReport, ScanError> {
    let discovered = discover(root)?;
    let (index, rejected) = group(
        discovered.into_iter().map(|d| (d.sref, d.rel_path)),
        GROUP_SIZE,
    );
    Ok(ScanReport { index, rejected })
}

/// Walk `root` recursively and collect every image file carrying an sref
/// code, sorted by (sref, path).
///
/// Files without the code, or with an unrecognized extension, are skipped
/// without diagnostics; the tree is expected to contain unrelated files.
/// Traversal errors (unreadable directories, vanished entries) abort the
/// scan.
pub fn discover(root: &Path) -> Result<Vec<DiscoveredImage>, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_image_suffix(&name) {
            continue;
        }
        if let Some(sref) = naming::extract_sref(&name) {
            // Walkdir only yields paths under root, so strip_prefix cannot fail
            let rel = entry.path().strip_prefix(root).unwrap();
            images.push(DiscoveredImage {
                sref: sref.to_string(),
                rel_path: rel.to_string_lossy().to_string(),
            });
        }
    }

    images.sort();
    Ok(images)
}

/// Bucket (sref, path) pairs by sref, preserving input order per code, and
/// split the buckets into accepted groups (exactly `expected` members) and
/// rejected ones.
pub fn group<I>(entries: I, expected: usize) -> (GalleryIndex, Vec<RejectedGroup>)
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut buckets: GalleryIndex = BTreeMap::new();
    for (sref, path) in entries {
        buckets.entry(sref).or_default().push(path);
    }

    let mut index = GalleryIndex::new();
    let mut rejected = Vec::new();
    for (sref, paths) in buckets {
        if paths.len() == expected {
            index.insert(sref, paths);
        } else {
            rejected.push(RejectedGroup {
                sref,
                count: paths.len(),
            });
        }
    }
    (index, rejected)
}

fn has_image_suffix(filename: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|s| filename.ends_with(s))
}
