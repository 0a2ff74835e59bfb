//! Index serialization and atomic file writes.
//!
//! Every artifact (JSON index, HTML page) is written through
//! [`write_atomic`]: the content goes to a sibling temp file first and is
//! renamed over the target, so an interrupted run leaves either the old
//! file or the new one, never a truncated mix.

use crate::scan::GalleryIndex;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize the index as two-space-indented JSON and write it atomically.
///
/// The file holds the bare `{sref: [paths]}` map, nothing else: it is the
/// exact shape the gallery page embeds.
pub fn write_index(index: &GalleryIndex, path: &Path) -> Result<(), EmitError> {
    let json = serde_json::to_string_pretty(index)?;
    write_atomic(path, json.as_bytes())?;
    Ok(())
}

/// Write `contents` to `path` via a temp file in the same directory plus a
/// rename. The rename stays within one filesystem, so it cannot degrade
/// into a copy.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("out"));
    name.push(".tmp");
    path.with_file_name(name)
}
