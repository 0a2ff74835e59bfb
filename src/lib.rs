//! # sref-gallery
//!
//! A file-organization utility for generated image batches. Your filesystem
//! is the data source: filenames carry a style-reference code
//! (`--sref_<digits>`), four images sharing a code form a group, and the
//! tool turns the groups into a JSON index, a self-contained HTML gallery,
//! or a tree of fixed-resolution derivatives.
//!
//! # Architecture: Scan → (Resize) → Emit
//!
//! ```text
//! 1. Scan      images/   →  GalleryIndex      (filesystem → grouped paths)
//! 2. Process   index     →  images/pears/     (S/M/L derivatives, lod only)
//! 3. Emit      index     →  gallery_data.json or gallery.html
//! ```
//!
//! Each stage is a function over plain data: the scanner produces the
//! index, the resizer rewrites it in terms of derivative files, and the
//! emitters only format. Incomplete groups are never silently dropped —
//! every report carries the rejected codes with their actual counts.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the image tree, extracts sref codes, groups complete batches |
//! | [`process`] | Renders every batch member at the three fixed resolutions |
//! | [`generate`] | Renders the self-contained HTML gallery page using Maud |
//! | [`emit`] | JSON index serialization and atomic file writes |
//! | [`naming`] | `--sref_<digits>` / trailing-digit filename convention parser |
//! | [`imaging`] | Pure-Rust image operations behind the backend seam |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Single Pass, Single Thread
//!
//! Every run recomputes the index from scratch and runs sequentially.
//! There is no cache, no staleness check, and re-running overwrites
//! derivatives unconditionally; the filesystem is the only state.
//!
//! ## Deterministic Output
//!
//! Discovered images are sorted by (sref, path) and the index is a B-tree
//! map, so the JSON file and the HTML page are byte-identical across runs
//! and platforms. Artifacts are written atomically (temp file + rename) —
//! an interrupted run never leaves a truncated index behind.
//!
//! ## Maud Over Template Engines
//!
//! The gallery page is generated with [Maud](https://maud.lambda.xyz/)
//! compile-time templates: malformed HTML is a build error, interpolation
//! is auto-escaped, and there is no template directory to ship.
//!
//! ## Pure-Rust Imaging
//!
//! Resizing uses the `image` crate (Lanczos3, JPEG encoding) — no
//! ImageMagick, no system dependencies. The backend sits behind the
//! [`imaging::ImageBackend`] trait so pipeline logic is tested against a
//! recording mock instead of real pixels.

pub mod emit;
pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
