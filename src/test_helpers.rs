//! Shared test utilities for the sref-gallery test suite.
//!
//! The scanner and grouper never open files, so most fixtures are stub
//! bytes with meaningful names. Pipelines that decode for real (the LOD
//! integration test) encode their own PNGs instead.

use std::fs;
use std::path::Path;

/// Write a stub file. Content is irrelevant; only the name is parsed.
pub fn write_stub(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"stub").unwrap();
}

/// Write a batch of `count` stub members for `sref`, named in the
/// generator's convention. Returns the filenames in sequence order.
pub fn write_batch(dir: &Path, sref: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| {
            let name = format!("pears--sref_{sref}_{i}.png");
            write_stub(dir, &name);
            name
        })
        .collect()
}
