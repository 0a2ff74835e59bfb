//! HTML gallery generation.
//!
//! Renders the whole index into one self-contained page: stylesheet, data,
//! and behavior are all inline, so the file can be opened from disk or
//! dropped on any static host with no further assets.
//!
//! ## Page anatomy
//!
//! - a header block
//! - a fixed control strip with five tile-size presets (XS–XL)
//! - an empty `.gallery` container
//! - the index embedded as `GALLERY_DATA` (JSON in a script tag)
//! - the client script, which builds one tile per sref on load: a 2×2
//!   image grid plus the code with a copy-to-clipboard button
//!
//! Tiles are built client-side from the embedded data rather than rendered
//! here; the page is data plus behavior, and the emitter stays a thin shell
//! around the index.
//!
//! Output is deterministic: the index iterates in key order and nothing
//! time-varying is embedded, so the same index always produces the same
//! bytes.
//!
//! ## HTML generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! the stylesheet and script are embedded at compile time via
//! `include_str!`.

use crate::emit;
use crate::scan::GalleryIndex;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS: &str = include_str!("../static/gallery.css");
const JS: &str = include_str!("../static/gallery.js");

/// Tile-size presets offered by the control strip, in pixels of tile width.
/// The middle preset is active on load.
const SIZE_PRESETS: &[(&str, u32)] = &[
    ("XS", 150),
    ("S", 225),
    ("M", 300),
    ("L", 375),
    ("XL", 450),
];

const DEFAULT_SIZE: u32 = 300;

/// Render the gallery page and write it atomically to `output_path`.
pub fn generate(index: &GalleryIndex, output_path: &Path) -> Result<(), GenerateError> {
    let page = render_gallery(index)?;
    emit::write_atomic(output_path, page.into_string().as_bytes())?;
    Ok(())
}

/// Render the complete gallery document.
pub fn render_gallery(index: &GalleryIndex) -> Result<Markup, GenerateError> {
    let data = serde_json::to_string(index)?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Style Reference Gallery" }
                style { (PreEscaped(CSS)) }
            }
            body {
                header.header {
                    h1 { "Style Reference Gallery" }
                    p.tagline { "Four images per code. Click Copy to grab the code." }
                }
                div.controls {
                    span { "Image size: " }
                    @for (label, size) in SIZE_PRESETS {
                        button.size-btn.active[*size == DEFAULT_SIZE] data-size=(size) {
                            (label)
                        }
                    }
                }
                div.gallery {}
                script {
                    (PreEscaped(format!("const GALLERY_DATA = {data};")))
                }
                script { (PreEscaped(JS)) }
            }
        }
    })
}
