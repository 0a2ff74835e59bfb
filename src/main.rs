use clap::{Parser, Subcommand};
use sref_gallery::imaging::Quality;
use sref_gallery::{emit, generate, output, process, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sref-gallery")]
#[command(about = "Group style-reference image batches into a static gallery")]
#[command(long_about = "\
Group style-reference image batches into a static gallery

Your filesystem is the data source. Image filenames carry a style-reference
code as --sref_<digits>; the four images of one generation batch share a
code and end their stem with a sequence digit:

  images/
  ├── pears--sref_2997541437_1.png
  ├── pears--sref_2997541437_2.png
  ├── pears--sref_2997541437_3.png
  ├── pears--sref_2997541437_4.png   # complete group \"2997541437\"
  ├── plums--sref_864554162_1.png    # incomplete: reported, not indexed
  └── notes.txt                      # ignored

Recognized extensions: .png .jpg .jpeg (case-sensitive).

Commands write one of three artifacts:
  index     gallery_data.json: {sref: [image paths]}, two-space indented
  gallery   gallery.html: self-contained page (inline data, CSS, script)
  lod       <output>/<sref>/<digit><S|M|L>.jpg derivatives at 256/512/1024px,
            plus the JSON index referencing them")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan for sref groups and write the JSON index
    Index {
        /// Directory to scan
        #[arg(long, default_value = ".")]
        source: PathBuf,
        /// Index file to write
        #[arg(long, default_value = "gallery_data.json")]
        output: PathBuf,
    },
    /// Scan for sref groups and write the HTML gallery page
    Gallery {
        /// Directory to scan
        #[arg(long, default_value = ".")]
        source: PathBuf,
        /// Gallery page to write
        #[arg(long, default_value = "gallery.html")]
        output: PathBuf,
    },
    /// Render S/M/L derivatives for every batch and index them
    Lod {
        /// Directory holding the source batches
        #[arg(long, default_value = "images_in")]
        source: PathBuf,
        /// Root for the derivative tree (one subdirectory per sref)
        #[arg(long, default_value = "images/pears")]
        output: PathBuf,
        /// Index file to write
        #[arg(long, default_value = "gallery_data.json")]
        index: PathBuf,
        /// JPEG quality for derivatives (1-100)
        #[arg(long, default_value_t = 90)]
        quality: u8,
    },
    /// Scan and report groups without writing anything
    Check {
        /// Directory to scan
        #[arg(long, default_value = ".")]
        source: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Index { source, output } => {
            let report = scan::scan(&source)?;
            emit::write_index(&report.index, &output)?;
            output::print_scan_report(&report);
            println!("Index written to {}", output.display());
        }
        Command::Gallery { source, output } => {
            let report = scan::scan(&source)?;
            generate::generate(&report.index, &output)?;
            output::print_scan_report(&report);
            println!("Gallery written to {}", output.display());
        }
        Command::Lod {
            source,
            output,
            index,
            quality,
        } => {
            let report = process::process(&source, &output, Quality::new(quality))?;
            emit::write_index(&report.index, &index)?;
            output::print_lod_report(&report);
            println!("Derivatives written under {}", output.display());
            println!("Index written to {}", index.display());
        }
        Command::Check { source } => {
            let report = scan::scan(&source)?;
            output::print_scan_report(&report);
        }
    }

    Ok(())
}
