//! CLI output formatting for all pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! The report always ends with the aggregate group count, and rejected
//! groups are listed with their actual sizes so partial batches never
//! disappear without a trace:
//!
//! ```text
//! Groups
//!     2997541437 (4 images)
//!     864554162 (4 images)
//! Rejected
//!     555123: 3 images (expected 4)
//! Total sref groups: 2
//! ```

use crate::process::{LOD_GROUP_SIZE, LodReport};
use crate::scan::{GalleryIndex, RejectedGroup, ScanReport};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the group listing shared by every report.
fn group_lines(index: &GalleryIndex, rejected: &[RejectedGroup], expected: usize) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Groups".to_string());
    if index.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (sref, paths) in index {
        lines.push(format!("{}{} ({} images)", indent(1), sref, paths.len()));
    }

    if !rejected.is_empty() {
        lines.push("Rejected".to_string());
        for r in rejected {
            lines.push(format!(
                "{}{}: {} images (expected {})",
                indent(1),
                r.sref,
                r.count,
                expected
            ));
        }
    }

    lines
}

/// Format scan stage output.
pub fn format_scan_report(report: &ScanReport) -> Vec<String> {
    let mut lines = group_lines(&report.index, &report.rejected, crate::scan::GROUP_SIZE);
    lines.push(format!("Total sref groups: {}", report.index.len()));
    lines
}

/// Format LOD stage output: group listing plus source/skip accounting.
pub fn format_lod_report(report: &LodReport) -> Vec<String> {
    let mut lines = group_lines(&report.index, &report.rejected, LOD_GROUP_SIZE);

    lines.push(format!("Sources rendered: {}", report.sources));
    if !report.skipped_unnumbered.is_empty() {
        lines.push("Skipped (no trailing sequence digit)".to_string());
        for path in &report.skipped_unnumbered {
            lines.push(format!("{}{}", indent(1), path));
        }
    }
    lines.push(format!("Total sref groups: {}", report.index.len()));
    lines
}

pub fn print_scan_report(report: &ScanReport) {
    for line in format_scan_report(report) {
        println!("{line}");
    }
}

pub fn print_lod_report(report: &LodReport) {
    for line in format_lod_report(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn report_with(groups: &[(&str, usize)], rejected: &[(&str, usize)]) -> ScanReport {
        let mut index = BTreeMap::new();
        for (sref, n) in groups {
            index.insert(
                sref.to_string(),
                (0..*n).map(|i| format!("{sref}-{i}.png")).collect(),
            );
        }
        ScanReport {
            index,
            rejected: rejected
                .iter()
                .map(|(sref, count)| RejectedGroup {
                    sref: sref.to_string(),
                    count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn scan_report_lists_groups_and_total() {
        let lines = format_scan_report(&report_with(&[("111", 4), ("222", 4)], &[]));

        assert_eq!(lines[0], "Groups");
        assert_eq!(lines[1], "    111 (4 images)");
        assert_eq!(lines[2], "    222 (4 images)");
        assert_eq!(lines.last().unwrap(), "Total sref groups: 2");
    }

    #[test]
    fn rejected_groups_show_actual_and_expected_counts() {
        let lines = format_scan_report(&report_with(&[], &[("333", 3)]));

        assert!(lines.contains(&"Rejected".to_string()));
        assert!(lines.contains(&"    333: 3 images (expected 4)".to_string()));
        assert_eq!(lines.last().unwrap(), "Total sref groups: 0");
    }

    #[test]
    fn empty_scan_report_is_explicit() {
        let lines = format_scan_report(&report_with(&[], &[]));

        assert_eq!(lines[1], "    (none)");
        assert_eq!(lines.last().unwrap(), "Total sref groups: 0");
    }

    #[test]
    fn lod_report_accounts_for_sources_and_skips() {
        let report = LodReport {
            index: BTreeMap::new(),
            rejected: vec![],
            sources: 8,
            skipped_unnumbered: vec!["cover.png".to_string()],
        };

        let lines = format_lod_report(&report);

        assert!(lines.contains(&"Sources rendered: 8".to_string()));
        assert!(lines.contains(&"Skipped (no trailing sequence digit)".to_string()));
        assert!(lines.contains(&"    cover.png".to_string()));
    }

    #[test]
    fn lod_rejections_use_the_derivative_group_size() {
        let report = LodReport {
            index: BTreeMap::new(),
            rejected: vec![RejectedGroup {
                sref: "9".to_string(),
                count: 9,
            }],
            sources: 3,
            skipped_unnumbered: vec![],
        };

        let lines = format_lod_report(&report);
        assert!(lines.contains(&"    9: 9 images (expected 12)".to_string()));
    }
}
