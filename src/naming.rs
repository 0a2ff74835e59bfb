//! Centralized filename parsing for the sref naming convention.
//!
//! Generated image batches carry their style-reference code directly in the
//! filename as `--sref_<digits>`, and batch members end their stem with a
//! single sequence digit:
//!
//! ```text
//! pears--sref_2997541437_1.png   → code "2997541437", sequence '1'
//! pears--sref_2997541437_2.png   → code "2997541437", sequence '2'
//! snapshot.png                   → no code, ignored by every pipeline
//! ```
//!
//! The filename is the only metadata source; there are no sidecars and no
//! embedded tags.

/// Marker preceding the digit run that forms the sref code.
const SREF_MARKER: &str = "--sref_";

/// Extract the sref code from a filename.
///
/// The code is the maximal run of ASCII digits immediately following
/// `--sref_`. A marker followed by no digits does not match, but a later
/// occurrence still can:
/// - `"pears--sref_123_4.png"` → `Some("123")`
/// - `"--sref_x--sref_77.jpg"` → `Some("77")`
/// - `"pears_4.png"` → `None`
pub fn extract_sref(filename: &str) -> Option<&str> {
    let mut rest = filename;
    while let Some(pos) = rest.find(SREF_MARKER) {
        let digits = &rest[pos + SREF_MARKER.len()..];
        let len = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if len > 0 {
            return Some(&digits[..len]);
        }
        rest = digits;
    }
    None
}

/// The sequence digit is the last character of a file stem, if it is an
/// ASCII digit. Stems without one are not batch members and get no
/// derivatives.
///
/// - `"pears--sref_123_4"` → `Some('4')`
/// - `"pears--sref_123_cover"` → `None`
pub fn trailing_sequence_digit(stem: &str) -> Option<char> {
    stem.chars().next_back().filter(char::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sref_extracted_from_typical_batch_name() {
        assert_eq!(
            extract_sref("pears--sref_2997541437_1.png"),
            Some("2997541437")
        );
    }

    #[test]
    fn sref_stops_at_first_non_digit() {
        assert_eq!(extract_sref("a--sref_123_4.png"), Some("123"));
        assert_eq!(extract_sref("a--sref_123.jpg"), Some("123"));
    }

    #[test]
    fn no_marker_means_no_code() {
        assert_eq!(extract_sref("pears_4.png"), None);
        assert_eq!(extract_sref("b.png"), None);
    }

    #[test]
    fn marker_without_digits_does_not_match() {
        assert_eq!(extract_sref("a--sref_.png"), None);
        assert_eq!(extract_sref("a--sref_x.png"), None);
    }

    #[test]
    fn search_continues_past_digitless_marker() {
        assert_eq!(extract_sref("a--sref_x--sref_77.jpg"), Some("77"));
    }

    #[test]
    fn first_matching_occurrence_wins() {
        assert_eq!(extract_sref("a--sref_11--sref_22.png"), Some("11"));
    }

    #[test]
    fn sequence_digit_from_stem() {
        assert_eq!(trailing_sequence_digit("pears--sref_123_4"), Some('4'));
        assert_eq!(trailing_sequence_digit("x1"), Some('1'));
    }

    #[test]
    fn no_sequence_digit_for_non_digit_tail() {
        assert_eq!(trailing_sequence_digit("pears--sref_123_cover"), None);
        assert_eq!(trailing_sequence_digit(""), None);
    }
}
