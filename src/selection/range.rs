//! Range specs like `1-4,6-7`
//!
//! A spec is a comma-separated list of numbers or inclusive `a-b` pieces.
//! Overlapping pieces collapse into one set. Empty pieces are ignored, so
//! an empty spec selects nothing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::error::{Result, ToolError};

static PIECE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").expect("range piece pattern is valid")
});

/// Parse a range spec into the set of numbers it covers
pub fn parse_range(spec: &str) -> Result<BTreeSet<u32>> {
    let mut numbers = BTreeSet::new();

    for piece in spec.split(',') {
        if piece.trim().is_empty() {
            continue;
        }

        let invalid = || ToolError::SelectionSpec {
            spec: spec.to_string(),
            token: piece.trim().to_string(),
        };

        let caps = PIECE.captures(piece).ok_or_else(invalid)?;
        let start: u32 = caps[1].parse().map_err(|_| invalid())?;
        let stop: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => start,
        };

        // Numbering is 1-based and pieces run low to high
        if start == 0 || stop < start {
            return Err(invalid());
        }

        numbers.extend(start..=stop);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u32]) -> BTreeSet<u32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_spec() {
        assert_eq!(parse_range("").unwrap(), set(&[]));
    }

    #[test]
    fn test_single_numbers() {
        assert_eq!(parse_range("1").unwrap(), set(&[1]));
        assert_eq!(parse_range("1,2").unwrap(), set(&[1, 2]));
    }

    #[test]
    fn test_mixed_pieces() {
        assert_eq!(parse_range("1,2-3").unwrap(), set(&[1, 2, 3]));
        assert_eq!(parse_range("1,2-4").unwrap(), set(&[1, 2, 3, 4]));
        assert_eq!(parse_range("1-4,6-7").unwrap(), set(&[1, 2, 3, 4, 6, 7]));
    }

    #[test]
    fn test_overlaps_collapse() {
        assert_eq!(parse_range("1-3,2-5,5").unwrap(), set(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_whitespace_and_trailing_commas() {
        assert_eq!(parse_range(" 2 - 3 , ,5,").unwrap(), set(&[2, 3, 5]));
    }

    #[test]
    fn test_rejects_non_integer_token() {
        let err = parse_range("1,x-3").unwrap_err();
        match err {
            ToolError::SelectionSpec { token, .. } => assert_eq!(token, "x-3"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_zero_and_descending() {
        assert!(parse_range("0").is_err());
        assert!(parse_range("4-2").is_err());
        assert!(parse_range("1-2-3").is_err());
    }
}
