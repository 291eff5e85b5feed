use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{FULL_TURN, PLACEHOLDER_NAME};

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\r\n]+").expect("separator pattern is valid"));

/// Splits newline- or comma-delimited text into trimmed, non-empty names.
pub fn parse_entrants(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `text`, falling back to `defaults` when nothing usable was entered.
pub fn load_names(text: &str, defaults: &[String]) -> Vec<String> {
    let parsed = parse_entrants(text);
    if parsed.is_empty() {
        log::info!("No names entered, using the default list of {}", defaults.len());
        defaults.to_vec()
    } else {
        parsed
    }
}

/// Ordered entrants on the wheel. Never empty: a placeholder stands in for
/// an empty list. Duplicate names stay separate segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

#[allow(clippy::len_without_is_empty)]
impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        if names.is_empty() {
            log::warn!("Empty roster, substituting placeholder entrant");
            return Self { names: vec![PLACEHOLDER_NAME.to_string()] };
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn is_placeholder(&self) -> bool {
        self.names.len() == 1 && self.names[0] == PLACEHOLDER_NAME
    }
}

impl From<&[String]> for Roster {
    fn from(names: &[String]) -> Self {
        Roster::new(names.to_vec())
    }
}

/// Angular width of one segment in degrees.
pub fn segment_angle(count: usize) -> f64 {
    FULL_TURN / count.max(1) as f64
}

/// Disc-frame range `[start, end)` in degrees occupied by segment `index`.
pub fn segment_range(index: usize, count: usize) -> (f64, f64) {
    let width = segment_angle(count);
    (index as f64 * width, (index + 1) as f64 * width)
}

pub fn segment_center(index: usize, count: usize) -> f64 {
    let width = segment_angle(count);
    index as f64 * width + width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let names = parse_entrants(" Alice,Bob\n\n  Carol ,, \r\nDave ");
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_entrants("A,A,B"), vec!["A", "A", "B"]);
    }

    #[test]
    fn test_load_names_falls_back() {
        let defaults = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(load_names(" , \n ", &defaults), defaults);
        assert_eq!(load_names("Z", &defaults), vec!["Z"]);
    }

    #[test]
    fn test_empty_roster_gets_placeholder() {
        let roster = Roster::new(Vec::new());
        assert_eq!(roster.len(), 1);
        assert!(roster.is_placeholder());
        assert_eq!(roster.name(0), Some(PLACEHOLDER_NAME));
    }

    #[test]
    fn test_segment_geometry() {
        assert_eq!(segment_angle(4), 90.0);
        assert_eq!(segment_range(2, 4), (180.0, 270.0));
        assert_eq!(segment_center(0, 8), 22.5);
        assert_eq!(segment_angle(0), 360.0);
    }
}
