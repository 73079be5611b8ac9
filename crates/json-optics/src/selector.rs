//! Selector tokens and path splitting.
//!
//! A path string such as `employees[0].name` is first split into segment
//! candidates (`employees`, `[0]`, `name`) and each candidate is then
//! classified into a [`Selector`] token. Classification is permissive by
//! default: a candidate matching none of the bracket grammars becomes a
//! literal [`Selector::Field`] lookup. [`Selector::parse_strict`] upgrades
//! that fallback to an error for callers that prefer loud failures.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Error produced by the strict selector parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The segment opens a bracket group but matches no bracket grammar.
    #[error("malformed bracket selector: {0:?}")]
    MalformedBracket(String),
    /// The segment selects multiple values in a single-result path.
    #[error("selector {0:?} selects multiple values; use a multi-result path")]
    NotSingular(String),
    /// The path contains an empty segment (for example `a..b`).
    #[error("empty path segment")]
    EmptySegment,
}

/// The navigation intent of one path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Bare field name: `employees`.
    Field(String),
    /// Quoted field name in brackets: `['first name']`.
    BracketField(String),
    /// Array index: `[3]`.
    Index(usize),
    /// Set of array indices: `[1,4,6]`.
    IndexSet(Vec<usize>),
    /// All indices from `start` on: `[2:]`.
    RangeFrom(usize),
    /// Indices in `start..end`, end exclusive: `[2:5]`.
    RangeBetween(usize, usize),
    /// Every child: `*`.
    Wildcard,
}

fn bracket_field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\['([^']*)'\]$").unwrap())
}

fn index_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([0-9]+)\]$").unwrap())
}

fn index_set_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([0-9]+(?:,[0-9]+)*)\]$").unwrap())
}

fn range_from_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([0-9]+):\]$").unwrap())
}

fn range_between_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([0-9]+):([0-9]+)\]$").unwrap())
}

fn match_bracket_field(segment: &str) -> Option<&str> {
    bracket_field_regex()
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str())
}

fn match_index(segment: &str) -> Option<usize> {
    index_regex()
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .and_then(|group| group.as_str().parse().ok())
}

fn match_index_set(segment: &str) -> Option<Vec<usize>> {
    let group = index_set_regex()
        .captures(segment)
        .and_then(|caps| caps.get(1))?;
    group
        .as_str()
        .split(',')
        .map(|index| index.parse().ok())
        .collect()
}

fn match_range_from(segment: &str) -> Option<usize> {
    range_from_regex()
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .and_then(|group| group.as_str().parse().ok())
}

fn match_range_between(segment: &str) -> Option<(usize, usize)> {
    let caps = range_between_regex().captures(segment)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}

impl Selector {
    /// Classify one segment candidate.
    ///
    /// Grammars are tried in order; the whole segment must match. A segment
    /// matching none of them degrades to a literal field lookup, so a
    /// mistyped bracket expression reads as an (almost certainly absent)
    /// field rather than failing.
    pub fn parse(segment: &str) -> Selector {
        if let Some(name) = match_bracket_field(segment) {
            return Selector::BracketField(name.to_owned());
        }
        if let Some(index) = match_index(segment) {
            return Selector::Index(index);
        }
        if let Some(indices) = match_index_set(segment) {
            return Selector::IndexSet(indices);
        }
        if let Some(start) = match_range_from(segment) {
            return Selector::RangeFrom(start);
        }
        if let Some((start, end)) = match_range_between(segment) {
            return Selector::RangeBetween(start, end);
        }
        if segment == "*" {
            return Selector::Wildcard;
        }
        Selector::Field(segment.to_owned())
    }

    /// Classify one segment candidate, rejecting inputs the permissive
    /// parser would silently degrade.
    pub fn parse_strict(segment: &str) -> Result<Selector, SelectorError> {
        if segment.is_empty() {
            return Err(SelectorError::EmptySegment);
        }
        let selector = Selector::parse(segment);
        if matches!(selector, Selector::Field(_)) && segment.starts_with('[') {
            return Err(SelectorError::MalformedBracket(segment.to_owned()));
        }
        Ok(selector)
    }
}

/// Split a path string into segment candidates.
///
/// The path is split on `field_delim` (removed), then every piece containing
/// `index_delim` is split again so that each bracket group becomes its own
/// candidate, with the delimiter kept as its prefix. `this[0].thing` yields
/// `["this", "[0]", "thing"]`; a piece starting with the index delimiter
/// produces no empty leading candidate.
pub fn split_path(path: &str, field_delim: &str, index_delim: &str) -> Vec<String> {
    let mut segments = Vec::new();
    for piece in path.split(field_delim) {
        if !piece.contains(index_delim) {
            segments.push(piece.to_owned());
        } else if let Some(rest) = piece.strip_prefix(index_delim) {
            for group in rest.split(index_delim) {
                segments.push(format!("{}{}", index_delim, group));
            }
        } else if let Some((name, rest)) = piece.split_once(index_delim) {
            segments.push(name.to_owned());
            for group in rest.split(index_delim) {
                segments.push(format!("{}{}", index_delim, group));
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_field() {
        assert_eq!(
            Selector::parse("employees"),
            Selector::Field("employees".to_string())
        );
    }

    #[test]
    fn test_parse_bracket_field() {
        assert_eq!(
            Selector::parse("['first name']"),
            Selector::BracketField("first name".to_string())
        );
        assert_eq!(
            Selector::parse("['']"),
            Selector::BracketField(String::new())
        );
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(Selector::parse("[0]"), Selector::Index(0));
        assert_eq!(Selector::parse("[42]"), Selector::Index(42));
    }

    #[test]
    fn test_parse_index_set() {
        assert_eq!(
            Selector::parse("[1,4,6]"),
            Selector::IndexSet(vec![1, 4, 6])
        );
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(Selector::parse("[2:]"), Selector::RangeFrom(2));
        assert_eq!(Selector::parse("[2:5]"), Selector::RangeBetween(2, 5));
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(Selector::parse("*"), Selector::Wildcard);
    }

    #[test]
    fn test_partial_bracket_match_degrades_to_field() {
        // The whole segment must match the bracket grammar.
        assert_eq!(
            Selector::parse("[0]x"),
            Selector::Field("[0]x".to_string())
        );
        assert_eq!(
            Selector::parse("[1,]"),
            Selector::Field("[1,]".to_string())
        );
        assert_eq!(
            Selector::parse("[:2]"),
            Selector::Field("[:2]".to_string())
        );
    }

    #[test]
    fn test_overlong_index_degrades_to_field() {
        let segment = "[99999999999999999999999999]";
        assert_eq!(
            Selector::parse(segment),
            Selector::Field(segment.to_string())
        );
    }

    #[test]
    fn test_parse_strict_rejects_malformed_brackets() {
        assert_eq!(
            Selector::parse_strict("[oops"),
            Err(SelectorError::MalformedBracket("[oops".to_string()))
        );
        assert_eq!(
            Selector::parse_strict(""),
            Err(SelectorError::EmptySegment)
        );
        assert_eq!(Selector::parse_strict("[3]"), Ok(Selector::Index(3)));
        assert_eq!(
            Selector::parse_strict("name"),
            Ok(Selector::Field("name".to_string()))
        );
    }

    #[test]
    fn test_split_plain_path() {
        assert_eq!(split_path("a.b.c", ".", "["), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_bracket_groups() {
        assert_eq!(
            split_path("this[0].thing", ".", "["),
            vec!["this", "[0]", "thing"]
        );
    }

    #[test]
    fn test_split_piece_starting_with_bracket() {
        assert_eq!(split_path("[0].name", ".", "["), vec!["[0]", "name"]);
    }

    #[test]
    fn test_split_consecutive_bracket_groups() {
        assert_eq!(
            split_path("grid[1][2]", ".", "["),
            vec!["grid", "[1]", "[2]"]
        );
    }

    #[test]
    fn test_split_with_custom_delimiters() {
        assert_eq!(
            split_path("a/b(0)", "/", "("),
            vec!["a", "b", "(0)"]
        );
    }

    #[test]
    fn test_split_preserves_empty_segments_between_field_delims() {
        assert_eq!(split_path("a..b", ".", "["), vec!["a", "", "b"]);
    }
}
