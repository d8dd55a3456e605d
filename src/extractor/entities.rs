// file: src/extractor/entities.rs
// description: strong and emphasis span extraction from rendered clause html
// reference: https://docs.rs/regex/latest/regex/struct.Regex.html#method.captures_iter

use crate::extractor::patterns::{EMPHASIS_SPAN, STRONG_SPAN};
use regex::Regex;

/// Structural entities found in one rendered clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseEntities {
    pub combinations: Vec<String>,
    pub examples: Vec<String>,
}

/// Pulls emphasized spans out of trusted, already-rendered HTML.
///
/// Spans are returned in document order and duplicates are kept.
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, html: &str) -> ClauseEntities {
        ClauseEntities {
            combinations: self.combinations(html),
            examples: self.examples(html),
        }
    }

    pub fn combinations(&self, html: &str) -> Vec<String> {
        find_entities(html, &STRONG_SPAN)
    }

    pub fn examples(&self, html: &str) -> Vec<String> {
        find_entities(html, &EMPHASIS_SPAN)
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn find_entities(html: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_in_order() {
        let extractor = EntityExtractor::new();
        let html = "<p><strong>A</strong> then <em>x</em> then <strong>B</strong></p>\n";
        let entities = extractor.extract(html);

        assert_eq!(entities.combinations, vec!["A", "B"]);
        assert_eq!(entities.examples, vec!["x"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let extractor = EntityExtractor::new();
        let html = "<em>same</em>, <em>same</em>";
        assert_eq!(extractor.examples(html), vec!["same", "same"]);
    }

    #[test]
    fn test_nested_spans_keep_inner_markup() {
        let extractor = EntityExtractor::new();
        let html = "<em><strong>both</strong></em>";
        let entities = extractor.extract(html);

        assert_eq!(entities.combinations, vec!["both"]);
        assert_eq!(entities.examples, vec!["<strong>both</strong>"]);
    }

    #[test]
    fn test_no_entities() {
        let extractor = EntityExtractor::new();
        assert_eq!(extractor.extract("<p>plain</p>"), ClauseEntities::default());
    }
}
