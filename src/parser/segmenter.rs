// file: src/parser/segmenter.rs
// description: slices a document body into numbered clauses
// reference: src/parser/normalizer.rs line break handling

use crate::extractor::patterns::{CLAUSE_LINE, POINT_MARKER};
use crate::models::{Clause, Parsed};
use crate::parser::sanitizer::Sanitizer;

// Private-use code point; stripped from the input before it is used.
const PARAGRAPH_SENTINEL: &str = "\u{E000}";

pub struct ClauseSegmenter {
    sanitizer: Sanitizer,
}

impl ClauseSegmenter {
    pub fn new() -> Self {
        Self {
            sanitizer: Sanitizer::strict(),
        }
    }

    /// Returns one clause per line opening with `N. `, in body order.
    pub fn segment(&self, body: &str) -> Vec<Clause> {
        let sanitized = self.sanitizer.sanitize(body);
        let normalized = self.normalize_line_breaks(&sanitized);

        CLAUSE_LINE
            .find_iter(&normalized)
            .map(|m| {
                let (point, rest) = split_point(m.as_str());
                Clause::new(point, rest)
            })
            .collect()
    }

    /// Joins soft-wrapped lines with a space while keeping paragraph breaks.
    pub fn normalize_line_breaks(&self, content: &str) -> String {
        content
            .replace(PARAGRAPH_SENTINEL, "")
            .replace("\r\n", "\n")
            .replace("\n\n", PARAGRAPH_SENTINEL)
            .replace('\n', " ")
            .replace(PARAGRAPH_SENTINEL, "\n\n")
    }
}

impl Default for ClauseSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn split_point(line: &str) -> (Parsed<u32>, &str) {
    match POINT_MARKER.captures(line) {
        Some(caps) => {
            let marker = caps.get(0).map_or(0, |m| m.end());
            let digits = caps.get(1).map_or("", |m| m.as_str());
            (Parsed::parse_or(digits, 0, "point number"), &line[marker..])
        }
        None => (Parsed::Defaulted { fallback: 0 }, line),
    }
}
