// file: src/extractor/patterns.rs
// description: compiled regex patterns for clause segmentation, sanitizing and entity extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Clause structure
    pub static ref CLAUSE_LINE: Regex = Regex::new(
        r"(?m)^[0-9]+\. .+$"
    ).expect("CLAUSE_LINE regex is valid");

    pub static ref POINT_MARKER: Regex = Regex::new(
        r"^([0-9]+)\. "
    ).expect("POINT_MARKER regex is valid");

    // Rendered entities
    pub static ref STRONG_SPAN: Regex = Regex::new(
        r"<strong>(.*?)</strong>"
    ).expect("STRONG_SPAN regex is valid");

    pub static ref EMPHASIS_SPAN: Regex = Regex::new(
        r"<em>(.*?)</em>"
    ).expect("EMPHASIS_SPAN regex is valid");

    // Raw markup
    pub static ref HTML_COMMENT: Regex = Regex::new(
        r"(?s)<!--.*?-->"
    ).expect("HTML_COMMENT regex is valid");

    pub static ref SCRIPT_BLOCK: Regex = Regex::new(
        r"(?is)<script\b[^>]*>.*?</script\s*>"
    ).expect("SCRIPT_BLOCK regex is valid");

    pub static ref STYLE_BLOCK: Regex = Regex::new(
        r"(?is)<style\b[^>]*>.*?</style\s*>"
    ).expect("STYLE_BLOCK regex is valid");

    pub static ref HTML_TAG: Regex = Regex::new(
        r"</?([A-Za-z][A-Za-z0-9-]*)\b[^>]*>"
    ).expect("HTML_TAG regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_line_pattern() {
        assert!(CLAUSE_LINE.is_match("1. Drive carefully."));
        assert!(CLAUSE_LINE.is_match("12. Multi digit marker."));
        assert!(!CLAUSE_LINE.is_match("1.No space after the period."));
        assert!(!CLAUSE_LINE.is_match(" 1. Indented marker."));
        assert!(!CLAUSE_LINE.is_match("\u{0661}\u{0662}. Arabic-Indic digits."));
    }

    #[test]
    fn test_point_marker_pattern() {
        let caps = POINT_MARKER.captures("23. Text").unwrap();
        assert_eq!(&caps[1], "23");
        assert!(!POINT_MARKER.is_match("Text 23. more"));
        assert!(!POINT_MARKER.is_match("\u{0968}. Devanagari digit"));
    }

    #[test]
    fn test_span_patterns_are_lazy() {
        let html = "<strong>A</strong> and <strong>B</strong>";
        let spans: Vec<&str> = STRONG_SPAN
            .captures_iter(html)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(spans, vec!["A", "B"]);
    }

    #[test]
    fn test_html_tag_pattern() {
        let caps = HTML_TAG.captures("<a href=\"x\">").unwrap();
        assert_eq!(&caps[1], "a");
        assert!(!HTML_TAG.is_match("a < b > c"));
    }
}
