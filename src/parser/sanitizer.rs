// file: src/parser/sanitizer.rs
// description: allow-list html tag stripping applied before segmentation and after rendering
// reference: https://docs.rs/regex/latest/regex/struct.Regex.html#method.replace_all

use crate::extractor::patterns::{HTML_COMMENT, HTML_TAG, SCRIPT_BLOCK, STYLE_BLOCK};
use regex::Captures;

/// Strips markup tags that are not on the allow-list, keeping their text.
///
/// Comments and `script`/`style` blocks are removed together with their
/// content. Allowed tags are re-emitted bare, without attributes.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    allowed_tags: Vec<String>,
}

impl Sanitizer {
    /// Policy that allows no tags at all.
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn with_allowed_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_tags: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn sanitize(&self, input: &str) -> String {
        let without_comments = HTML_COMMENT.replace_all(input, "");
        let without_scripts = SCRIPT_BLOCK.replace_all(&without_comments, "");
        let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");

        HTML_TAG
            .replace_all(&without_styles, |caps: &Captures| self.rewrite_tag(caps))
            .into_owned()
    }

    fn rewrite_tag(&self, caps: &Captures) -> String {
        let name = caps[1].to_ascii_lowercase();
        if !self.allowed_tags.contains(&name) {
            return String::new();
        }

        if caps[0].starts_with("</") {
            format!("</{}>", name)
        } else {
            format!("<{}>", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_strips_all_tags() {
        let sanitizer = Sanitizer::strict();
        let html = "<p>Drive <strong>carefully</strong> near <em>schools</em>.</p>\n";
        assert_eq!(sanitizer.sanitize(html), "Drive carefully near schools.\n");
    }

    #[test]
    fn test_removes_script_and_comment_content() {
        let sanitizer = Sanitizer::strict();
        let input = "1. Keep<!-- note --> <script>alert(1)</script>left.";
        assert_eq!(sanitizer.sanitize(input), "1. Keep left.");
    }

    #[test]
    fn test_allow_list_keeps_bare_tags() {
        let sanitizer = Sanitizer::with_allowed_tags(["strong", "EM"]);
        let html = "<p><strong class=\"x\">A</strong> <em>b</em> <a href=\"/\">c</a></p>";
        assert_eq!(sanitizer.sanitize(html), "<strong>A</strong> <em>b</em> c");
    }

    #[test]
    fn test_leaves_markdown_untouched() {
        let sanitizer = Sanitizer::strict();
        let input = "1. Use **bold** when 3 < 4 and *italic*.";
        assert_eq!(sanitizer.sanitize(input), input);
    }
}
