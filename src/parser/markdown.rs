// file: src/parser/markdown.rs
// description: clause markdown rendering with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use crate::config::RenderConfig;
use crate::extractor::EntityExtractor;
use crate::models::{Clause, RenderedClause};
use crate::parser::sanitizer::Sanitizer;
use pulldown_cmark::{Options, Parser, html};

pub struct MarkupRenderer {
    options: Options,
    extractor: EntityExtractor,
    sanitizer: Sanitizer,
}

impl MarkupRenderer {
    pub fn new() -> Self {
        Self::from_config(&crate::config::Config::default_config().render)
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        let mut options = Options::empty();
        if config.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if config.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if config.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }

        Self {
            options,
            extractor: EntityExtractor::new(),
            sanitizer: Sanitizer::with_allowed_tags(&config.allowed_tags),
        }
    }

    pub fn render_html(&self, content: &str) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut output = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }

    /// Renders a clause, lifts its strong/emphasis spans, and sanitizes the
    /// HTML into the final text.
    ///
    /// Every line break left after sanitizing is removed outright, not
    /// replaced with a space.
    pub fn render(&self, clause: &Clause) -> RenderedClause {
        let rendered = self.render_html(&clause.raw_text);
        let entities = self.extractor.extract(&rendered);
        let text = self.sanitizer.sanitize(&rendered).replace('\n', "");

        RenderedClause {
            point: clause.point,
            text,
            combinations: entities.combinations,
            examples: entities.examples,
        }
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parsed;
    use pretty_assertions::assert_eq;

    fn plain_config() -> RenderConfig {
        RenderConfig {
            smart_punctuation: false,
            tables: false,
            strikethrough: false,
            allowed_tags: vec![],
        }
    }

    #[test]
    fn test_render_clause() {
        let renderer = MarkupRenderer::new();
        let clause = Clause::new(Parsed::Value(1), "Drive **carefully** near *schools*.");

        let rendered = renderer.render(&clause);
        assert_eq!(rendered.point, Parsed::Value(1));
        assert_eq!(rendered.text, "Drive carefully near schools.");
        assert_eq!(rendered.combinations, vec!["carefully"]);
        assert_eq!(rendered.examples, vec!["schools"]);
    }

    #[test]
    fn test_combinations_keep_source_order() {
        let renderer = MarkupRenderer::new();
        let clause = Clause::new(Parsed::Value(2), "**A** before **B**, then **A** again");

        let rendered = renderer.render(&clause);
        assert_eq!(rendered.combinations, vec!["A", "B", "A"]);
        assert!(rendered.examples.is_empty());
    }

    #[test]
    fn test_paragraph_break_is_removed_without_space() {
        let renderer = MarkupRenderer::from_config(&plain_config());
        let clause = Clause::new(Parsed::Value(3), "First part.\n\nSecond part.");

        let rendered = renderer.render(&clause);
        assert_eq!(rendered.text, "First part.Second part.");
    }

    #[test]
    fn test_allowed_tags_survive_second_pass() {
        let mut config = plain_config();
        config.allowed_tags = vec!["strong".to_string()];
        let renderer = MarkupRenderer::from_config(&config);
        let clause = Clause::new(Parsed::Value(1), "Stop **here** and *wait*.");

        let rendered = renderer.render(&clause);
        assert_eq!(rendered.text, "Stop <strong>here</strong> and wait.");
    }

    #[test]
    fn test_smart_punctuation() {
        let renderer = MarkupRenderer::new();
        let html = renderer.render_html("\"quoted\" -- dash");
        assert!(html.contains('\u{201C}'));
        assert!(html.contains('\u{2013}'));

        let plain = MarkupRenderer::from_config(&plain_config());
        assert!(!plain.render_html("\"quoted\"").contains('\u{201C}'));
    }

    #[test]
    fn test_render_html_paragraph() {
        let renderer = MarkupRenderer::from_config(&plain_config());
        assert_eq!(renderer.render_html("plain"), "<p>plain</p>\n");
    }
}
