// file: src/parser/metadata.rs
// description: `key = "value"` header parsing for rule documents
// reference: src/parser/frontmatter.rs

use crate::models::DocumentHeader;

const SEPARATOR: &str = " = ";

pub struct MetadataParser;

impl MetadataParser {
    pub fn new() -> Self {
        Self
    }

    /// Reads `title`, `chapter` and `section` from the metadata block.
    ///
    /// Unknown keys and lines without a separator are skipped; a missing key
    /// leaves its field empty.
    pub fn parse(&self, metadata: &str) -> DocumentHeader {
        let mut header = DocumentHeader::default();

        for line in metadata.lines() {
            let Some((key, value)) = line.split_once(SEPARATOR) else {
                continue;
            };

            let field = match key {
                "title" => &mut header.title,
                "chapter" => &mut header.chapter,
                "section" => &mut header.section,
                _ => continue,
            };

            *field = unquote(value).to_string();
        }

        header
    }
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self::new()
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}
