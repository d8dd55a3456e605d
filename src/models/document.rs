// file: src/models/document.rs
// description: per-document models produced between splitting and record building
// reference: internal data structures

use crate::models::Parsed;

/// Header fields read from a document's metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHeader {
    pub title: String,
    pub chapter: String,
    pub section: String,
}

/// One numbered clause as found in the normalized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub point: Parsed<u32>,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedClause {
    pub point: Parsed<u32>,
    pub text: String,
    pub combinations: Vec<String>,
    pub examples: Vec<String>,
}

impl Clause {
    pub fn new(point: Parsed<u32>, raw_text: impl Into<String>) -> Self {
        Self {
            point,
            raw_text: raw_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults_to_empty() {
        let header = DocumentHeader::default();
        assert!(header.title.is_empty());
        assert!(header.chapter.is_empty());
        assert!(header.section.is_empty());
    }

    #[test]
    fn test_clause_creation() {
        let clause = Clause::new(Parsed::Value(3), "Keep right.");
        assert_eq!(clause.point.value(), 3);
        assert_eq!(clause.raw_text, "Keep right.");
    }
}
