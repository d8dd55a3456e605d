// file: src/pipeline/record.rs
// description: assembles index records from a document header and rendered clause
// reference: src/models/document.rs constructor pattern

use crate::config::RecordConfig;
use crate::models::{DocumentHeader, IndexRecord, Parsed, RenderedClause};

pub struct RecordBuilder {
    base_url: String,
    rules_path: String,
    section_marker: String,
}

/// A built record plus the outcome of its numeric ID parse.
#[derive(Debug, Clone)]
pub struct BuiltRecord {
    pub record: IndexRecord,
    pub id: Parsed<u64>,
}

impl RecordBuilder {
    pub fn new(config: &RecordConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rules_path: config.rules_path.trim_matches('/').to_string(),
            section_marker: config.section_marker.clone(),
        }
    }

    /// Decimal concatenation of document and point, e.g. 12 and 3 give 123.
    ///
    /// Not injective: 12/3 and 1/23 share an ID.
    pub fn record_id(document: u32, point: u32) -> Parsed<u64> {
        Parsed::parse_or(&format!("{}{}", document, point), 0, "record id")
    }

    pub fn title(&self, document: u32, header: &DocumentHeader, point: u32) -> String {
        format!(
            "{}{}. {}, #{}",
            self.section_marker, document, header.title, point
        )
    }

    pub fn link(&self, document: u32, point: u32) -> String {
        format!(
            "{}/{}/{}/#p{}",
            self.base_url, self.rules_path, document, point
        )
    }

    pub fn build(
        &self,
        document: u32,
        header: &DocumentHeader,
        clause: RenderedClause,
    ) -> BuiltRecord {
        let point = clause.point.value();
        let id = Self::record_id(document, point);

        let record = IndexRecord {
            id: id.value(),
            section: header.section.clone(),
            chapter: header.chapter.clone(),
            title: self.title(document, header, point),
            document_number: document,
            point,
            combinations: clause.combinations,
            examples: clause.examples,
            text: clause.text,
            link: self.link(document, point),
        };

        BuiltRecord { record, id }
    }
}
