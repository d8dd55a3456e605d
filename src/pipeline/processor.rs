// file: src/pipeline/processor.rs
// description: converts one numbered rule document into index records
// reference: splits, parses the header, segments clauses, renders and builds records

use crate::config::{Config, SourceConfig};
use crate::error::{PipelineError, Result};
use crate::models::IndexRecord;
use crate::parser::{ClauseSegmenter, DocumentSplitter, MarkupRenderer, MetadataParser};
use crate::pipeline::record::RecordBuilder;
use std::io::ErrorKind;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProcessedDocument {
    pub document: u32,
    pub records: Vec<IndexRecord>,
    /// Point numbers and record IDs that fell back to 0.
    pub defaulted: usize,
}

/// What a worker did with its document number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    Indexed { records: usize, defaulted: usize },
    Missing,
    Malformed,
    Failed,
}

pub struct DocumentProcessor {
    source: SourceConfig,
    splitter: DocumentSplitter,
    metadata: MetadataParser,
    segmenter: ClauseSegmenter,
    renderer: MarkupRenderer,
    builder: RecordBuilder,
}

impl DocumentProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            splitter: DocumentSplitter::new(config.source.delimiter.clone()),
            metadata: MetadataParser::new(),
            segmenter: ClauseSegmenter::new(),
            renderer: MarkupRenderer::from_config(&config.render),
            builder: RecordBuilder::new(&config.record),
        }
    }

    pub fn in_range(&self, document: u32) -> bool {
        self.source.document_range().contains(&document)
    }

    /// Reads the source for `document`; a missing file is `Ok(None)`.
    pub async fn read_source(&self, document: u32) -> Result<Option<String>> {
        let path = self.source.document_path(document);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PipelineError::FileOperation { path, source }),
        }
    }

    /// Reads and processes one document. Numbers outside the configured
    /// range and documents without a source file yield `Ok(None)`.
    pub async fn process(&self, document: u32) -> Result<Option<ProcessedDocument>> {
        if !self.in_range(document) {
            debug!("Document {} is outside the configured range", document);
            return Ok(None);
        }

        let Some(content) = self.read_source(document).await? else {
            debug!("No source for document {}", document);
            return Ok(None);
        };

        self.process_source(document, &content).map(Some)
    }

    pub fn process_source(&self, document: u32, content: &str) -> Result<ProcessedDocument> {
        let split = self.splitter.split(document, content)?;
        let header = self.metadata.parse(&split.metadata);

        let mut processed = ProcessedDocument {
            document,
            ..Default::default()
        };

        for clause in self.segmenter.segment(&split.body) {
            if clause.point.is_defaulted() {
                processed.defaulted += 1;
            }

            let rendered = self.renderer.render(&clause);
            let built = self.builder.build(document, &header, rendered);
            if built.id.is_defaulted() {
                processed.defaulted += 1;
            }

            processed.records.push(built.record);
        }

        debug!(
            "Document {} produced {} records",
            document,
            processed.records.len()
        );

        Ok(processed)
    }
}
