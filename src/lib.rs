// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use config::{Config, PipelineConfig, RecordConfig, RenderConfig, SourceConfig};
pub use error::{PipelineError, Result};
pub use exporter::{ExportTarget, JsonExporter};
pub use extractor::{ClauseEntities, EntityExtractor};
pub use models::{Clause, DocumentHeader, IndexRecord, Parsed, RenderedClause};
pub use parser::{
    ClauseSegmenter, DocumentSplitter, MarkupRenderer, MetadataParser, Sanitizer, SplitDocument,
};
pub use pipeline::{
    CollectedRecords, DocumentProcessor, DocumentStatus, PipelineOrchestrator, PipelineStats,
    RecordBuilder,
};
pub use utils::{SourceSurvey, Validator};
