// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod processor;
mod progress;
mod record;

pub use orchestrator::{CollectedRecords, PipelineOrchestrator};
pub use processor::{DocumentProcessor, DocumentStatus, ProcessedDocument};
pub use progress::{PipelineStats, ProgressTracker};
pub use record::{BuiltRecord, RecordBuilder};
