// file: src/pipeline/orchestrator.rs
// description: fans one worker out per document number and collects their records
// reference: orchestrates the concurrent indexing workflow

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::models::IndexRecord;
use crate::pipeline::processor::{DocumentProcessor, DocumentStatus};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Records in arrival order plus the statistics of the run.
#[derive(Debug)]
pub struct CollectedRecords {
    pub records: Vec<IndexRecord>,
    pub stats: PipelineStats,
}

pub struct PipelineOrchestrator {
    config: Config,
    processor: Arc<DocumentProcessor>,
    colored: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let processor = Arc::new(DocumentProcessor::new(&config));

        Ok(Self {
            config,
            processor,
            colored: true,
        })
    }

    /// Plain progress bar when `colored` is false.
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn processor(&self) -> &DocumentProcessor {
        &self.processor
    }

    /// Spawns one worker per document, drains the shared channel until the
    /// coordinator closes it, and returns everything received.
    pub async fn run(&self) -> Result<CollectedRecords> {
        let range = self.config.source.document_range();
        let total = range.clone().count();
        info!(
            "Indexing documents {}..={} from {}",
            range.start(),
            range.end(),
            self.config.source.content_dir.display()
        );

        let (tx, mut rx) = mpsc::channel::<IndexRecord>(self.config.pipeline.channel_capacity);

        let mut workers = JoinSet::new();
        for document in range {
            let processor = Arc::clone(&self.processor);
            let tx = tx.clone();
            workers.spawn(async move {
                let status = run_worker(&processor, document, tx).await;
                (document, status)
            });
        }

        let progress =
            ProgressTracker::with_color(total, self.config.pipeline.show_progress, self.colored);
        let coordinator = tokio::spawn(coordinate(workers, tx, progress));

        let mut records = Vec::new();
        while let Some(record) = rx.recv().await {
            records.push(record);
        }

        let stats = coordinator
            .await
            .map_err(|e| PipelineError::Task(format!("coordinator failed: {}", e)))?;

        self.log_final_stats(&stats);

        Ok(CollectedRecords { records, stats })
    }

    fn log_final_stats(&self, stats: &PipelineStats) {
        info!("=== Indexing Summary ===");
        info!("Duration: {} ms", stats.duration_ms);
        info!("Documents seen: {}", stats.documents_seen());
        info!(
            "Documents indexed: {} ({:.1}% of present)",
            stats.documents_indexed,
            stats.success_rate()
        );
        info!("Documents missing: {}", stats.documents_missing);
        info!("Documents malformed: {}", stats.documents_malformed);
        info!("Documents failed: {}", stats.documents_failed);
        info!("Records emitted: {}", stats.records_emitted);
        if stats.defaulted_values > 0 {
            warn!(
                "{} point numbers or record IDs defaulted to 0",
                stats.defaulted_values
            );
        }
        info!("========================");
    }
}

/// Waits for every worker, then drops the last sender so the collector's
/// `recv` returns `None`.
async fn coordinate(
    mut workers: JoinSet<(u32, DocumentStatus)>,
    tx: mpsc::Sender<IndexRecord>,
    mut progress: ProgressTracker,
) -> PipelineStats {
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((document, status)) => progress.record(document, &status),
            Err(e) => {
                error!("Worker task panicked: {}", e);
                progress.record(0, &DocumentStatus::Failed);
            }
        }
    }

    drop(tx);
    progress.finish()
}

async fn run_worker(
    processor: &DocumentProcessor,
    document: u32,
    tx: mpsc::Sender<IndexRecord>,
) -> DocumentStatus {
    let processed = match processor.process(document).await {
        Ok(Some(processed)) => processed,
        Ok(None) => return DocumentStatus::Missing,
        Err(e @ PipelineError::MalformedDocument { .. }) => {
            warn!("Skipping document: {}", e);
            return DocumentStatus::Malformed;
        }
        Err(e) => {
            warn!("Failed to process document {}: {}", document, e);
            return DocumentStatus::Failed;
        }
    };

    let records = processed.records.len();
    for record in processed.records {
        if tx.send(record).await.is_err() {
            debug!("Collector closed before document {} finished", document);
            return DocumentStatus::Failed;
        }
    }
    debug!("Document {} sent {} records", processed.document, records);

    DocumentStatus::Indexed {
        records,
        defaulted: processed.defaulted,
    }
}
