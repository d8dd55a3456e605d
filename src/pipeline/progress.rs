// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks per-document outcomes

use crate::pipeline::processor::DocumentStatus;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub documents_indexed: usize,
    pub documents_missing: usize,
    pub documents_malformed: usize,
    pub documents_failed: usize,
    pub records_emitted: usize,
    pub defaulted_values: usize,
    pub duration_ms: u128,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: &DocumentStatus) {
        match status {
            DocumentStatus::Indexed { records, defaulted } => {
                self.documents_indexed += 1;
                self.records_emitted += records;
                self.defaulted_values += defaulted;
            }
            DocumentStatus::Missing => self.documents_missing += 1,
            DocumentStatus::Malformed => self.documents_malformed += 1,
            DocumentStatus::Failed => self.documents_failed += 1,
        }
    }

    pub fn documents_seen(&self) -> usize {
        self.documents_indexed
            + self.documents_missing
            + self.documents_malformed
            + self.documents_failed
    }

    /// Share of documents with a source file that produced records.
    pub fn success_rate(&self) -> f64 {
        let present = self.documents_seen() - self.documents_missing;
        if present == 0 {
            return 0.0;
        }
        (self.documents_indexed as f64 / present as f64) * 100.0
    }
}

/// Progress bar plus statistics, owned by the single task that awaits
/// the workers.
pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_documents: usize, visible: bool, colored: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_documents as u64, colored)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            stats: PipelineStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn record(&mut self, document: u32, status: &DocumentStatus) {
        self.stats.record(status);
        self.bar.inc(1);
        self.bar.set_message(format!(
            "#{} | records: {} | malformed: {}",
            document, self.stats.records_emitted, self.stats.documents_malformed
        ));
    }

    pub fn finish(mut self) -> PipelineStats {
        self.stats.duration_ms = self.start_time.elapsed().as_millis();
        self.bar.finish_and_clear();
        self.stats
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    let style = ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(if colored { "█▓▒░" } else { "=>-" });

    let bar = ProgressBar::new(total);
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_stats_record() {
        let mut stats = PipelineStats::new();
        stats.record(&DocumentStatus::Indexed {
            records: 4,
            defaulted: 1,
        });
        stats.record(&DocumentStatus::Indexed {
            records: 2,
            defaulted: 0,
        });
        stats.record(&DocumentStatus::Missing);
        stats.record(&DocumentStatus::Malformed);

        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(stats.records_emitted, 6);
        assert_eq!(stats.defaulted_values, 1);
        assert_eq!(stats.documents_seen(), 4);
        assert!((stats.success_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_with_nothing_present() {
        let mut stats = PipelineStats::new();
        stats.record(&DocumentStatus::Missing);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_hidden() {
        let mut tracker = ProgressTracker::with_color(3, false, true);
        tracker.record(1, &DocumentStatus::Failed);
        tracker.record(2, &DocumentStatus::Missing);

        let stats = tracker.finish();
        assert_eq!(stats.documents_failed, 1);
        assert_eq!(stats.documents_missing, 1);
    }

    #[test]
    fn test_progress_tracker_visible_without_color() {
        let mut tracker = ProgressTracker::with_color(2, true, false);
        tracker.record(1, &DocumentStatus::Indexed {
            records: 3,
            defaulted: 0,
        });

        let stats = tracker.finish();
        assert_eq!(stats.documents_indexed, 1);
        assert_eq!(stats.records_emitted, 3);
    }
}
