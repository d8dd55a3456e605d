// file: src/exporter/json.rs
// description: sorts collected index records and writes them as a json array
// reference: https://docs.rs/serde_json/latest/serde_json/fn.to_string_pretty.html

use crate::error::{PipelineError, Result};
use crate::models::IndexRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub enum ExportTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct JsonExporter {
    target: ExportTarget,
}

impl JsonExporter {
    pub fn new(target: ExportTarget) -> Self {
        Self { target }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(ExportTarget::File(path.into()))
    }

    /// Stable sort by ascending ID. Colliding IDs (1/23 and 12/3) are ordered
    /// by document number, so arrival order never reaches the output.
    pub fn sort(records: &mut [IndexRecord]) {
        records.sort_by_key(|record| (record.id, record.document_number));
    }

    /// Two-space indented JSON array.
    pub fn render(records: &[IndexRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    pub fn export(&self, mut records: Vec<IndexRecord>) -> Result<usize> {
        Self::sort(&mut records);
        let json = Self::render(&records)?;

        match &self.target {
            ExportTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", json)?;
                handle.flush()?;
            }
            ExportTarget::File(path) => write_file(path, &json)?,
        }

        info!("Exported {} records", records.len());
        Ok(records.len())
    }
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PipelineError::FileOperation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, format!("{}\n", json)).map_err(|source| PipelineError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}
