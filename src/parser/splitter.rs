// file: src/parser/splitter.rs
// description: separates a raw rule document into its metadata and body blocks
// reference: src/parser/frontmatter.rs fence handling

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument {
    pub metadata: String,
    pub body: String,
}

pub struct DocumentSplitter {
    delimiter: String,
}

impl DocumentSplitter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Splits `content` at the first delimiter after the opening fence.
    ///
    /// Any leading run of delimiter characters is dropped first, so the
    /// opening fence never produces an empty metadata block.
    pub fn split(&self, document: u32, content: &str) -> Result<SplitDocument> {
        let delimiter = self.delimiter.as_str();
        let stripped = content.trim_start_matches(|c: char| delimiter.contains(c));

        let (metadata, body) = stripped.split_once(delimiter).ok_or_else(|| {
            PipelineError::malformed(document, format!("missing '{}' delimiter", delimiter))
        })?;

        let body = body.trim();
        if body.is_empty() {
            return Err(PipelineError::malformed(document, "empty body"));
        }

        Ok(SplitDocument {
            metadata: metadata.trim().to_string(),
            body: body.to_string(),
        })
    }
}

impl Default for DocumentSplitter {
    fn default() -> Self {
        Self::new("+++")
    }
}
