// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub source: SourceConfig,
    pub pipeline: PipelineConfig,
    pub render: RenderConfig,
    pub record: RecordConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub content_dir: PathBuf,
    pub extension: String,
    pub first_document: u32,
    pub last_document: u32,
    pub delimiter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub channel_capacity: usize,
    pub show_progress: bool,
    pub fail_on_empty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    pub smart_punctuation: bool,
    pub tables: bool,
    pub strikethrough: bool,
    /// Tags kept by the post-render sanitizer pass; empty strips every tag.
    #[serde(default)]
    pub allowed_tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordConfig {
    pub base_url: String,
    pub rules_path: String,
    pub section_marker: String,
}

impl SourceConfig {
    pub fn document_range(&self) -> RangeInclusive<u32> {
        self.first_document..=self.last_document
    }

    pub fn document_path(&self, document: u32) -> PathBuf {
        self.content_dir
            .join(format!("{}.{}", document, self.extension))
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RULES_INDEX")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            source: SourceConfig {
                content_dir: PathBuf::from("../content/rules"),
                extension: "md".to_string(),
                first_document: 1,
                last_document: 66,
                delimiter: "+++".to_string(),
            },
            pipeline: PipelineConfig {
                channel_capacity: 1,
                show_progress: false,
                fail_on_empty: false,
            },
            render: RenderConfig {
                smart_punctuation: true,
                tables: true,
                strikethrough: true,
                allowed_tags: vec![],
            },
            record: RecordConfig {
                base_url: "https://pravilna.by".to_string(),
                rules_path: "rules".to_string(),
                section_marker: "§".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.delimiter.is_empty() {
            return Err(PipelineError::Config(
                "delimiter must not be empty".to_string(),
            ));
        }

        if self.source.first_document == 0 {
            return Err(PipelineError::Config(
                "first_document must be at least 1".to_string(),
            ));
        }

        if self.source.first_document > self.source.last_document {
            return Err(PipelineError::Config(format!(
                "document range {}..={} is empty",
                self.source.first_document, self.source.last_document
            )));
        }

        if self.pipeline.channel_capacity == 0 {
            return Err(PipelineError::Config(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
