// file: src/utils/validation.rs
// description: content directory and record settings checks
// reference: input validation patterns

use crate::config::{Config, SourceConfig};
use crate::error::{PipelineError, Result};
use std::path::Path;

/// Which document numbers in the configured range have a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSurvey {
    pub present: Vec<u32>,
    pub missing: Vec<u32>,
}

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Full pre-flight check used by the `verify` command.
    pub fn validate_config(config: &Config) -> Result<()> {
        config.validate()?;
        Self::validate_directory(&config.source.content_dir)?;
        Self::validate_url(&config.record.base_url)
    }

    pub fn survey_sources(source: &SourceConfig) -> SourceSurvey {
        let mut survey = SourceSurvey::default();

        for document in source.document_range() {
            if source.document_path(document).is_file() {
                survey.present.push(document);
            } else {
                survey.missing.push(document);
            }
        }

        survey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());

        let file = temp.path().join("1.md");
        fs::write(&file, "x").unwrap();
        assert!(Validator::validate_directory(&file).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://pravilna.by").is_ok());
        assert!(Validator::validate_url("http://localhost:8080").is_ok());
        assert!(Validator::validate_url("pravilna.by").is_err());
    }

    #[test]
    fn test_validate_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default_config();
        config.source.content_dir = temp.path().to_path_buf();
        assert!(Validator::validate_config(&config).is_ok());

        config.record.base_url = "ftp://example.com".to_string();
        assert!(Validator::validate_config(&config).is_err());
    }

    #[test]
    fn test_survey_sources() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2.md"), "+++\n+++\n1. x").unwrap();
        fs::create_dir(temp.path().join("3.md")).unwrap();

        let mut source = Config::default_config().source;
        source.content_dir = temp.path().to_path_buf();
        source.last_document = 4;

        let survey = Validator::survey_sources(&source);
        assert_eq!(survey.present, vec![2]);
        assert_eq!(survey.missing, vec![1, 3, 4]);
    }
}
