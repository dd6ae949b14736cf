// Tue Jan 13 2026 - Alex

use crate::pattern::{CaseFold, Normalizer, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON signature catalog; the built-in SQL injection set when unset.
    pub catalog: Option<PathBuf>,
    pub normalize: bool,
    pub case_fold: CaseFold,
    pub include_trace: bool,
    pub json_output: bool,
    /// Matches below this severity are dropped from reports.
    pub min_severity: Severity,
    pub max_threads: usize,
    pub max_payload_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            normalize: true,
            case_fold: CaseFold::Upper,
            include_trace: false,
            json_output: false,
            min_severity: Severity::Medium,
            max_threads: num_cpus::get(),
            max_payload_chars: 1 << 20,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_catalog(mut self, catalog: PathBuf) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_trace(mut self, include: bool) -> Self {
        self.include_trace = include;
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new().with_case_fold(self.case_fold)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_threads == 0 {
            return Err(ConfigError::Invalid("max_threads must be greater than 0".to_string()));
        }
        if self.max_payload_chars == 0 {
            return Err(ConfigError::Invalid("max_payload_chars must be greater than 0".to_string()));
        }
        if let Some(catalog) = &self.catalog {
            if catalog.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("catalog path is empty".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.normalize);
        assert_eq!(config.min_severity, Severity::Medium);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scanner.json");
        fs::write(&path, r#"{"include_trace": true, "case_fold": "lower", "min_severity": "high"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.include_trace);
        assert!(config.normalize);
        assert_eq!(config.case_fold, CaseFold::Lower);
        assert_eq!(config.min_severity, Severity::High);
        assert_eq!(config.normalizer().normalize(" A  B "), "a b");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = Config { max_threads: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"normalize\": \"yes\"}").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/scanner.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
