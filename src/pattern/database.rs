// Tue Jan 13 2026 - Alex

use crate::pattern::{Pattern, PatternError, PatternSet, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named signature catalog, either built in or loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDatabase {
    name: String,
    patterns: Vec<Pattern>,
}

impl PatternDatabase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn into_pattern_set(self) -> Result<PatternSet, PatternError> {
        PatternSet::new(self.patterns)
    }

    /// Accepts either `{"name": ..., "patterns": [...]}` or a bare array of patterns.
    pub fn from_json_str(json: &str) -> Result<Self, PatternError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CatalogFile {
            Named(PatternDatabase),
            Bare(Vec<Pattern>),
        }

        let db = match serde_json::from_str(json)? {
            CatalogFile::Named(db) => db,
            CatalogFile::Bare(patterns) => Self {
                name: "custom".to_string(),
                patterns,
            },
        };

        for pattern in &db.patterns {
            pattern.validate()?;
        }
        Ok(db)
    }

    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path)?;
        let db = Self::from_json_str(&content)?;
        log::debug!("Loaded {} signatures from {}", db.pattern_count(), path.display());
        Ok(db)
    }

    pub fn save(&self, path: &Path) -> Result<(), PatternError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// SQL injection signatures, upper-case so they line up with the default normalizer.
    pub fn sql_injection() -> Self {
        const SIGNATURES: [(&str, &str, &str, Severity); 16] = [
            ("OR 1=1", "OR 1=1", "Always-True Condition SQL Injection", Severity::Critical),
            ("OR '1'='1'", "OR '1'='1'", "Always-True Using Strings", Severity::Critical),
            ("OR TRUE", "OR TRUE", "Boolean Bypass", Severity::Critical),
            ("DROP TABLE", "DROP TABLE", "Table Deletion Attack", Severity::Critical),
            ("UNION SELECT", "UNION SELECT", "Data Extraction Attack", Severity::High),
            ("UNION ALL SELECT", "UNION ALL SELECT", "Bulk Data Dump", Severity::High),
            ("--", "SQL Comment (--)", "Comment Injection - Ignore Rest of Query", Severity::High),
            ("#", "MySQL Comment (#)", "MySQL Hash Comment", Severity::High),
            ("/*", "Block Comment Start", "Start Block Comment", Severity::Medium),
            ("*/", "Block Comment End", "End Block Comment", Severity::Medium),
            ("ADMIN' --", "Login Bypass", "Login Bypass Payload", Severity::Critical),
            ("' OR '1'='1' --", "Classic Auth Bypass", "Classic Authentication Bypass", Severity::Critical),
            ("; DROP DATABASE", "DROP DATABASE", "Destroy Entire Database", Severity::Critical),
            ("; EXEC", "EXEC Command", "Command Execution via EXEC", Severity::Critical),
            ("LOAD_FILE", "LOAD_FILE", "Read Server Files", Severity::High),
            ("INFORMATION_SCHEMA", "INFORMATION_SCHEMA", "Enumerate All Tables", Severity::High),
        ];

        let patterns = SIGNATURES
            .iter()
            .zip(0u32..)
            .map(|(&(text, name, description, severity), id)| {
                Pattern::from_parts(id, text, name, description, severity)
            })
            .collect();

        Self {
            name: "sql-injection".to_string(),
            patterns,
        }
    }
}
