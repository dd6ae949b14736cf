// Tue Jan 13 2026 - Alex

use crate::pattern::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk classification carried by a signature. Only presentation layers read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            other => Err(format!("unknown severity '{}', expected critical, high or medium", other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single signature: the text to look for plus the metadata reported with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    id: u32,
    #[serde(alias = "pattern")]
    text: String,
    name: String,
    #[serde(default)]
    description: String,
    severity: Severity,
}

impl Pattern {
    pub fn new(id: u32, text: &str, name: &str, severity: Severity) -> Result<Self, PatternError> {
        let pattern = Self {
            id,
            text: text.to_string(),
            name: name.to_string(),
            description: String::new(),
            severity,
        };
        pattern.validate()?;
        Ok(pattern)
    }

    /// For compiled-in catalogs whose texts are known to be non-empty.
    pub(crate) fn from_parts(id: u32, text: &str, name: &str, description: &str, severity: Severity) -> Self {
        Self {
            id,
            text: text.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    /// Empty text would vacuously match at every position.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.text.is_empty() {
            return Err(PatternError::InvalidPattern(format!(
                "Pattern {} ('{}') has empty text",
                self.id, self.name
            )));
        }
        Ok(())
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Length in characters, the unit match positions are expressed in.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.id, self.name, self.severity)
    }
}
