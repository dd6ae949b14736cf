// Tue Jan 13 2026 - Alex

use crate::automaton::{NodeId, SearchOutcome};
use crate::pattern::{MatchResult, Severity};
use serde::Serialize;
use std::fmt;

/// Coarse verdict derived from how many signatures fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Safe,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn from_match_count(count: usize) -> Self {
        match count {
            0 => ThreatLevel::Safe,
            1 => ThreatLevel::Medium,
            2 => ThreatLevel::High,
            _ => ThreatLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Safe => "SAFE",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
}

impl SeveritySummary {
    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
        }
    }

    pub fn highest(&self) -> Option<Severity> {
        if self.critical > 0 {
            Some(Severity::Critical)
        } else if self.high > 0 {
            Some(Severity::High)
        } else if self.medium > 0 {
            Some(Severity::Medium)
        } else {
            None
        }
    }
}

/// Everything the front end shows for one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<'a> {
    pub payload: String,
    pub normalized: String,
    pub chars_processed: usize,
    pub threat_level: ThreatLevel,
    pub summary: SeveritySummary,
    pub matches: Vec<MatchResult<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<NodeId>>,
}

impl<'a> ScanReport<'a> {
    pub fn new(payload: &str, normalized: String, outcome: SearchOutcome<'a>, min_severity: Severity) -> Self {
        let chars_processed = outcome.chars_processed();
        let (matches, trace) = outcome.into_parts();

        let matches: Vec<MatchResult<'a>> = matches.into_iter().filter(|m| m.severity() >= min_severity).collect();

        let mut summary = SeveritySummary::default();
        for m in &matches {
            summary.record(m.severity());
        }

        Self {
            payload: payload.to_string(),
            normalized,
            chars_processed,
            threat_level: ThreatLevel::from_match_count(matches.len()),
            summary,
            matches,
            trace: Some(trace.as_slice().to_vec()),
        }
    }

    pub fn without_trace(mut self) -> Self {
        self.trace = None;
        self
    }

    pub fn is_malicious(&self) -> bool {
        !self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use crate::pattern::{normalize, PatternDatabase};

    fn catalog() -> Automaton {
        Automaton::compile(PatternDatabase::sql_injection().into_pattern_set().unwrap()).unwrap()
    }

    #[test]
    fn test_threat_levels() {
        assert_eq!(ThreatLevel::from_match_count(0), ThreatLevel::Safe);
        assert_eq!(ThreatLevel::from_match_count(1), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_match_count(2), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_match_count(7), ThreatLevel::Critical);
    }

    #[test]
    fn test_report_for_attack() {
        let ac = catalog();
        let payload = "GET /api/data?query='; DROP TABLE users; --";
        let normalized = normalize(payload);
        let report = ScanReport::new(payload, normalized.clone(), ac.search(&normalized).unwrap(), Severity::Medium);

        assert!(report.is_malicious());
        assert_eq!(report.summary, SeveritySummary { critical: 1, high: 1, medium: 0 });
        assert_eq!(report.summary.highest(), Some(Severity::Critical));
        assert_eq!(report.threat_level, ThreatLevel::High);
        assert_eq!(report.chars_processed, normalized.chars().count());
        assert_eq!(report.trace.as_ref().map(Vec::len), Some(normalized.chars().count() + 1));
    }

    #[test]
    fn test_min_severity_filters() {
        let ac = catalog();
        let normalized = normalize("/* comment */ --");
        let report = ScanReport::new("/* comment */ --", normalized.clone(), ac.search(&normalized).unwrap(), Severity::High);

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].pattern_id(), 6);
        assert_eq!(report.summary.medium, 0);
    }

    #[test]
    fn test_json_shape() {
        let ac = catalog();
        let report = ScanReport::new("OR 1=1", "OR 1=1".to_string(), ac.search("OR 1=1").unwrap(), Severity::Medium)
            .without_trace();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["threat_level"], "MEDIUM");
        assert_eq!(value["matches"][0]["pattern_id"], 0);
        assert_eq!(value["matches"][0]["start"], 0);
        assert_eq!(value["matches"][0]["pattern"]["severity"], "critical");
        assert!(value.get("trace").is_none());
    }
}
