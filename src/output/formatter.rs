// Tue Jan 13 2026 - Alex

use crate::output::{ScanReport, ThreatLevel};
use crate::pattern::{Pattern, Severity};
use colored::*;
use itertools::Itertools;
use std::fmt::Write;

pub struct ReportFormatter {
    show_trace: bool,
    show_descriptions: bool,
    max_payload_width: usize,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self {
            show_trace: false,
            show_descriptions: true,
            max_payload_width: 80,
        }
    }

    pub fn with_trace(mut self, show: bool) -> Self {
        self.show_trace = show;
        self
    }

    pub fn with_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    pub fn with_max_payload_width(mut self, width: usize) -> Self {
        self.max_payload_width = width.max(4);
        self
    }

    pub fn format_report(&self, report: &ScanReport<'_>) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{} {}", "Payload:".bold(), self.truncate(&report.payload));
        if report.normalized != report.payload {
            let _ = writeln!(out, "{} {}", "Normalized:".bold(), self.truncate(&report.normalized));
        }
        let _ = writeln!(
            out,
            "{} {}  ({} chars, {} signatures)",
            "Threat level:".bold(),
            Self::color_threat(report.threat_level),
            report.chars_processed,
            report.matches.len()
        );

        if report.is_malicious() {
            for m in &report.matches {
                let pattern = m.pattern();
                let _ = write!(
                    out,
                    "  {} {} pos: {}",
                    Self::color_severity(pattern.severity()),
                    pattern.name().cyan(),
                    m.start()
                );
                if self.show_descriptions && !pattern.description().is_empty() {
                    let _ = write!(out, "  {}", pattern.description().dimmed());
                }
                out.push('\n');
            }
        } else {
            let _ = writeln!(out, "  {}", "No signatures detected.".green());
        }

        if self.show_trace {
            if let Some(trace) = &report.trace {
                let _ = writeln!(out, "{} {}", "Trace:".bold(), trace.iter().join(" ").dimmed());
            }
        }

        out
    }

    pub fn format_pattern_list(&self, name: &str, patterns: &[Pattern]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({} signatures)", name.cyan().bold(), patterns.len());

        let width = patterns.iter().map(|p| p.text().chars().count()).max().unwrap_or(0);
        for pattern in patterns {
            let _ = write!(
                out,
                "  {:>3}  {:<width$}  {}  {}",
                pattern.id(),
                pattern.text(),
                Self::color_severity(pattern.severity()),
                pattern.name(),
                width = width
            );
            if self.show_descriptions && !pattern.description().is_empty() {
                let _ = write!(out, "  {}", pattern.description().dimmed());
            }
            out.push('\n');
        }
        out
    }

    fn truncate(&self, s: &str) -> String {
        if s.chars().count() <= self.max_payload_width {
            s.to_string()
        } else {
            let kept: String = s.chars().take(self.max_payload_width - 3).collect();
            format!("{}...", kept)
        }
    }

    fn color_severity(severity: Severity) -> ColoredString {
        let label = format!("{:<8}", severity.as_str().to_uppercase());
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.blue(),
        }
    }

    fn color_threat(level: ThreatLevel) -> ColoredString {
        match level {
            ThreatLevel::Safe => level.as_str().green().bold(),
            ThreatLevel::Medium => level.as_str().yellow(),
            ThreatLevel::High => level.as_str().truecolor(255, 165, 0).bold(),
            ThreatLevel::Critical => level.as_str().red().bold(),
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use crate::pattern::PatternDatabase;

    #[test]
    fn test_format_attack_report() {
        colored::control::set_override(false);
        let ac = Automaton::compile(PatternDatabase::sql_injection().into_pattern_set().unwrap()).unwrap();
        let report = ScanReport::new("admin' --", "ADMIN' --".to_string(), ac.search("ADMIN' --").unwrap(), Severity::Medium);

        let text = ReportFormatter::new().with_trace(true).format_report(&report);
        assert!(text.contains("Normalized: ADMIN' --"));
        assert!(text.contains("HIGH"));
        assert!(text.contains("Login Bypass pos: 0"));
        assert!(text.contains("SQL Comment (--) pos: 7"));
        assert!(text.contains("Trace: q0"));
    }

    #[test]
    fn test_format_clean_report() {
        colored::control::set_override(false);
        let ac = Automaton::compile(PatternDatabase::sql_injection().into_pattern_set().unwrap()).unwrap();
        let report = ScanReport::new("HELLO", "HELLO".to_string(), ac.search("HELLO").unwrap(), Severity::Medium)
            .without_trace();

        let text = ReportFormatter::new().with_trace(true).format_report(&report);
        assert!(text.contains("SAFE"));
        assert!(text.contains("No signatures detected."));
        assert!(!text.contains("Normalized:"));
        assert!(!text.contains("Trace:"));
    }

    #[test]
    fn test_truncate_long_payload() {
        let formatter = ReportFormatter::new().with_max_payload_width(10);
        assert_eq!(formatter.truncate("0123456789ABC"), "0123456...");
        assert_eq!(formatter.truncate("short"), "short");
    }

    #[test]
    fn test_pattern_list() {
        colored::control::set_override(false);
        let db = PatternDatabase::sql_injection();
        let text = ReportFormatter::new().with_descriptions(false).format_pattern_list(db.name(), db.patterns());
        assert!(text.starts_with("sql-injection (16 signatures)"));
        assert_eq!(text.lines().count(), 17);
    }
}
