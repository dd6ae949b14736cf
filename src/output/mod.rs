// Tue Jan 13 2026 - Alex

pub mod report;
pub mod formatter;

pub use report::{ScanReport, SeveritySummary, ThreatLevel};
pub use formatter::ReportFormatter;
