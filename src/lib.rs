// Tue Jan 13 2026 - Alex

pub mod automaton;
pub mod cli;
pub mod config;
pub mod output;
pub mod pattern;
pub mod scanner;
pub mod utils;

pub use automaton::{Automaton, AutomatonError, SearchOutcome, Trace};
pub use config::Config;
pub use output::ScanReport;
pub use pattern::{normalize, MatchResult, Normalizer, Pattern, PatternDatabase, PatternSet, Severity};
pub use scanner::PayloadScanner;
