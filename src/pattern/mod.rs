// Tue Jan 13 2026 - Alex

pub mod error;
pub mod pattern;
pub mod pattern_set;
pub mod match_result;
pub mod database;
pub mod normalizer;

pub use error::PatternError;
pub use pattern::{Pattern, Severity};
pub use pattern_set::PatternSet;
pub use match_result::MatchResult;
pub use database::PatternDatabase;
pub use normalizer::{normalize, CaseFold, Normalizer};
