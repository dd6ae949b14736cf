// Thu Jan 15 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutomatonError {
    #[error("Invalid automaton state: {0}")]
    InvalidState(&'static str),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
