// Fri Jan 16 2026 - Alex

use crate::automaton::{Automaton, AutomatonError};
use crate::config::Config;
use crate::output::ScanReport;
use crate::pattern::{Normalizer, Severity};
use crate::utils::logging::ScopedTimer;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
    #[error("Payload has {chars} characters, limit is {limit}")]
    PayloadTooLarge { chars: usize, limit: usize },
}

/// Normalizes raw payloads exactly once and runs them through a built automaton.
pub struct PayloadScanner<'a> {
    automaton: &'a Automaton,
    normalizer: Option<Normalizer>,
    min_severity: Severity,
    include_trace: bool,
    max_payload_chars: usize,
    use_parallel: bool,
}

impl<'a> PayloadScanner<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            normalizer: Some(Normalizer::new()),
            min_severity: Severity::Medium,
            include_trace: false,
            max_payload_chars: usize::MAX,
            use_parallel: true,
        }
    }

    pub fn from_config(automaton: &'a Automaton, config: &Config) -> Self {
        Self::new(automaton)
            .with_normalizer(config.normalize.then(|| config.normalizer()))
            .with_min_severity(config.min_severity)
            .with_trace(config.include_trace)
            .with_max_payload_chars(config.max_payload_chars)
    }

    pub fn with_normalizer(mut self, normalizer: Option<Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_trace(mut self, include: bool) -> Self {
        self.include_trace = include;
        self
    }

    pub fn with_max_payload_chars(mut self, limit: usize) -> Self {
        self.max_payload_chars = limit;
        self
    }

    pub fn use_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    pub fn scan(&self, payload: &str) -> Result<ScanReport<'a>, ScanError> {
        let normalized = match &self.normalizer {
            Some(normalizer) => normalizer.normalize(payload),
            None => payload.to_string(),
        };

        let chars = normalized.chars().count();
        if chars > self.max_payload_chars {
            return Err(ScanError::PayloadTooLarge {
                chars,
                limit: self.max_payload_chars,
            });
        }

        let outcome = self.automaton.search(&normalized)?;
        let report = ScanReport::new(payload, normalized, outcome, self.min_severity);

        if report.is_malicious() {
            log::info!("{} signature(s) in payload, threat level {}", report.matches.len(), report.threat_level);
        }

        Ok(if self.include_trace { report } else { report.without_trace() })
    }

    /// Scans every payload; results keep the input order.
    pub fn scan_all<S>(&self, payloads: &[S]) -> Vec<Result<ScanReport<'a>, ScanError>>
    where
        S: AsRef<str> + Sync,
    {
        self.scan_all_with(payloads, || {})
    }

    /// Like [`scan_all`](Self::scan_all), calling `on_done` after each payload.
    pub fn scan_all_with<S, F>(&self, payloads: &[S], on_done: F) -> Vec<Result<ScanReport<'a>, ScanError>>
    where
        S: AsRef<str> + Sync,
        F: Fn() + Sync,
    {
        let _timer = ScopedTimer::new("batch scan");
        let scan_one = |payload: &S| {
            let result = self.scan(payload.as_ref());
            on_done();
            result
        };

        if self.use_parallel {
            payloads.par_iter().map(scan_one).collect()
        } else {
            payloads.iter().map(scan_one).collect()
        }
    }
}
