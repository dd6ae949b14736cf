// Wed Jan 14 2026 - Alex

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFold {
    #[default]
    Upper,
    Lower,
}

/// Canonicalizes payloads before matching: single case, whitespace runs
/// collapsed to one space, ends trimmed.
///
/// Signatures must be registered in the same canonical form or they will
/// simply never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    fold: CaseFold,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_fold(mut self, fold: CaseFold) -> Self {
        self.fold = fold;
        self
    }

    pub fn case_fold(&self) -> CaseFold {
        self.fold
    }

    pub fn normalize(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().join(" ");
        match self.fold {
            CaseFold::Upper => collapsed.to_uppercase(),
            CaseFold::Lower => collapsed.to_lowercase(),
        }
    }

    pub fn is_normalized(&self, text: &str) -> bool {
        self.normalize(text) == text
    }
}

/// Upper-case normalization, the form the built-in catalogs use.
pub fn normalize(text: &str) -> String {
    Normalizer::new().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        assert_eq!(normalize("  get /login.php?id=1\t\tor   1=1 --\n"), "GET /LOGIN.PHP?ID=1 OR 1=1 --");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn test_lower_fold() {
        let normalizer = Normalizer::new().with_case_fold(CaseFold::Lower);
        assert_eq!(normalizer.normalize("UNION   Select"), "union select");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Drop\u{00A0}\u{2003}table users");
        assert_eq!(once, "DROP TABLE USERS");
        assert_eq!(normalize(&once), once);
        assert!(Normalizer::new().is_normalized(&once));
    }
}
