//! Outcome of session and preparation validation.

use serde::{Deserialize, Serialize};

/// Accumulated validation errors.
///
/// Validation never stops at the first problem so every issue can be shown
/// at once; `valid` is true exactly when `errors` is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether no error was found
    pub valid: bool,

    /// Human-readable error messages, in check order
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Builds a report from the collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true when any error message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }
}
