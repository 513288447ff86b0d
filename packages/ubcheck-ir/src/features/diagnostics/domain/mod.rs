//! Diagnostics Domain

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticMode {
    /// Human-facing output on the error stream
    Reporting,
    /// Compare messages against expected output, print nothing
    Verifying,
}

/// A message that did not match its expected text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// Innermost frame of the preceding location; 0 if none was emitted
    pub line: u32,
    pub column: u32,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: expected message starting with {:?}, got {:?}",
            self.line, self.column, self.expected, self.actual
        )
    }
}
