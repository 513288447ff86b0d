//! Self-test verifier
//!
//! Prints nothing. Each location fixes the expected text for the message
//! that follows; a message matches when it starts with that text.

use super::expectations::ExpectationSource;
use crate::features::diagnostics::domain::VerificationFailure;
use crate::shared::models::SourceLocationChain;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCheck {
    line: u32,
    column: u32,
    expected: String,
}

#[derive(Debug)]
pub struct Verifier {
    prefix: String,
    expectations: Option<Box<dyn ExpectationSource>>,
    pending: Option<PendingCheck>,
    checked: usize,
    failures: Vec<VerificationFailure>,
}

impl Verifier {
    /// Verifier whose expected text is `prefix` at every location
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            expectations: None,
            pending: None,
            checked: 0,
            failures: Vec::new(),
        }
    }

    /// Look up per-location expected text; `prefix` becomes the annotation
    /// marker and the fallback when a location has no annotation.
    pub fn with_expectations(mut self, source: Box<dyn ExpectationSource>) -> Self {
        self.expectations = Some(source);
        self
    }

    /// Record the innermost frame's line and column
    pub fn emit_location(&mut self, chain: &SourceLocationChain) {
        let frame = chain.innermost();
        let expected = self
            .expectations
            .as_mut()
            .and_then(|source| source.expected_at(frame, &self.prefix))
            .unwrap_or_else(|| self.prefix.clone());
        self.pending = Some(PendingCheck {
            line: frame.line,
            column: frame.column,
            expected,
        });
    }

    /// Compare `message` against the expected text of the last location
    pub fn emit_message(&mut self, message: &str) {
        self.checked += 1;
        let Some(pending) = self.pending.take() else {
            tracing::warn!("verify: message {:?} emitted without a location", message);
            self.failures.push(VerificationFailure {
                line: 0,
                column: 0,
                expected: self.prefix.clone(),
                actual: message.to_string(),
            });
            return;
        };

        if message.starts_with(&pending.expected) {
            tracing::trace!("verify: {}:{} ok", pending.line, pending.column);
            return;
        }

        let failure = VerificationFailure {
            line: pending.line,
            column: pending.column,
            expected: pending.expected,
            actual: message.to_string(),
        };
        tracing::warn!("verify: {}", failure);
        self.failures.push(failure);
    }

    /// Line and column awaiting a message
    pub fn pending_location(&self) -> Option<(u32, u32)> {
        self.pending.as_ref().map(|p| (p.line, p.column))
    }

    /// Messages compared so far
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn failures(&self) -> &[VerificationFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<VerificationFailure> {
        self.failures
    }
}
