//! Diagnostic Session
//!
//! One per compilation context. The mode is chosen from explicit
//! configuration at construction and never changes.

use crate::config::DiagnosticConfig;
use crate::errors::{Result, UbCheckError};
use crate::features::diagnostics::domain::{DiagnosticMode, VerificationFailure};
use crate::features::diagnostics::infrastructure::{ExpectationSource, Reporter, Verifier};
use crate::shared::models::{DebugLoc, SourceFrame, SourceLocationChain};
use crate::shared::ports::LocationResolver;
use termcolor::{StandardStream, WriteColor};

/// Placeholder file name for locations the resolver cannot place
const UNKNOWN_FILE: &str = "<unknown>";

pub enum DiagnosticSession<W: WriteColor = StandardStream> {
    Reporting(Reporter<W>),
    Verifying(Verifier),
}

impl DiagnosticSession<StandardStream> {
    /// Session writing to stderr in reporting mode
    pub fn from_config(config: &DiagnosticConfig) -> Self {
        match &config.verify_prefix {
            Some(prefix) => DiagnosticSession::Verifying(Verifier::new(prefix.clone())),
            None => DiagnosticSession::Reporting(Reporter::stderr(config.color)),
        }
    }
}

impl<W: WriteColor> DiagnosticSession<W> {
    /// Session writing to `out` in reporting mode
    pub fn with_writer(config: &DiagnosticConfig, out: W, interactive: bool) -> Self {
        match &config.verify_prefix {
            Some(prefix) => DiagnosticSession::Verifying(Verifier::new(prefix.clone())),
            None => DiagnosticSession::Reporting(Reporter::new(out, interactive)),
        }
    }

    /// Attach per-location expected output; no effect in reporting mode
    pub fn with_expectations(self, source: Box<dyn ExpectationSource>) -> Self {
        match self {
            DiagnosticSession::Verifying(v) => {
                DiagnosticSession::Verifying(v.with_expectations(source))
            }
            reporting => reporting,
        }
    }

    pub fn mode(&self) -> DiagnosticMode {
        match self {
            DiagnosticSession::Reporting(_) => DiagnosticMode::Reporting,
            DiagnosticSession::Verifying(_) => DiagnosticMode::Verifying,
        }
    }

    pub fn emit_location(&mut self, chain: &SourceLocationChain) {
        match self {
            DiagnosticSession::Reporting(r) => r.emit_location(chain),
            DiagnosticSession::Verifying(v) => v.emit_location(chain),
        }
    }

    /// Resolve `loc` and emit it. An unresolvable location is reported as
    /// `<unknown>` at the recorded line and column.
    pub fn emit_debug_loc(&mut self, loc: &DebugLoc, resolver: &dyn LocationResolver) {
        let chain = resolver.resolve(loc).unwrap_or_else(|| {
            SourceLocationChain::new(SourceFrame::new("", UNKNOWN_FILE, loc.line, loc.column))
        });
        self.emit_location(&chain);
    }

    pub fn emit_message(&mut self, message: &str) {
        match self {
            DiagnosticSession::Reporting(r) => r.emit_message(message),
            DiagnosticSession::Verifying(v) => v.emit_message(message),
        }
    }

    /// Location then message
    pub fn report(&mut self, chain: &SourceLocationChain, message: &str) {
        self.emit_location(chain);
        self.emit_message(message);
    }

    /// Verification failures so far; always empty when reporting
    pub fn failures(&self) -> &[VerificationFailure] {
        match self {
            DiagnosticSession::Reporting(_) => &[],
            DiagnosticSession::Verifying(v) => v.failures(),
        }
    }

    /// End the session. Reporting flushes the stream; verifying fails with
    /// every accumulated mismatch.
    pub fn finish(self) -> Result<()> {
        match self {
            DiagnosticSession::Reporting(mut r) => Ok(r.flush()?),
            DiagnosticSession::Verifying(v) => {
                let checked = v.checked();
                let failures = v.into_failures();
                if failures.is_empty() {
                    tracing::debug!("verify: {} message(s) matched", checked);
                    Ok(())
                } else {
                    Err(UbCheckError::VerificationFailed { failures })
                }
            }
        }
    }
}
