//! Diagnostics - violation reporting and self-test verification
//!
//! The mode is fixed when the session is built:
//!
//! ```text
//! DiagnosticConfig.verify_prefix
//!   ├── None       → Reporting(Reporter)   colorized chain + " bug: " + message
//!   └── Some(pfx)  → Verifying(Verifier)   message must start with expected text
//! ```
//!
//! Callers use the two-call protocol: `emit_location` then `emit_message`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::DiagnosticSession;
pub use domain::{DiagnosticMode, VerificationFailure};
pub use infrastructure::{ExpectationSource, Reporter, SourceAnnotations, Verifier, LEAD_IN};
