//! Diagnostic Infrastructure

pub mod expectations;
pub mod reporter;
pub mod verifier;

pub use expectations::{ExpectationSource, SourceAnnotations};
pub use reporter::{Reporter, LEAD_IN};
pub use verifier::Verifier;
