//! Diagnostic application layer

pub mod session;

pub use session::DiagnosticSession;
