//! Error types for ubcheck-ir
//!
//! Provides unified error handling across the crate. Handler
//! non-applicability is not an error: handlers decline by returning `false`.

use crate::config::ConfigError;
use crate::features::diagnostics::domain::VerificationFailure;
use crate::shared::models::Type;
use thiserror::Error;

/// Main error type for ubcheck-ir operations
#[derive(Debug, Error)]
pub enum UbCheckError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Comparison between operands of different types
    #[error("Type mismatch: cannot compare {lhs} with {rhs}")]
    TypeMismatch { lhs: Type, rhs: Type },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One or more diagnostics did not match the expected output
    #[error("Verification failed: {} mismatch(es){}", .failures.len(), summarize(.failures))]
    VerificationFailed { failures: Vec<VerificationFailure> },
}

fn summarize(failures: &[VerificationFailure]) -> String {
    failures
        .first()
        .map(|f| format!(", first: {}", f))
        .unwrap_or_default()
}

impl UbCheckError {
    /// Create a type mismatch error
    pub fn type_mismatch(lhs: Type, rhs: Type) -> Self {
        UbCheckError::TypeMismatch { lhs, rhs }
    }
}

/// Result type alias for ubcheck operations
pub type Result<T> = std::result::Result<T, UbCheckError>;
