//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - application/ - Use cases
//! - infrastructure/ - Implementations

// Runtime-check insertion point (the insertion cursor)
pub mod instrumentation;

// Libc UB trigger conditions: call recognition + handlers
pub mod libc_ub;

// Violation reporting and self-test verification
pub mod diagnostics;
