/*
 * ubcheck-ir - Libc UB Instrumentation Core
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : IR models (types, values, calls, debug locations), ports
 * - features/    : Vertical slices (libc_ub → instrumentation → diagnostics)
 * - pipeline/    : Pass driver and violation reporting
 * - config/      : YAML + environment configuration
 *
 * Flow:
 * - LibcUbPass visits every instruction of a unit
 * - HandlerRegistry recognizes abs/labs/llabs/div/ldiv/lldiv calls
 * - Handlers synthesize trigger conditions into the insertion cursor
 * - DiagnosticSession reports (or verifies) a check when it fires
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::len_without_is_empty)] // Non-empty collections by construction

/// Shared models and ports
pub mod shared;

/// Feature modules
pub mod features;

/// Pass orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{DiagnosticConfig, PassConfig};
pub use errors::{Result, UbCheckError};
pub use features::diagnostics::DiagnosticSession;
pub use features::instrumentation::{CheckCollector, InsertedCheck};
pub use features::libc_ub::{HandlerRegistry, LibcHandler};
pub use pipeline::{report_violation, LibcUbPass, PassSummary};
