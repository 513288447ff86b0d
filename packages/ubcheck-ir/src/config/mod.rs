//! Pass configuration
//!
//! One YAML schema (`version: 1`) plus a single environment setting:
//!
//! ```rust,ignore
//! use ubcheck_ir::config::PassConfig;
//!
//! // Environment only: VERIFY_PREFIX switches diagnostics to verification
//! let config = PassConfig::from_env();
//!
//! // YAML file
//! let config = PassConfig::from_yaml("ubcheck.yaml")?;
//! ```

pub mod error;
pub mod pass_config;

pub use error::{ConfigError, ConfigResult};
pub use pass_config::{ColorMode, DiagnosticConfig, HandlerConfig, PassConfig, VERIFY_PREFIX_ENV};
