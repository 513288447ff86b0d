//! PassConfig: YAML schema v1 and environment loading

use super::error::{ConfigError, ConfigResult};
use crate::features::libc_ub::domain::RECOGNIZED_PROCEDURES;
use serde::{Deserialize, Serialize};

/// Environment setting that selects verification mode
pub const VERIFY_PREFIX_ENV: &str = "VERIFY_PREFIX";

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Reporter colorization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colorize iff stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticConfig {
    /// Presence selects verification mode; the value is the expected-output prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_prefix: Option<String>,

    #[serde(default)]
    pub color: ColorMode,
}

impl DiagnosticConfig {
    pub fn reporting() -> Self {
        Self::default()
    }

    pub fn verifying(prefix: impl Into<String>) -> Self {
        Self {
            verify_prefix: Some(prefix.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// Recognized procedures to leave uninstrumented
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

impl HandlerConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|d| d == name)
    }
}

/// Complete pass configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassConfig {
    pub diagnostics: DiagnosticConfig,
    pub handlers: HandlerConfig,
}

/// On-disk schema
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    version: Option<u32>,
    #[serde(default)]
    diagnostics: DiagnosticConfig,
    #[serde(default)]
    handlers: HandlerConfig,
}

impl PassConfig {
    /// Configuration from the process environment.
    ///
    /// An empty `VERIFY_PREFIX` counts as unset.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `VERIFY_PREFIX` on top of this configuration
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(prefix) = std::env::var(VERIFY_PREFIX_ENV)
            .ok()
            .filter(|p| !p.is_empty())
        {
            tracing::debug!("{} set, diagnostics in verification mode", VERIFY_PREFIX_ENV);
            self.diagnostics.verify_prefix = Some(prefix);
        }
        self
    }

    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            diagnostics: file.diagnostics,
            handlers: file.handlers,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            diagnostics: self.diagnostics.clone(),
            handlers: self.handlers.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if matches!(self.diagnostics.verify_prefix.as_deref(), Some("")) {
            return Err(ConfigError::EmptyVerifyPrefix);
        }
        for name in &self.handlers.disabled {
            if !RECOGNIZED_PROCEDURES.iter().any(|(n, _)| n == name) {
                return Err(ConfigError::UnknownProcedure {
                    name: name.clone(),
                    recognized: RECOGNIZED_PROCEDURES
                        .iter()
                        .map(|(n, _)| n.to_string())
                        .collect(),
                });
            }
        }
        Ok(())
    }
}
