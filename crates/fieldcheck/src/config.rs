//! Session configuration with environment variable support.
//!
//! # Example
//!
//! ```ignore
//! use fieldcheck::{ValidatorConfig, Validator};
//!
//! // FIELDCHECK_LENGTH_UNIT=bytes
//! let config = ValidatorConfig::from_env().expect("Failed to load config");
//! let mut v = Validator::with_config(config, "username", "héllo");
//! v.max(5);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the environment variables read by [`ValidatorConfig::from_env`].
pub const ENV_PREFIX: &str = "FIELDCHECK_";

/// How `min`/`max` measure string length.
///
/// The default counts Unicode scalar values, so `max(5)` accepts `"héllo"`.
/// [`LengthUnit::Bytes`] counts UTF-8 bytes instead, which rejects it; pick
/// it when lengths must match a byte-counting backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl LengthUnit {
    /// Length of `s` in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            LengthUnit::Chars => s.chars().count(),
            LengthUnit::Bytes => s.len(),
        }
    }
}

/// Options fixed for the lifetime of a validation session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Unit used by length comparisons on strings
    pub length_unit: LengthUnit,
}

impl ValidatorConfig {
    /// Set the string length unit.
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    /// Load the configuration from `FIELDCHECK_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    /// Load the configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?)
    }
}

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
}
