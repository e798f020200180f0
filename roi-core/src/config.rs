//! Engine configuration.
//!
//! Holds the fallback values the cash-flow projection uses when lease fields
//! are blank or unparsable. The registry levy is not configurable; see
//! [`REGISTRY_RATE`](crate::calculations::REGISTRY_RATE).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be at least 1")]
    ZeroValue { field: &'static str },
}

/// Tunable defaults for the calculation engine.
///
/// # Example
///
/// ```
/// use roi_core::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("max_projection_years = 50").unwrap();
///
/// assert_eq!(config.max_projection_years, 50);
/// assert_eq!(config.default_occupation_years, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Projection length when the occupation period cannot be parsed.
    pub default_occupation_years: u32,

    /// Escalation frequency when unset or unparsable. The default is longer
    /// than any realistic lease, so rent stays flat.
    pub default_escalation_frequency_years: u32,

    /// Upper bound on the number of projected years.
    pub max_projection_years: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_occupation_years: 10,
            default_escalation_frequency_years: 100,
            max_projection_years: 200,
        }
    }
}

impl EngineConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML, unknown keys, or a zero
    /// value in any field.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is at least one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("default_occupation_years", self.default_occupation_years),
            (
                "default_escalation_frequency_years",
                self.default_escalation_frequency_years,
            ),
            ("max_projection_years", self.max_projection_years),
        ];
        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::ZeroValue { field }),
            None => Ok(()),
        }
    }
}
