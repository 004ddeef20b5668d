//! File-based configuration.
//!
//! Every section is optional; a missing file means all defaults.
//!
//! ```toml
//! [inputs]
//! newHomePrice = 650000
//! newInterestRate = "6.25"
//!
//! [advisor]
//! backend = "gemini"
//!
//! [retry]
//! max_attempts = 3
//! delay_ms = 1000
//!
//! [address]
//! city = "Manitowoc"
//! state = "WI"
//! zip = "54220"
//!
//! [logging]
//! level = "info"
//! file = "equity-calc.log"
//! console = true
//!
//! [inquiry]
//! recipient = "agent@example.com"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use equity_core::{AdvisorConfig, FormField, PropertyAddress, RawInputs, RetryPolicy};

/// Path tried when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "equity-calc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown input field '{0}'")]
    UnknownField(String),

    #[error("input field '{field}' must be a string or a number")]
    InvalidValue { field: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

impl RetrySettings {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

/// Address parts pre-filled for `estimate-value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddressDefaults {
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Default for AddressDefaults {
    fn default() -> Self {
        Self {
            city: "Manitowoc".to_string(),
            state: "WI".to_string(),
            zip: "54220".to_string(),
        }
    }
}

impl AddressDefaults {
    /// Builds an address, taking each part from the argument when given.
    pub fn resolve(
        &self,
        street: &str,
        city: Option<&str>,
        state: Option<&str>,
        zip: Option<&str>,
    ) -> PropertyAddress {
        PropertyAddress {
            street: street.to_string(),
            city: city.unwrap_or(&self.city).to_string(),
            state: state.unwrap_or(&self.state).to_string(),
            zip: zip.unwrap_or(&self.zip).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub file: Option<PathBuf>,
    pub console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: crate::logging::DEFAULT_FILTER.to_string(),
            file: None,
            console: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InquirySettings {
    /// Address the composed `mailto:` link is sent to. May be empty.
    pub recipient: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Per-field overrides applied on top of [`RawInputs::starter`].
    pub inputs: BTreeMap<String, toml::Value>,
    pub advisor: AdvisorConfig,
    pub retry: RetrySettings,
    pub address: AddressDefaults,
    pub logging: LoggingSettings,
    pub inquiry: InquirySettings,
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`. A missing file yields the defaults unless `required`.
    pub fn load(
        path: &Path,
        required: bool,
    ) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// The starting form: starter values with `[inputs]` applied.
    pub fn initial_inputs(&self) -> Result<RawInputs, ConfigError> {
        let mut raw = RawInputs::starter();
        for (name, value) in &self.inputs {
            let field =
                FormField::parse(name).ok_or_else(|| ConfigError::UnknownField(name.clone()))?;
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: name.clone(),
                    });
                }
            };
            raw.set(field, text);
        }
        Ok(raw)
    }
}
