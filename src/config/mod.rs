#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ConfirmMode};
pub use toml_config::TomlConfig;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ports::EnhancerConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_duration, Validate};

pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5000;
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;
pub const DEFAULT_CONFIRM_MESSAGE: &str = "¿Estás seguro de que quieres reservar esta sala?";
pub const DEFAULT_RUT_FIELD: &str = "rut_reservante";
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Este campo es obligatorio";
pub const DEFAULT_INVALID_RUT_MESSAGE: &str = "Por favor ingresa un RUT válido";

/// Resolved enhancer settings. Library users construct this directly;
/// the demo binary derives it from CLI flags and an optional TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerSettings {
    pub alert_dismiss_ms: u64,
    pub clock_tick_ms: u64,
    pub confirm_message: String,
    pub rut_field: String,
    pub required_message: String,
    pub invalid_rut_message: String,
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            clock_tick_ms: DEFAULT_CLOCK_TICK_MS,
            confirm_message: DEFAULT_CONFIRM_MESSAGE.to_string(),
            rut_field: DEFAULT_RUT_FIELD.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            invalid_rut_message: DEFAULT_INVALID_RUT_MESSAGE.to_string(),
        }
    }
}

impl EnhancerConfig for EnhancerSettings {
    fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    fn confirm_message(&self) -> &str {
        &self.confirm_message
    }

    fn rut_field_name(&self) -> &str {
        &self.rut_field
    }

    fn required_message(&self) -> &str {
        &self.required_message
    }

    fn invalid_rut_message(&self) -> &str {
        &self.invalid_rut_message
    }
}

impl Validate for EnhancerSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_duration("alert_dismiss_ms", self.alert_dismiss_delay())?;
        validate_positive_duration("clock_tick_ms", self.clock_tick())?;
        validate_non_empty_string("confirm_message", &self.confirm_message)?;
        validate_non_empty_string("rut_field", &self.rut_field)?;
        validate_non_empty_string("required_message", &self.required_message)?;
        validate_non_empty_string("invalid_rut_message", &self.invalid_rut_message)?;
        Ok(())
    }
}
