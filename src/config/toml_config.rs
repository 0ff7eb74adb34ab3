use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EnhancerSettings;
use crate::utils::error::Result;

/// Optional settings file for the demo binary. Every section and field
/// is optional; missing values fall back to the built-in defaults.
///
/// ```toml
/// [timers]
/// alert_dismiss_ms = 3000
/// clock_tick_ms = 1000
///
/// [messages]
/// confirm = "¿Confirmar la reserva?"
///
/// [form]
/// rut_field = "rut_reservante"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub timers: Option<TimersSection>,
    pub messages: Option<MessagesSection>,
    pub form: Option<FormSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimersSection {
    pub alert_dismiss_ms: Option<u64>,
    pub clock_tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesSection {
    pub confirm: Option<String>,
    pub required: Option<String>,
    pub invalid_rut: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSection {
    pub rut_field: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Merges the file over the built-in defaults.
    pub fn into_settings(self) -> EnhancerSettings {
        let mut settings = EnhancerSettings::default();
        if let Some(timers) = self.timers {
            if let Some(ms) = timers.alert_dismiss_ms {
                settings.alert_dismiss_ms = ms;
            }
            if let Some(ms) = timers.clock_tick_ms {
                settings.clock_tick_ms = ms;
            }
        }
        if let Some(messages) = self.messages {
            if let Some(confirm) = messages.confirm {
                settings.confirm_message = confirm;
            }
            if let Some(required) = messages.required {
                settings.required_message = required;
            }
            if let Some(invalid_rut) = messages.invalid_rut {
                settings.invalid_rut_message = invalid_rut;
            }
        }
        if let Some(form) = self.form {
            if let Some(rut_field) = form.rut_field {
                settings.rut_field = rut_field;
            }
        }
        settings
    }
}
