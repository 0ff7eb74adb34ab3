use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{EnhancerSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfirmMode {
    /// Accept every confirmation prompt.
    Yes,
    /// Decline every confirmation prompt.
    No,
    /// Prompt on the terminal.
    Ask,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "page-enhancer")]
#[command(about = "Replays UI events against the reservation demo page")]
pub struct CliConfig {
    /// Event script (JSON) to replay instead of the built-in demo run
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the alert auto-dismiss delay
    #[arg(long)]
    pub alert_delay_ms: Option<u64>,

    /// Override the clock re-render interval
    #[arg(long)]
    pub clock_tick_ms: Option<u64>,

    #[arg(long, value_enum, default_value_t = ConfirmMode::Yes)]
    pub auto_confirm: ConfirmMode,

    /// Clock ticks to observe before the demo exits
    #[arg(long, default_value = "3")]
    pub clock_ticks: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves settings: built-in defaults, then the TOML file, then
    /// explicit CLI overrides. The result is validated.
    pub fn settings(&self) -> Result<EnhancerSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => EnhancerSettings::default(),
        };
        if let Some(ms) = self.alert_delay_ms {
            settings.alert_dismiss_ms = ms;
        }
        if let Some(ms) = self.clock_tick_ms {
            settings.clock_tick_ms = ms;
        }
        settings.validate()?;
        Ok(settings)
    }
}
