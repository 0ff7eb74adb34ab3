pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::confirmers::{StaticConfirmer, TerminalConfirmer};
pub use adapters::memory::{ElementSpec, MemoryPage};
pub use adapters::time::SystemTimeSource;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EnhancerSettings, TomlConfig};
pub use core::buttons::{restore_button, show_button_loading};
pub use core::clock::ClockHandle;
pub use core::enhancer::PageEnhancer;
pub use domain::model::{Disposition, ElementId, PageEvent, ScrollBehavior, Selector};
pub use domain::ports::{Confirmer, Dismissible, EnhancerConfig, Page, TimeSource};
pub use utils::error::{EnhancerError, Result};
pub use utils::validation::validate_rut;
