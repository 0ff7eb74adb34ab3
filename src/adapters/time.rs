use chrono::{DateTime, Local};

use crate::domain::ports::TimeSource;

/// Wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
