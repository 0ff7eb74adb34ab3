pub mod alerts;
pub mod buttons;
pub mod clock;
pub mod confirm;
pub mod enhancer;
pub mod form;
pub mod hover;
pub mod scroll;

pub use crate::domain::model::{Disposition, ElementId, PageEvent, Selector};
pub use crate::domain::ports::{Confirmer, EnhancerConfig, Page, TimeSource};
pub use crate::utils::error::Result;
