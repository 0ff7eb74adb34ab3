use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::time::Duration;

use crate::domain::model::{ElementId, ScrollBehavior, Selector};
use crate::utils::error::Result;

/// Read and mutate access to a page tree. Mutations on an element that
/// is no longer attached are silent no-ops, never errors; `Err` is
/// reserved for adapter failures (a broken bridge to the real UI).
pub trait Page: Send + Sync {
    fn select(&self, selector: &Selector) -> Vec<ElementId>;
    fn contains(&self, id: ElementId) -> bool;
    fn attr(&self, id: ElementId, name: &str) -> Option<String>;
    fn value(&self, id: ElementId) -> Option<String>;
    fn text(&self, id: ElementId) -> Option<String>;
    /// Element whose `id` attribute equals the fragment, if any.
    fn find_fragment(&self, fragment: &str) -> Option<ElementId>;

    fn set_text(&self, id: ElementId, text: &str) -> Result<()>;
    fn add_class(&self, id: ElementId, class: &str) -> Result<()>;
    fn remove_class(&self, id: ElementId, class: &str) -> Result<()>;
    fn set_style(&self, id: ElementId, property: &str, value: &str) -> Result<()>;
    fn set_disabled(&self, id: ElementId, disabled: bool) -> Result<()>;
    fn set_visible(&self, id: ElementId, visible: bool) -> Result<()>;
    fn scroll_into_view(&self, id: ElementId, behavior: ScrollBehavior) -> Result<()>;

    /// Sibling feedback element of a form field, if one exists.
    fn feedback_for(&self, field: ElementId) -> Option<ElementId>;
    /// Create a feedback element next to the field and return it.
    fn create_feedback(&self, field: ElementId) -> Result<ElementId>;
    /// Owned dismissal handle for an alert element.
    fn dismissible(&self, id: ElementId) -> Option<Box<dyn Dismissible>>;
}

/// Capability handle for dismissing one alert. Dismissing an alert
/// that was already removed is a no-op.
pub trait Dismissible: Send + 'static {
    fn dismiss(&self);
}

/// Blocking yes/no prompt shown before destructive actions.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

#[async_trait]
impl<T: Confirmer + ?Sized> Confirmer for Box<T> {
    async fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message).await
    }
}

/// Wall-clock source for the live time display.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Tunables consumed by the enhancer.
pub trait EnhancerConfig: Send + Sync {
    fn alert_dismiss_delay(&self) -> Duration;
    fn clock_tick(&self) -> Duration;
    fn confirm_message(&self) -> &str;
    fn rut_field_name(&self) -> &str;
    fn required_message(&self) -> &str;
    fn invalid_rut_message(&self) -> &str;
}
