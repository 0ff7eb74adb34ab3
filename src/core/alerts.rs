use std::time::Duration;

use crate::domain::model::{Selector, CLASS_ALERT};
use crate::domain::ports::Page;

/// Schedules one-shot dismissal for every alert present on the page.
/// Returns the number of alerts scheduled.
///
/// Timers are fire-and-forget: there is no cancellation, and an alert
/// removed before the delay elapses makes the fire a no-op. Must be
/// called from within a Tokio runtime.
pub fn auto_dismiss_alerts<P: Page + ?Sized>(page: &P, delay: Duration) -> usize {
    let alerts = page.select(&Selector::class(CLASS_ALERT));
    for id in &alerts {
        if let Some(handle) = page.dismissible(*id) {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                handle.dismiss();
            });
        }
    }
    if !alerts.is_empty() {
        tracing::debug!("scheduled auto-dismiss for {} alert(s)", alerts.len());
    }
    alerts.len()
}
