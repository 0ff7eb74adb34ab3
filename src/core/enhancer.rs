use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::core::clock::ClockHandle;
use crate::core::{alerts, clock, confirm, form, hover, scroll};
use crate::domain::model::{
    Disposition, ElementId, PageEvent, Selector, CLASS_CARD, CLASS_RESERVE_CONFIRM,
};
use crate::domain::ports::{Confirmer, EnhancerConfig, Page, TimeSource};
use crate::utils::error::Result;

/// Element ids wired per behavior when the enhancer attached. Events on
/// elements outside the snapshot are ignored, matching handlers that
/// are registered once on page load.
#[derive(Debug, Default)]
struct WiredElements {
    anchors: HashSet<ElementId>,
    confirm_buttons: HashSet<ElementId>,
    cards: HashSet<ElementId>,
    required_inputs: HashSet<ElementId>,
}

/// Wires the page behaviors at attach time and dispatches page events:
/// alert auto-dismissal, smooth anchor scrolling, reservation
/// confirmations, the live clock, card hover transitions, and required
/// field validation.
pub struct PageEnhancer<P, C, F>
where
    P: Page + 'static,
    C: Confirmer,
    F: EnhancerConfig,
{
    page: Arc<P>,
    confirmer: C,
    config: F,
    wired: WiredElements,
    clock: Option<ClockHandle>,
}

impl<P, C, F> PageEnhancer<P, C, F>
where
    P: Page + 'static,
    C: Confirmer,
    F: EnhancerConfig,
{
    /// Snapshots the wired elements, schedules alert dismissal, and
    /// starts the clock if any display exists. Must be called from
    /// within a Tokio runtime.
    pub fn attach<T: TimeSource + 'static>(
        page: Arc<P>,
        confirmer: C,
        time: Arc<T>,
        config: F,
    ) -> Result<Self> {
        let wired = WiredElements {
            anchors: page.select(&Selector::AnchorLink).into_iter().collect(),
            confirm_buttons: page
                .select(&Selector::class(CLASS_RESERVE_CONFIRM))
                .into_iter()
                .collect(),
            cards: page.select(&Selector::class(CLASS_CARD)).into_iter().collect(),
            required_inputs: page.select(&Selector::RequiredInput).into_iter().collect(),
        };

        let alert_count = alerts::auto_dismiss_alerts(page.as_ref(), config.alert_dismiss_delay());
        let clock = clock::start_clock(Arc::clone(&page), time, config.clock_tick());

        tracing::info!(
            "enhancer attached: {} anchor(s), {} confirm button(s), {} card(s), {} required input(s), {} alert(s), clock {}",
            wired.anchors.len(),
            wired.confirm_buttons.len(),
            wired.cards.len(),
            wired.required_inputs.len(),
            alert_count,
            if clock.is_some() { "running" } else { "off" },
        );

        Ok(Self {
            page,
            confirmer,
            config,
            wired,
            clock,
        })
    }

    /// Dispatches one event to the wired behaviors and reports whether
    /// its default action may proceed.
    pub async fn handle_event(&self, event: &PageEvent) -> Result<Disposition> {
        match *event {
            PageEvent::Click { target } => {
                let mut disposition = Disposition::Default;
                if self.wired.anchors.contains(&target) {
                    disposition = scroll::handle_anchor_click(self.page.as_ref(), target)?;
                }
                if self.wired.confirm_buttons.contains(&target)
                    && confirm::handle_confirm_click(
                        &self.confirmer,
                        self.config.confirm_message(),
                    )
                    .await
                        == Disposition::Prevented
                {
                    disposition = Disposition::Prevented;
                }
                Ok(disposition)
            }
            PageEvent::Blur { target } if self.wired.required_inputs.contains(&target) => {
                form::validate_field(self.page.as_ref(), target, &self.config)?;
                Ok(Disposition::Default)
            }
            PageEvent::Input { target } if self.wired.required_inputs.contains(&target) => {
                form::clear_field_validation(self.page.as_ref(), target)?;
                Ok(Disposition::Default)
            }
            PageEvent::PointerEnter { target } | PageEvent::PointerLeave { target }
                if self.wired.cards.contains(&target) =>
            {
                hover::apply_card_transition(self.page.as_ref(), target)?;
                Ok(Disposition::Default)
            }
            _ => Ok(Disposition::Default),
        }
    }

    /// Drains events until the channel closes or cancellation fires,
    /// then stops the clock. A failed event is logged and the loop
    /// keeps going, the way page handlers survive a bad element.
    pub async fn run(
        &mut self,
        mut events: mpsc::Receiver<PageEvent>,
        mut cancel: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                maybe = events.recv() => {
                    match maybe {
                        Some(event) => match self.handle_event(&event).await {
                            Ok(disposition) => {
                                tracing::debug!("{:?} -> {:?}", event, disposition);
                            }
                            Err(e) => {
                                tracing::error!("event handling failed: {}", e);
                            }
                        },
                        None => {
                            tracing::debug!("event channel closed");
                            break;
                        }
                    }
                }
                _ = cancel.changed() => {
                    tracing::info!("enhancer shutting down");
                    break;
                }
            }
        }
        self.stop_clock().await;
    }

    /// Explicit teardown for callers that never enter [`run`].
    pub async fn shutdown(mut self) {
        self.stop_clock().await;
    }

    pub fn clock_running(&self) -> bool {
        self.clock.as_ref().map(|c| !c.is_finished()).unwrap_or(false)
    }

    async fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.stop().await;
        }
    }
}
