use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::model::{ElementId, Selector, CLASS_CURRENT_TIME};
use crate::domain::ports::{Page, TimeSource};

/// es-CL shape: two-digit day/month, four-digit year, 24h time.
pub const TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Handle for the running clock task. Stopping (or dropping) the
/// handle ends the task; there is no other teardown path.
pub struct ClockHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ClockHandle {
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

pub fn render_time<P, T>(page: &P, time: &T, targets: &[ElementId])
where
    P: Page + ?Sized,
    T: TimeSource + ?Sized,
{
    let stamp = time.now().format(TIME_FORMAT).to_string();
    for id in targets {
        let _ = page.set_text(*id, &stamp);
    }
}

/// Starts the repeating clock render if any clock element exists.
/// The first tick fires immediately, so the time shows up without
/// waiting a full interval.
pub fn start_clock<P, T>(page: Arc<P>, time: Arc<T>, tick: Duration) -> Option<ClockHandle>
where
    P: Page + 'static,
    T: TimeSource + 'static,
{
    let targets = page.select(&Selector::class(CLASS_CURRENT_TIME));
    if targets.is_empty() {
        return None;
    }

    tracing::debug!("starting clock for {} element(s)", targets.len());
    let (stop_tx, mut stop_rx) = watch::channel(false);
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    render_time(page.as_ref(), time.as_ref(), &targets);
                }
                _ = stop_rx.changed() => {
                    tracing::debug!("clock task stopped");
                    break;
                }
            }
        }
    });

    Some(ClockHandle {
        stop: stop_tx,
        task,
    })
}
