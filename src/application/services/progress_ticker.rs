//! Cosmetic progress animation.
//!
//! The percentage has no relation to real backend progress; it only moves
//! toward [`PROGRESS_CEILING`] while a request is pending.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Value the ticker never advances past.
pub const PROGRESS_CEILING: u8 = 90;
/// Value forced once the request settles.
pub const PROGRESS_COMPLETE: u8 = 100;
/// Default delay between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(200);

const MIN_STEP: u8 = 5;
const MAX_STEP: u8 = 14;

/// Computes the next progress value for a random step.
#[must_use]
pub fn advance(current: u8, step: u8) -> u8 {
    if current >= PROGRESS_CEILING {
        current
    } else {
        current.saturating_add(step).min(PROGRESS_COMPLETE)
    }
}

/// Background task publishing progress values. Aborted on drop.
pub struct ProgressTicker {
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Starts ticking from the channel's current value.
    #[must_use]
    pub fn spawn(progress: Arc<watch::Sender<u8>>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticks.tick().await;

            loop {
                ticks.tick().await;
                let current = *progress.borrow();
                if current >= PROGRESS_CEILING {
                    break;
                }
                let step = rand::thread_rng().gen_range(MIN_STEP..=MAX_STEP);
                progress.send_replace(advance(current, step));
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Stops the ticker and waits until it can no longer publish.
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
