//! Cancellable countdown task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::controller::Intent;
use crate::session::TimerTicket;

use super::game_loop::LoopMessage;

/// Shortest period a countdown will tick at. `interval_at` rejects zero.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A running countdown: one `Tick` per period until cancelled.
///
/// Dropping a `Countdown` aborts its task, so a countdown cannot outlive the
/// session slot that owns it.
#[derive(Debug)]
pub struct Countdown {
    ticket: TimerTicket,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the countdown task. Must be called within a tokio runtime.
    ///
    /// The first tick fires one full period after spawning. Periods shorter
    /// than `MIN_PERIOD` are raised to it.
    pub(crate) fn spawn(
        ticket: TimerTicket,
        period: Duration,
        tx: UnboundedSender<LoopMessage>,
    ) -> Self {
        let period = period.max(MIN_PERIOD);
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(LoopMessage::Intent(Intent::Tick(ticket))).is_err() {
                    break;
                }
            }
        });
        debug!(epoch = ticket.epoch(), ?period, "countdown started");
        Self { ticket, handle }
    }

    /// The session epoch this countdown ticks for.
    #[must_use]
    pub fn ticket(&self) -> TimerTicket {
        self.ticket
    }

    /// Stop ticking. Ticks already queued are rejected by the controller's
    /// epoch check.
    pub fn cancel(self) {
        debug!(epoch = self.ticket.epoch(), "countdown cancelled");
        drop(self);
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
