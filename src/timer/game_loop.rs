//! Single-consumer intent loop.
//!
//! `GameLoop` owns the controller and applies intents strictly one at a
//! time, whether they come from the renderer or from the countdown. After
//! each intent it lines the countdown up with the session: a new play-through
//! gets a fresh countdown, and leaving `Playing` cancels it.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::controller::{Events, GameController, Intent, Notifier};
use crate::core::RandomSource;
use crate::rules::WinCondition;

use super::countdown::Countdown;

/// Message on the loop's inbox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum LoopMessage {
    Intent(Intent),
    Shutdown,
}

/// Cloneable sender for feeding a running `GameLoop`.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    tx: UnboundedSender<LoopMessage>,
}

impl LoopHandle {
    /// Queue an intent. Returns false if the loop has stopped.
    pub fn send(&self, intent: Intent) -> bool {
        self.tx.send(LoopMessage::Intent(intent)).is_ok()
    }

    /// Ask the loop to stop after the intents already queued.
    pub fn shutdown(&self) -> bool {
        self.tx.send(LoopMessage::Shutdown).is_ok()
    }
}

/// Drives a `GameController` from an intent inbox.
pub struct GameLoop<N, W, R> {
    controller: GameController<W, R>,
    notifier: N,
    tx: UnboundedSender<LoopMessage>,
    rx: UnboundedReceiver<LoopMessage>,
    countdown: Option<Countdown>,
}

impl<N, W, R> GameLoop<N, W, R>
where
    N: Notifier,
    W: WinCondition,
    R: RandomSource,
{
    #[must_use]
    pub fn new(controller: GameController<W, R>, notifier: N) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            controller,
            notifier,
            tx,
            rx,
            countdown: None,
        }
    }

    /// A handle for sending intents into this loop.
    #[must_use]
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            tx: self.tx.clone(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &GameController<W, R> {
        &self.controller
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Whether a countdown task is currently attached.
    #[must_use]
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    /// Apply one intent right away, bypassing the inbox.
    ///
    /// Must be called within a tokio runtime, since it may spawn a countdown.
    pub fn apply(&mut self, intent: Intent) -> Events {
        let events = self.controller.dispatch(intent);
        for event in &events {
            self.notifier.notify(event);
        }
        self.sync_countdown();
        events
    }

    /// Wait for the next message and apply it.
    ///
    /// Returns `None` on shutdown.
    pub async fn step(&mut self) -> Option<Events> {
        // `self.tx` keeps the channel open, so `recv` only ends on Shutdown.
        match self.rx.recv().await? {
            LoopMessage::Intent(intent) => Some(self.apply(intent)),
            LoopMessage::Shutdown => None,
        }
    }

    /// Process messages until shutdown, then hand the controller back.
    pub async fn run(mut self) -> GameController<W, R> {
        info!("game loop running");
        while self.step().await.is_some() {}
        self.countdown = None;
        info!("game loop stopped");
        self.controller
    }

    fn sync_countdown(&mut self) {
        let wanted = self.controller.session().timer_ticket();
        let current = self.countdown.as_ref().map(Countdown::ticket);
        if wanted == current {
            return;
        }

        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }
        if let Some(ticket) = wanted {
            let period = self.controller.config().tick_interval();
            self.countdown = Some(Countdown::spawn(ticket, period, self.tx.clone()));
        } else {
            debug!(screen = ?self.controller.session().screen(), "countdown detached");
        }
    }
}
