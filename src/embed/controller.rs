//! Embed reload controller.
//!
//! Wraps [`EmbedMachine`] with the retry timer it needs. Timer effects are
//! handled here; load requests and the fallback are handed back to the
//! owner, since the controller never touches the network.

use tokio::sync::mpsc;
use tracing::{info, warn};

use super::state::{EmbedConfig, EmbedEffect, EmbedEvent, EmbedLoadState, EmbedMachine, EmbedPhase};
use super::timer::RetryTimer;

/// Effects the owner must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedAction {
    /// Mount the embed with this remount token.
    Mount { instance_key: u64 },
    /// Automatic retries are exhausted; offer manual retry and the link.
    ShowFallback,
}

/// Drives one embed through loading, bounded auto-retry and manual retry.
///
/// Timer firings are delivered as [`EmbedEvent::RetryTimeout`] on the
/// `events` channel; the owner feeds them back through [`Self::handle`].
#[derive(Debug)]
pub struct EmbedController {
    machine: EmbedMachine,
    timer: RetryTimer,
    events: mpsc::UnboundedSender<EmbedEvent>,
}

impl EmbedController {
    pub fn new(config: EmbedConfig, events: mpsc::UnboundedSender<EmbedEvent>) -> Self {
        Self {
            machine: EmbedMachine::new(config),
            timer: RetryTimer::new(),
            events,
        }
    }

    /// The initial mount for the freshly created controller.
    pub fn start(&self) -> EmbedAction {
        EmbedAction::Mount {
            instance_key: self.machine.instance_key(),
        }
    }

    pub fn phase(&self) -> EmbedPhase {
        self.machine.phase()
    }

    pub fn load_state(&self) -> EmbedLoadState {
        self.machine.load_state()
    }

    pub fn config(&self) -> EmbedConfig {
        self.machine.config()
    }

    /// Whether an automatic retry is waiting on its timer.
    pub fn retry_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Apply one event; returns the actions the owner must perform.
    pub fn handle(&mut self, event: EmbedEvent) -> Vec<EmbedAction> {
        if let EmbedEvent::LoadFailed { failure, .. } = &event {
            warn!(reason = %failure.reason, "map embed failed to load");
        }

        let mut actions = Vec::new();
        for effect in self.machine.apply(event) {
            match effect {
                EmbedEffect::ScheduleRetry {
                    instance_key,
                    delay,
                } => {
                    let events = self.events.clone();
                    self.timer.arm(delay, move || async move {
                        let _ = events.send(EmbedEvent::RetryTimeout { instance_key });
                    });
                }
                EmbedEffect::CancelRetry => {
                    self.timer.cancel();
                }
                EmbedEffect::RequestLoad { instance_key } => {
                    actions.push(EmbedAction::Mount { instance_key });
                }
                EmbedEffect::ShowFallback => {
                    info!(
                        retries = self.machine.retry_count(),
                        "map embed retries exhausted, showing fallback"
                    );
                    actions.push(EmbedAction::ShowFallback);
                }
            }
        }
        actions
    }

    /// Manual retry from the fallback affordance (or any other state).
    pub fn retry(&mut self) -> Vec<EmbedAction> {
        self.handle(EmbedEvent::ManualRetry)
    }
}
