//! Controller and frame wired together for one on-page embed.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::controller::{EmbedAction, EmbedController};
use super::frame::EmbedFrame;
use super::state::{EmbedConfig, EmbedEvent, EmbedLoadState, EmbedPhase};
use crate::traits::EmbedProvider;

/// What the page shows for a supervised embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub phase: EmbedPhase,
    pub state: EmbedLoadState,
    pub max_retries: u32,
    /// An automatic retry is waiting on its timer.
    pub retry_scheduled: bool,
    /// External link offered once automatic retries are exhausted.
    pub fallback_url: Option<String>,
}

/// One embed on a page: controller, frame and the fallback link.
///
/// Dropping the supervisor (unmounting the page) aborts the in-flight load
/// and cancels any pending retry timer.
pub struct SupervisedEmbed {
    controller: EmbedController,
    frame: EmbedFrame,
    fallback_url: String,
    fallback_visible: bool,
}

impl SupervisedEmbed {
    /// Create the embed and mount it with remount token 0.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        provider: Arc<dyn EmbedProvider>,
        embed_url: impl Into<String>,
        fallback_url: impl Into<String>,
        config: EmbedConfig,
        events: mpsc::UnboundedSender<EmbedEvent>,
    ) -> Self {
        let controller = EmbedController::new(config, events.clone());
        let frame = EmbedFrame::new(provider, embed_url, events);
        let mut embed = Self {
            controller,
            frame,
            fallback_url: fallback_url.into(),
            fallback_visible: false,
        };
        let initial = embed.controller.start();
        embed.perform(vec![initial]);
        embed
    }

    /// Feed an event from the embed channel.
    pub fn handle(&mut self, event: EmbedEvent) {
        let actions = self.controller.handle(event);
        self.perform(actions);
    }

    /// User-initiated retry.
    pub fn retry(&mut self) {
        let actions = self.controller.retry();
        self.perform(actions);
    }

    pub fn embed_url(&self) -> &str {
        self.frame.url()
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    pub fn phase(&self) -> EmbedPhase {
        self.controller.phase()
    }

    pub fn view(&self) -> EmbedView {
        EmbedView {
            phase: self.controller.phase(),
            state: self.controller.load_state(),
            max_retries: self.controller.config().max_retries,
            retry_scheduled: self.controller.retry_pending(),
            fallback_url: self
                .fallback_visible
                .then(|| self.fallback_url.clone()),
        }
    }

    fn perform(&mut self, actions: Vec<EmbedAction>) {
        for action in actions {
            match action {
                EmbedAction::Mount { instance_key } => {
                    self.fallback_visible = false;
                    self.frame.mount(instance_key);
                }
                EmbedAction::ShowFallback => self.fallback_visible = true,
            }
        }
    }
}
