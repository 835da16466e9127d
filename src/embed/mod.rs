//! Embed reload controller.
//!
//! Supervises a remote embed (the location map) through loading, success,
//! bounded automatic retry and manual retry.
//!
//! - [`EmbedMachine`] - pure transition function over [`EmbedEvent`]s
//! - [`RetryTimer`] - single-shot cancellable timer handle
//! - [`EmbedController`] - machine plus timer, hands load requests back
//! - [`EmbedFrame`] - performs load attempts through an `EmbedProvider`
//! - [`SupervisedEmbed`] - controller and frame wired together

mod controller;
mod frame;
mod state;
mod supervisor;
mod timer;

pub use controller::{EmbedAction, EmbedController};
pub use frame::EmbedFrame;
pub use state::{
    EmbedConfig, EmbedEffect, EmbedEvent, EmbedLoadState, EmbedMachine, EmbedPhase,
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY,
};
pub use supervisor::{EmbedView, SupervisedEmbed};
pub use timer::RetryTimer;
