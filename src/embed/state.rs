//! Embed reload state machine.
//!
//! [`EmbedMachine::apply`] is a pure transition function: it consumes one
//! [`EmbedEvent`] and returns the [`EmbedEffect`]s the owner must carry out.
//! Timers and load requests live outside.

use std::time::Duration;

use tracing::debug;

use crate::error::EmbedLoadFailure;

/// Automatic retries before the fallback is shown.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay between a failure and the next automatic attempt.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

/// Retry policy for one embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedConfig {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Lifecycle phase of an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedPhase {
    Loading,
    Loaded,
    /// Failed; automatic attempt number `n + 1` is pending.
    ErrorRetrying(u32),
    /// Automatic retries used up; only a manual retry leaves this phase.
    ErrorExhausted,
}

/// Visible state of one embed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedLoadState {
    pub is_loading: bool,
    pub has_error: bool,
    pub retry_count: u32,
    /// Remount token; a change forces the embed to be re-requested.
    pub instance_key: u64,
}

/// Signals that drive the machine.
///
/// Load results and timer firings carry the `instance_key` they belong to so
/// results from a superseded mount are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedEvent {
    LoadSucceeded { instance_key: u64 },
    LoadFailed {
        instance_key: u64,
        failure: EmbedLoadFailure,
    },
    RetryTimeout { instance_key: u64 },
    ManualRetry,
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedEffect {
    /// (Re)mount the embed with this remount token.
    RequestLoad { instance_key: u64 },
    /// Arm the single-shot retry timer.
    ScheduleRetry { instance_key: u64, delay: Duration },
    /// Disarm a pending retry timer.
    CancelRetry,
    /// Show the manual-retry action and the external link.
    ShowFallback,
}

/// State machine for one embed instance.
#[derive(Debug, Clone)]
pub struct EmbedMachine {
    config: EmbedConfig,
    phase: EmbedPhase,
    retry_count: u32,
    instance_key: u64,
}

impl EmbedMachine {
    /// Start in `Loading` with remount token 0.
    ///
    /// The owner is expected to request the first load itself.
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            config,
            phase: EmbedPhase::Loading,
            retry_count: 0,
            instance_key: 0,
        }
    }

    pub fn config(&self) -> EmbedConfig {
        self.config
    }

    pub fn phase(&self) -> EmbedPhase {
        self.phase
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn instance_key(&self) -> u64 {
        self.instance_key
    }

    /// Snapshot of the visible state.
    pub fn load_state(&self) -> EmbedLoadState {
        EmbedLoadState {
            is_loading: self.phase == EmbedPhase::Loading,
            has_error: matches!(
                self.phase,
                EmbedPhase::ErrorRetrying(_) | EmbedPhase::ErrorExhausted
            ),
            retry_count: self.retry_count,
            instance_key: self.instance_key,
        }
    }

    /// Apply one event and return the effects to run, in order.
    pub fn apply(&mut self, event: EmbedEvent) -> Vec<EmbedEffect> {
        let before = self.phase;
        let effects = match event {
            EmbedEvent::LoadSucceeded { instance_key } => self.on_load_succeeded(instance_key),
            EmbedEvent::LoadFailed {
                instance_key,
                failure,
            } => self.on_load_failed(instance_key, &failure),
            EmbedEvent::RetryTimeout { instance_key } => self.on_retry_timeout(instance_key),
            EmbedEvent::ManualRetry => self.on_manual_retry(),
        };

        if before != self.phase {
            debug!(
                from = ?before,
                to = ?self.phase,
                retry_count = self.retry_count,
                instance_key = self.instance_key,
                "embed transition"
            );
        }
        effects
    }

    fn is_current(&self, instance_key: u64) -> bool {
        instance_key == self.instance_key
    }

    fn on_load_succeeded(&mut self, instance_key: u64) -> Vec<EmbedEffect> {
        if self.phase != EmbedPhase::Loading || !self.is_current(instance_key) {
            return Vec::new();
        }
        self.phase = EmbedPhase::Loaded;
        self.retry_count = 0;
        Vec::new()
    }

    fn on_load_failed(&mut self, instance_key: u64, failure: &EmbedLoadFailure) -> Vec<EmbedEffect> {
        if self.phase != EmbedPhase::Loading || !self.is_current(instance_key) {
            return Vec::new();
        }
        debug!(reason = %failure.reason, retry_count = self.retry_count, "embed load failed");

        if self.retry_count < self.config.max_retries {
            self.phase = EmbedPhase::ErrorRetrying(self.retry_count);
            vec![EmbedEffect::ScheduleRetry {
                instance_key: self.instance_key,
                delay: self.config.retry_delay,
            }]
        } else {
            self.phase = EmbedPhase::ErrorExhausted;
            vec![EmbedEffect::ShowFallback]
        }
    }

    fn on_retry_timeout(&mut self, instance_key: u64) -> Vec<EmbedEffect> {
        let EmbedPhase::ErrorRetrying(n) = self.phase else {
            return Vec::new();
        };
        if !self.is_current(instance_key) {
            return Vec::new();
        }

        let attempt = n + 1;
        self.retry_count = attempt;
        if attempt < self.config.max_retries {
            self.phase = EmbedPhase::Loading;
            self.instance_key += 1;
            vec![EmbedEffect::RequestLoad {
                instance_key: self.instance_key,
            }]
        } else {
            self.phase = EmbedPhase::ErrorExhausted;
            vec![EmbedEffect::ShowFallback]
        }
    }

    // Manual retry always starts over with a full retry budget.
    fn on_manual_retry(&mut self) -> Vec<EmbedEffect> {
        let mut effects = Vec::with_capacity(2);
        if matches!(self.phase, EmbedPhase::ErrorRetrying(_)) {
            effects.push(EmbedEffect::CancelRetry);
        }
        self.phase = EmbedPhase::Loading;
        self.retry_count = 0;
        self.instance_key += 1;
        effects.push(EmbedEffect::RequestLoad {
            instance_key: self.instance_key,
        });
        effects
    }
}

impl Default for EmbedMachine {
    fn default() -> Self {
        Self::new(EmbedConfig::default())
    }
}
