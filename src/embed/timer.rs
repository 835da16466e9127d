//! Single-shot, cancellable retry timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to at most one pending delayed callback.
///
/// Arming replaces (and aborts) any previous callback. Dropping the handle
/// cancels the pending callback, so a timer never outlives its owner.
#[derive(Debug, Default)]
pub struct RetryTimer {
    handle: Option<JoinHandle<()>>,
}

impl RetryTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `fire` once after `delay`, replacing any pending callback.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F, Fut>(&mut self, delay: Duration, fire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire().await;
        }));
    }

    /// Abort the pending callback, if any.
    ///
    /// Returns `true` if a callback was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    /// Whether a callback is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for RetryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter_timer(timer: &mut RetryTimer, delay: Duration, hits: &Arc<AtomicUsize>) {
        let hits = Arc::clone(hits);
        timer.arm(delay, move || async move {
            hits.fetch_add(1, Ordering::SeqCst);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut timer = RetryTimer::new();
        counter_timer(&mut timer, Duration::from_millis(2000), &hits);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut timer = RetryTimer::new();
        counter_timer(&mut timer, Duration::from_millis(2000), &hits);

        assert!(timer.cancel());
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!timer.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_pending() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut timer = RetryTimer::new();
        counter_timer(&mut timer, Duration::from_millis(2000), &hits);
        counter_timer(&mut timer, Duration::from_millis(2000), &hits);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let hits = Arc::new(AtomicUsize::new(0));
        {
            let mut timer = RetryTimer::new();
            counter_timer(&mut timer, Duration::from_millis(2000), &hits);
        }
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
