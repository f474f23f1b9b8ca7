//! Input coalescing for search-as-you-type consumers.
//!
//! A [`Debouncer`] releases a submitted value only after no newer value has
//! arrived for a quiet period ([`DEBOUNCE_DELAY`] by default). Rapid
//! successive submissions collapse into the most recent one, so a consumer
//! driving the search endpoints issues one fetch per settled input instead
//! of one per keystroke.

use std::time::Duration;

use tokio::sync::mpsc;

/// Quiet period before a submitted value is released.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Sending half: submit raw input values as they change.
#[derive(Clone)]
pub struct DebounceHandle<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> DebounceHandle<T> {
    /// Submit a new value, superseding any value still inside the quiet
    /// period. Returns `false` if the receiving half has been dropped.
    pub fn submit(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Receiving half: yields only values that stayed stable for the delay.
pub struct Debouncer<T> {
    rx: mpsc::UnboundedReceiver<T>,
    delay: Duration,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the default [`DEBOUNCE_DELAY`].
    pub fn new() -> (DebounceHandle<T>, Self) {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    /// Create a debouncer with a custom quiet period.
    pub fn with_delay(delay: Duration) -> (DebounceHandle<T>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DebounceHandle { tx }, Self { rx, delay })
    }

    /// Wait for the next settled value.
    ///
    /// Blocks until at least one value has been submitted, then keeps
    /// replacing it while newer values arrive within the quiet period.
    /// Returns `None` once all handles are dropped and the channel is
    /// drained.
    pub async fn next(&mut self) -> Option<T> {
        let mut current = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.delay, self.rx.recv()).await {
                // A newer value arrived inside the quiet period.
                Ok(Some(newer)) => current = newer,
                // Channel closed: flush the value we already hold.
                Ok(None) => return Some(current),
                // Quiet period elapsed.
                Err(_) => return Some(current),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_submissions_collapse_to_latest() {
        let (handle, mut debouncer) = Debouncer::new();
        handle.submit("d");
        handle.submit("di");
        handle.submit("director");

        assert_eq!(debouncer.next().await, Some("director"));
    }

    #[tokio::test(start_paused = true)]
    async fn values_separated_by_quiet_period_all_settle() {
        let (handle, mut debouncer) = Debouncer::with_delay(Duration::from_millis(300));

        handle.submit("camera");
        assert_eq!(debouncer.next().await, Some("camera"));

        handle.submit("sound");
        assert_eq!(debouncer.next().await, Some("sound"));
    }

    #[tokio::test(start_paused = true)]
    async fn submission_inside_quiet_period_supersedes() {
        let (handle, mut debouncer) = Debouncer::with_delay(Duration::from_millis(300));
        handle.submit("cam");

        let waiter = tokio::spawn(async move { debouncer.next().await });

        // Let the debouncer pick up "cam" and start its quiet period, then
        // supersede it before the 300ms elapse.
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.submit("camera");

        assert_eq!(waiter.await.unwrap(), Some("camera"));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_flushes_pending_value_then_ends() {
        let (handle, mut debouncer) = Debouncer::<&str>::new();
        handle.submit("last");
        drop(handle);

        assert_eq!(debouncer.next().await, Some("last"));
        assert_eq!(debouncer.next().await, None);
    }
}
