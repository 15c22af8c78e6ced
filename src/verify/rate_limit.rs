//! Fixed-interval gate for verification requests
//!
//! The verification provider limits request rates, so every attempt is
//! followed by a fixed pause, whatever its outcome. The pause runs from the
//! end of one attempt to the start of the next.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Enforces a minimum pause between the end of one attempt and the next
#[derive(Debug, Clone)]
pub struct RateGate {
    interval: Duration,
    last_finished: Arc<Mutex<Option<Instant>>>,
}

impl RateGate {
    /// Creates a gate pausing `interval` after each attempt
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_finished: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a gate from a millisecond interval (0 disables waiting)
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Returns the configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until `interval` has passed since the previous attempt finished
    pub async fn acquire(&self) {
        let last = *self.last_finished.lock().await;

        if let Some(previous) = last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                tracing::trace!("Rate gate waiting {:?}", wait);
                sleep(wait).await;
            }
        }
    }

    /// Marks the current attempt as finished; call on every outcome
    pub async fn finish(&self) {
        *self.last_finished.lock().await = Some(Instant::now());
    }
}
