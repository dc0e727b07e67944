//! The timed generation trigger.
//!
//! "Generate Website" produces no artifact; it simulates latency by
//! flipping pending to completed after a fixed delay. The timer task is
//! scoped to the generator and aborted on drop so a torn-down session
//! is never mutated by a stale callback.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

/// Delay before generation reports completion.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(3000);

const IDLE: u8 = 0;
const PENDING: u8 = 1;
const COMPLETED: u8 = 2;

/// Where the generation affordance currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Idle,
    Pending,
    Completed,
}

/// One-shot generation trigger.
#[derive(Debug)]
pub struct Generator {
    status: Arc<AtomicU8>,
    delay: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Generator {
    pub fn new(delay: Duration) -> Self {
        Self {
            status: Arc::new(AtomicU8::new(IDLE)),
            delay,
            handle: Mutex::new(None),
        }
    }

    pub fn status(&self) -> GenerationStatus {
        match self.status.load(Ordering::SeqCst) {
            PENDING => GenerationStatus::Pending,
            COMPLETED => GenerationStatus::Completed,
            _ => GenerationStatus::Idle,
        }
    }

    /// Start the timer. Returns false without effect when already
    /// pending or completed; completion happens exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> bool {
        if self
            .status
            .compare_exchange(IDLE, PENDING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("generation already started, ignoring trigger");
            return false;
        }

        let status = Arc::clone(&self.status);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            status.store(COMPLETED, Ordering::SeqCst);
            tracing::info!("generation simulation complete");
        });

        if let Ok(mut slot) = self.handle.lock() {
            *slot = Some(handle);
        }
        true
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.handle.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let generator = Generator::new(Duration::from_millis(3000));
        assert_eq!(generator.status(), GenerationStatus::Idle);

        assert!(generator.start());
        assert_eq!(generator.status(), GenerationStatus::Pending);

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert_eq!(generator.status(), GenerationStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_while_pending_is_ignored() {
        let generator = Generator::new(Duration::from_millis(3000));

        assert!(generator.start());
        assert!(!generator.start());
        assert_eq!(generator.status(), GenerationStatus::Pending);

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert_eq!(generator.status(), GenerationStatus::Completed);
        assert!(!generator.start());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_timer() {
        let generator = Generator::new(Duration::from_millis(3000));
        generator.start();
        let status = Arc::clone(&generator.status);

        drop(generator);
        tokio::time::sleep(Duration::from_millis(5000)).await;

        // The aborted task never flipped the flag.
        assert_eq!(status.load(Ordering::SeqCst), PENDING);
    }
}
