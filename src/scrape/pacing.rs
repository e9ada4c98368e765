//! Page-boundary pacing
//!
//! A fixed minimum-interval policy applied once per page transition. This is
//! a crude fixed-rate limiter, not adaptive: it exists to keep the request
//! rate low enough to avoid an IP ban, nothing more. Tests inject a
//! zero-delay pacer.

use std::time::Duration;

/// Default pause between page fetches
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Fixed-interval pacing policy for page transitions
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer with the given pause per page transition
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a pacer from a millisecond delay, 0 meaning no pause
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// A pacer that never pauses (for tests)
    pub fn zero() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured pause per page transition
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pauses once before the next page fetch
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }

        tracing::debug!("Pacing for {:?} before next page fetch", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_DELAY)
    }
}
