//! Request pacing for the TMDB API.

use tokio::time::{Duration, Instant, sleep_until};

/// Spacing between consecutive requests (TMDB allows ~40 req/s).
const DEFAULT_SPACING: Duration = Duration::from_millis(25);

/// Paces outgoing requests by reserving send slots.
///
/// Each [`acquire`](Self::acquire) sleeps until the current slot opens,
/// then pushes the next slot `spacing` into the future. The first
/// acquisition goes through immediately.
#[derive(Debug)]
pub struct Throttle {
    /// Gap enforced between consecutive slots.
    spacing: Duration,
    /// Earliest instant the next request may go out.
    next_slot: Instant,
}

impl Throttle {
    /// Creates a throttle with the given spacing between requests.
    pub(crate) fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            next_slot: Instant::now(),
        }
    }

    /// Creates a throttle with the default spacing (25ms).
    pub(crate) fn default_spacing() -> Self {
        Self::new(DEFAULT_SPACING)
    }

    /// Waits for the current slot and reserves the next one.
    pub async fn acquire(&mut self) {
        sleep_until(self.next_slot).await;
        let now = Instant::now();
        self.next_slot = now.checked_add(self.spacing).unwrap_or(now);
    }
}
