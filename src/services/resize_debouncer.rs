// src/services/resize_debouncer.rs
// Collapses bursts of window resize events into one surface resize.
// Owned by whoever hosts the renderer; time is passed in so it can be driven by tests.

use std::time::{Duration, Instant};

use crate::models::geometry::SurfaceSize;

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(SurfaceSize, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Records the latest measurement and restarts the delay.
    pub fn notify(&mut self, size: SurfaceSize, now: Instant) {
        self.pending = Some((size, now));
    }

    /// Yields the most recent size once `delay` has passed since the last notify.
    pub fn poll(&mut self, now: Instant) -> Option<SurfaceSize> {
        match self.pending {
            Some((size, at)) if now.saturating_duration_since(at) >= self.delay => {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_size() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::from_millis(160);

        debouncer.notify(SurfaceSize::new(100, 100), start);
        debouncer.notify(SurfaceSize::new(200, 150), start + Duration::from_millis(100));
        assert_eq!(debouncer.poll(start + Duration::from_millis(200)), None);

        let settled = start + Duration::from_millis(260);
        assert_eq!(debouncer.poll(settled), Some(SurfaceSize::new(200, 150)));
        assert_eq!(debouncer.poll(settled), None);
        assert_eq!(debouncer.poll(settled + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_zero_delay_is_immediate() {
        let now = Instant::now();
        let mut debouncer = ResizeDebouncer::from_millis(0);
        debouncer.notify(SurfaceSize::new(640, 480), now);
        assert_eq!(debouncer.poll(now), Some(SurfaceSize::new(640, 480)));
    }

    #[test]
    fn test_nothing_pending() {
        let mut debouncer = ResizeDebouncer::from_millis(160);
        assert_eq!(debouncer.poll(Instant::now()), None);
    }
}
