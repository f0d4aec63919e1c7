use std::time::Duration;

/// Trailing-edge debouncer driven by caller-supplied elapsed time.
///
/// Each `submit` replaces the pending value and restarts the window; the
/// value is released by `advance` once a full window passes with no further
/// submissions. Used to coalesce resize notifications.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    remaining: Duration,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            remaining: Duration::ZERO,
        }
    }

    pub fn submit(&mut self, value: T) {
        self.pending = Some(value);
        self.remaining = self.window;
    }

    /// Consumes elapsed time; returns the pending value when its window has
    /// fully elapsed.
    pub fn advance(&mut self, dt: Duration) -> Option<T> {
        self.pending.as_ref()?;

        if dt < self.remaining {
            self.remaining -= dt;
            return None;
        }

        self.remaining = Duration::ZERO;
        self.pending.take()
    }

    /// Time left until the pending value fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|_| self.remaining)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.remaining = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_restarts_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.submit(1);
        assert_eq!(debouncer.advance(Duration::from_millis(200)), None);

        debouncer.submit(2);
        assert_eq!(debouncer.advance(Duration::from_millis(200)), None);
        assert_eq!(debouncer.advance(Duration::from_millis(50)), Some(2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn fires_exactly_at_the_window_edge() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        debouncer.submit("viewport");
        assert_eq!(debouncer.advance(Duration::from_millis(250)), Some("viewport"));
        assert_eq!(debouncer.advance(Duration::from_millis(250)), None);
    }

    #[test]
    fn zero_window_fires_on_next_advance() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.submit(7);
        assert_eq!(debouncer.advance(Duration::ZERO), Some(7));
    }

    #[test]
    fn clear_discards_pending_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        debouncer.submit(3);
        debouncer.clear();
        assert_eq!(debouncer.advance(Duration::from_secs(1)), None);
    }
}
