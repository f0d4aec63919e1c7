//! Deterministic autoplay countdown.
//!
//! No timers: the host (or a test) supplies elapsed time through the engine's
//! `advance`, and the controller reports how many ticks fired. Ticks are
//! turned into ordinary `Next` intents by the engine, so autoplay shares the
//! manual navigation path.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Wait between automatic advances.
    pub delay: Duration,
    /// Autoplay is gated off below this viewport width; narrow layouts rely
    /// on native touch scrolling instead.
    pub min_viewport_width: f64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(5000),
            min_viewport_width: 768.0,
        }
    }
}

/// Countdown state. The countdown runs only while autoplay is configured on,
/// the viewport is wide enough, the pointer is not hovering, and no drag is
/// in progress; hovering or dragging freezes the remaining time rather than
/// resetting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayState {
    config: AutoplayConfig,
    enabled: bool,
    remaining: Duration,
    hovered: bool,
    dragging: bool,
    in_view: bool,
    viewport_wide_enough: bool,
}

impl AutoplayState {
    #[must_use]
    pub fn new(config: AutoplayConfig, enabled: bool) -> Self {
        Self {
            config,
            enabled,
            remaining: config.delay,
            hovered: false,
            dragging: false,
            in_view: true,
            viewport_wide_enough: true,
        }
    }

    #[must_use]
    pub fn config(self) -> AutoplayConfig {
        self.config
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled
    }

    /// Whether the countdown is currently running.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.enabled && !self.hovered && !self.dragging && self.viewport_wide_enough
    }

    #[must_use]
    pub fn in_view(self) -> bool {
        self.in_view
    }

    #[must_use]
    pub fn remaining(self) -> Duration {
        self.remaining
    }

    /// Time until the next tick would fire, when the countdown is running.
    #[must_use]
    pub fn deadline(self) -> Option<Duration> {
        if self.is_active() && !self.config.delay.is_zero() {
            Some(self.remaining)
        } else {
            None
        }
    }

    /// Consumes elapsed time and returns how many ticks fired.
    ///
    /// A tick that expires while the carousel is out of view is skipped but
    /// still re-arms the countdown, so an off-screen carousel never advances.
    pub fn advance(&mut self, mut dt: Duration) -> u32 {
        if !self.is_active() || self.config.delay.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while dt >= self.remaining {
            dt -= self.remaining;
            self.remaining = self.config.delay;
            if self.in_view {
                fired += 1;
            }
        }
        self.remaining -= dt;
        fired
    }

    /// Stop-then-restart: manual navigation calls this so autoplay never
    /// fires immediately after a user interaction.
    pub fn reset_countdown(&mut self) {
        self.remaining = self.config.delay;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport_wide_enough = viewport.width >= self.config.min_viewport_width;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_state() -> AutoplayState {
        AutoplayState::new(AutoplayConfig::default(), true)
    }

    #[test]
    fn fires_after_the_configured_delay() {
        let mut autoplay = active_state();
        assert_eq!(autoplay.advance(Duration::from_millis(4999)), 0);
        assert_eq!(autoplay.advance(Duration::from_millis(1)), 1);
        assert_eq!(autoplay.remaining(), Duration::from_millis(5000));
    }

    #[test]
    fn large_elapsed_time_fires_multiple_ticks() {
        let mut autoplay = active_state();
        assert_eq!(autoplay.advance(Duration::from_millis(10_500)), 2);
        assert_eq!(autoplay.remaining(), Duration::from_millis(4500));
    }

    #[test]
    fn hover_freezes_the_countdown() {
        let mut autoplay = active_state();
        autoplay.advance(Duration::from_millis(3000));
        autoplay.set_hovered(true);
        assert_eq!(autoplay.advance(Duration::from_secs(60)), 0);
        autoplay.set_hovered(false);
        assert_eq!(autoplay.advance(Duration::from_millis(2000)), 1);
    }

    #[test]
    fn narrow_viewport_gates_autoplay_off() {
        let mut autoplay = active_state();
        autoplay.set_viewport(Viewport::new(500.0, 900.0));
        assert!(!autoplay.is_active());
        assert_eq!(autoplay.advance(Duration::from_secs(30)), 0);

        autoplay.set_viewport(Viewport::new(768.0, 900.0));
        assert!(autoplay.is_active());
    }

    #[test]
    fn out_of_view_tick_is_skipped_but_rearms() {
        let mut autoplay = active_state();
        autoplay.set_in_view(false);
        assert!(!autoplay.in_view());
        assert_eq!(autoplay.advance(Duration::from_millis(5000)), 0);
        assert_eq!(autoplay.remaining(), Duration::from_millis(5000));

        autoplay.set_in_view(true);
        assert_eq!(autoplay.advance(Duration::from_millis(5000)), 1);
    }

    #[test]
    fn reset_countdown_restarts_the_wait() {
        let mut autoplay = active_state();
        autoplay.advance(Duration::from_millis(4900));
        autoplay.reset_countdown();
        assert_eq!(autoplay.advance(Duration::from_millis(100)), 0);
        assert_eq!(autoplay.advance(Duration::from_millis(4900)), 1);
    }

    #[test]
    fn disable_switches_the_countdown_off() {
        let mut autoplay = active_state();
        assert!(autoplay.enabled());

        autoplay.disable();
        assert!(!autoplay.enabled());
        assert!(!autoplay.is_active());
        assert_eq!(autoplay.advance(autoplay.config().delay), 0);
    }
}
