use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::autoplay::AutoplayConfig;
use crate::core::{SlidesPerView, TrackGeometry};
use crate::error::{CarouselError, CarouselResult};
use crate::interaction::{DragConfig, SwipeDirection};

mod engine;
mod snapshot;

pub use engine::CarouselEngine;
pub use snapshot::EngineSnapshot;

/// Public engine configuration.
///
/// Serializable so host applications can load carousel setups from their own
/// config files; every field carries a serde default so partial documents
/// deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselOptions {
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_autoplay_delay")]
    pub autoplay_delay: Duration,
    /// Wrap-around navigation from the exact boundaries.
    #[serde(default, rename = "loop")]
    pub looping: bool,
    /// Minimum horizontal drag distance, in px, for a release to commit.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default)]
    pub slides_to_show: SlidesPerView,
    /// Inter-slide gap override in px; `None` keeps the measured gap.
    #[serde(default)]
    pub gap: Option<f64>,
    #[serde(default = "default_transition_duration")]
    pub transition_duration: Duration,
    #[serde(default)]
    pub swipe_direction: SwipeDirection,
    /// Mirror touch drags into live offsets; mouse drags always follow.
    #[serde(default)]
    pub touch_live_follow: bool,
    /// Autoplay only ticks while the viewport is at least this wide.
    #[serde(default = "default_autoplay_min_viewport_width")]
    pub autoplay_min_viewport_width: f64,
    /// When autoplay reaches the last position without looping, jump back to
    /// the first slide instead of stalling there.
    #[serde(default = "default_true")]
    pub autoplay_rewind: bool,
    /// Manual or swipe navigation permanently disables autoplay.
    #[serde(default)]
    pub autoplay_stop_on_interaction: bool,
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce: Duration,
    /// Suppresses animated offsets and the transition latch entirely.
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_autoplay_delay() -> Duration {
    Duration::from_millis(5000)
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_transition_duration() -> Duration {
    Duration::from_millis(400)
}

fn default_autoplay_min_viewport_width() -> f64 {
    768.0
}

fn default_resize_debounce() -> Duration {
    Duration::from_millis(250)
}

fn default_true() -> bool {
    true
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_delay: default_autoplay_delay(),
            looping: false,
            swipe_threshold: default_swipe_threshold(),
            slides_to_show: SlidesPerView::default(),
            gap: None,
            transition_duration: default_transition_duration(),
            swipe_direction: SwipeDirection::default(),
            touch_live_follow: false,
            autoplay_min_viewport_width: default_autoplay_min_viewport_width(),
            autoplay_rewind: true,
            autoplay_stop_on_interaction: false,
            resize_debounce: default_resize_debounce(),
            reduced_motion: false,
        }
    }
}

impl CarouselOptions {
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn with_autoplay_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    #[must_use]
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_slides_to_show(mut self, mode: SlidesPerView) -> Self {
        self.slides_to_show = mode;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.autoplay_delay.is_zero() {
            return Err(CarouselError::InvalidOptions(
                "autoplay_delay must be greater than zero".to_owned(),
            ));
        }

        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(CarouselError::InvalidOptions(format!(
                "swipe_threshold must be finite and positive, got {}",
                self.swipe_threshold
            )));
        }

        if let Some(gap) = self.gap {
            if !gap.is_finite() || gap < 0.0 {
                return Err(CarouselError::InvalidOptions(format!(
                    "gap must be finite and non-negative, got {gap}"
                )));
            }
        }

        if !self.autoplay_min_viewport_width.is_finite() || self.autoplay_min_viewport_width < 0.0 {
            return Err(CarouselError::InvalidOptions(format!(
                "autoplay_min_viewport_width must be finite and non-negative, got {}",
                self.autoplay_min_viewport_width
            )));
        }

        self.slides_to_show.validate()
    }

    /// Effective transition length: zero under reduced motion.
    #[must_use]
    pub fn effective_transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.transition_duration
        }
    }

    /// Applies the configured gap override to host-measured geometry.
    #[must_use]
    pub fn resolve_geometry(&self, measured: TrackGeometry) -> TrackGeometry {
        match self.gap {
            Some(gap) => TrackGeometry::new(measured.container_width, measured.slide_width, gap),
            None => measured,
        }
    }

    #[must_use]
    pub(crate) fn drag_config(&self) -> DragConfig {
        DragConfig {
            swipe_threshold: self.swipe_threshold,
            direction: self.swipe_direction,
            touch_live_follow: self.touch_live_follow,
        }
    }

    #[must_use]
    pub(crate) fn autoplay_config(&self) -> AutoplayConfig {
        AutoplayConfig {
            delay: self.autoplay_delay,
            min_viewport_width: self.autoplay_min_viewport_width,
        }
    }
}
