use serde::{Deserialize, Serialize};

use crate::core::layout::TrackLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationPhase {
    Idle,
    Transitioning,
}

/// A navigation request, before clamping/wrapping against the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationIntent {
    Next,
    Prev,
    GoToSlide(usize),
    GoToPage(usize),
}

/// What triggered a slide change, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCause {
    Manual,
    Autoplay,
    Swipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationOutcome {
    pub from: usize,
    pub to: usize,
    pub wrapped: bool,
}

/// Index state machine: `Idle` accepts intents, `Transitioning` drops them.
///
/// Stepping granularity is one page (`slides_per_view` slides) per intent.
/// Wrapping only happens from the exact boundary; overshooting targets clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    phase: NavigationPhase,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: 0,
            phase: NavigationPhase::Idle,
        }
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(self) -> usize {
        self.current
    }

    #[must_use]
    pub fn phase(self) -> NavigationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(self) -> bool {
        self.phase == NavigationPhase::Transitioning
    }

    /// Resolves an intent against the layout.
    ///
    /// Returns `None` when the intent is dropped (a transition is in
    /// flight) or when it leaves the index unchanged (boundary no-op).
    /// On `Some`, the index has moved and the machine is latched in
    /// `Transitioning` until [`Navigator::finish_transition`].
    pub fn request(
        &mut self,
        intent: NavigationIntent,
        layout: TrackLayout,
        looping: bool,
    ) -> Option<NavigationOutcome> {
        if layout.is_empty() || self.phase == NavigationPhase::Transitioning {
            return None;
        }

        let max = layout.max_index();
        let step = layout.slides_per_view();
        let mut wrapped = false;

        let target = match intent {
            NavigationIntent::Next => {
                if self.current >= max {
                    if !looping {
                        return None;
                    }
                    wrapped = true;
                    0
                } else {
                    layout.clamp_index(self.current + step)
                }
            }
            NavigationIntent::Prev => {
                if self.current == 0 {
                    if !looping {
                        return None;
                    }
                    wrapped = true;
                    max
                } else {
                    self.current.saturating_sub(step)
                }
            }
            NavigationIntent::GoToSlide(index) => layout.clamp_index(index),
            NavigationIntent::GoToPage(page) => layout.first_index_of_page(page),
        };

        if target == self.current {
            return None;
        }

        let outcome = NavigationOutcome {
            from: self.current,
            to: target,
            wrapped,
        };
        self.current = target;
        self.phase = NavigationPhase::Transitioning;
        Some(outcome)
    }

    /// Re-enables intent processing. Idempotent.
    pub fn finish_transition(&mut self) {
        self.phase = NavigationPhase::Idle;
    }

    /// Re-clamps the index after a layout change without animating or
    /// latching. Returns true when the index actually moved.
    pub fn force_into(&mut self, layout: TrackLayout) -> bool {
        let clamped = layout.clamp_index(self.current);
        let moved = clamped != self.current;
        self.current = clamped;
        moved
    }
}
