use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Mapping from drag direction to navigation direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Content follows the pointer: dragging left advances forward.
    #[default]
    Natural,
    /// Reversed mapping: dragging left steps backward.
    Inverted,
}

/// Tuning for the drag/swipe decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Minimum |delta| in px for a drag to commit as a navigation step.
    /// This sets the accidental-swipe false-positive rate.
    pub swipe_threshold: f64,
    pub direction: SwipeDirection,
    /// Live-follow visual feedback for touch drags. Off by default: touch
    /// hosts usually rely on native scrolling and only want the
    /// end-of-gesture decision.
    pub touch_live_follow: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            direction: SwipeDirection::Natural,
            touch_live_follow: false,
        }
    }
}

/// End-of-gesture decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// Threshold met: step one page in the mapped direction.
    Commit { forward: bool, delta: f64 },
    /// Below threshold: return to the current index's canonical offset.
    SnapBack { delta: f64 },
}

/// Transient per-gesture state; exists only between pointer-down and
/// pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub origin_x: f64,
    pub last_x: f64,
    pub baseline_offset: f64,
    pub pointer: PointerKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    config: DragConfig,
    drag: Option<DragState>,
    hovering: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            config: DragConfig::default(),
            drag: None,
            hovering: false,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            drag: None,
            hovering: false,
        }
    }

    #[must_use]
    pub fn config(self) -> DragConfig {
        self.config
    }

    #[must_use]
    pub fn hovering(self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn drag_state(self) -> Option<DragState> {
        self.drag
    }

    #[must_use]
    pub fn drag_delta(self) -> Option<f64> {
        self.drag.map(|drag| drag.last_x - drag.origin_x)
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovering = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
    }

    pub fn on_drag_start(&mut self, x: f64, baseline_offset: f64, pointer: PointerKind) {
        self.drag = Some(DragState {
            origin_x: x,
            last_x: x,
            baseline_offset,
            pointer,
        });
    }

    /// Advances the gesture and returns the live visual offset when the
    /// pointer path follows the drag (mouse always; touch only when
    /// configured). No index state changes here.
    pub fn on_drag_move(&mut self, x: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        drag.last_x = x;

        let follows = match drag.pointer {
            PointerKind::Mouse => true,
            PointerKind::Touch => self.config.touch_live_follow,
        };
        if !follows {
            return None;
        }

        let delta = drag.last_x - drag.origin_x;
        Some(drag.baseline_offset - delta)
    }

    /// Ends the gesture and maps the accumulated delta to an outcome.
    /// Returns `None` when no drag was in progress.
    pub fn on_drag_end(&mut self, x: f64) -> Option<GestureOutcome> {
        let drag = self.drag.take()?;
        let delta = x - drag.origin_x;

        if delta.abs() < self.config.swipe_threshold {
            return Some(GestureOutcome::SnapBack { delta });
        }

        let forward = match self.config.direction {
            SwipeDirection::Natural => delta < 0.0,
            SwipeDirection::Inverted => delta > 0.0,
        };
        Some(GestureOutcome::Commit { forward, delta })
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}
