use serde::{Deserialize, Serialize};

use crate::core::{ChangeCause, Viewport};
use crate::interaction::PointerKind;

/// Read-only engine snapshot passed with every observer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub viewport: Viewport,
    pub current_index: usize,
    pub current_page: usize,
    pub slides_per_view: usize,
    pub page_count: usize,
    pub max_index: usize,
    pub is_transitioning: bool,
    pub autoplay_active: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CarouselEvent {
    SlideChanged {
        from: usize,
        to: usize,
        cause: ChangeCause,
    },
    LayoutChanged {
        slides_per_view: usize,
        page_count: usize,
    },
    DragStarted {
        pointer: PointerKind,
    },
    DragEnded {
        committed: bool,
    },
    Destroyed,
}

/// Notification hook for analytics-style collaborators.
///
/// Observers can watch slide changes (with their triggering cause) and read
/// engine context without mutating the engine; the engine itself never logs
/// analytics. Re-registering an id replaces the previous observer.
pub trait CarouselObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: CarouselEvent, context: ObserverContext);
}
