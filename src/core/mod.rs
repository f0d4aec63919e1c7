pub mod debounce;
pub mod layout;
pub mod navigation;
pub mod types;

pub use debounce::Debouncer;
pub use layout::{Breakpoint, BreakpointTable, MIN_SLIDE_WIDTH, SlidesPerView, TrackLayout};
pub use navigation::{
    ChangeCause, NavigationIntent, NavigationOutcome, NavigationPhase, Navigator,
};
pub use types::{TrackDescriptor, TrackGeometry, Viewport};
