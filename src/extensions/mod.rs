//! Optional collaborator-facing surfaces.
//!
//! Keep extensions observational: they read engine state through snapshots
//! and never reach into core paths.

pub mod observers;

pub use observers::{CarouselEvent, CarouselObserver, ObserverContext};
