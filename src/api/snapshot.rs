use serde::{Deserialize, Serialize};

use crate::core::{NavigationPhase, SlidesPerView, TrackGeometry, Viewport};
use crate::error::{CarouselError, CarouselResult};

/// Point-in-time engine state for diagnostics and session persistence.
///
/// Captures everything needed to reconstruct what the engine was showing
/// without holding a reference to the engine or its view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub geometry: TrackGeometry,
    pub total_slides: usize,
    pub slides_per_view: usize,
    pub stride: f64,
    pub current_index: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub max_index: usize,
    pub phase: NavigationPhase,
    pub autoplay_active: bool,
    pub destroyed: bool,
    pub mode: SlidesPerView,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> CarouselResult<String> {
        serde_json::to_string(self)
            .map_err(|err| CarouselError::SnapshotEncoding(err.to_string()))
    }
}
