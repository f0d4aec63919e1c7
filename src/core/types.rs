use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// Windowing-environment viewport, in CSS-style pixels.
///
/// Only the width participates in layout decisions (breakpoints, autoplay
/// gating); the height is carried so hosts can report allocations verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height >= 0.0
    }
}

/// Host-measured track metrics: the container's inner width, the rendered
/// width of one slide, and the inter-slide gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    pub container_width: f64,
    pub slide_width: f64,
    pub gap: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(container_width: f64, slide_width: f64, gap: f64) -> Self {
        Self {
            container_width,
            slide_width,
            gap,
        }
    }

    pub fn validate(self) -> CarouselResult<Self> {
        if !self.container_width.is_finite()
            || !self.slide_width.is_finite()
            || self.container_width < 0.0
            || self.slide_width < 0.0
        {
            return Err(CarouselError::InvalidGeometry {
                container_width: self.container_width,
                slide_width: self.slide_width,
            });
        }

        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(CarouselError::InvalidGeometry {
                container_width: self.container_width,
                slide_width: self.slide_width,
            });
        }

        Ok(self)
    }
}

/// Everything the host hands over at mount time.
///
/// All references are explicit; the engine never discovers controls by
/// traversing neighboring structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub slide_count: usize,
    pub geometry: TrackGeometry,
    pub viewport: Viewport,
}

impl TrackDescriptor {
    #[must_use]
    pub fn new(slide_count: usize, geometry: TrackGeometry, viewport: Viewport) -> Self {
        Self {
            slide_count,
            geometry,
            viewport,
        }
    }
}
