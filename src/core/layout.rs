use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::types::{TrackGeometry, Viewport};
use crate::error::{CarouselError, CarouselResult};

/// Floor for the measured slide width so stride math never divides by zero
/// when the host reports an unrendered (zero-width) slide.
pub const MIN_SLIDE_WIDTH: f64 = 1.0;

/// One row of a viewport-width breakpoint table: viewports at least
/// `min_width` wide show `slides` slides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: f64,
    pub slides: usize,
}

impl Breakpoint {
    #[must_use]
    pub fn new(min_width: f64, slides: usize) -> Self {
        Self { min_width, slides }
    }
}

/// Viewport-width breakpoint table with a fallback of one slide below the
/// narrowest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    entries: SmallVec<[Breakpoint; 4]>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            entries: smallvec![Breakpoint::new(1024.0, 3), Breakpoint::new(768.0, 2)],
        }
    }
}

impl BreakpointTable {
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> CarouselResult<Self> {
        let table = Self {
            entries: entries.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        for entry in &self.entries {
            if !entry.min_width.is_finite() || entry.min_width < 0.0 {
                return Err(CarouselError::InvalidOptions(format!(
                    "breakpoint min_width must be finite and >= 0, got {}",
                    entry.min_width
                )));
            }
            if entry.slides == 0 {
                return Err(CarouselError::InvalidOptions(
                    "breakpoint slide count must be >= 1".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Resolves the widest matching entry; 1 when nothing matches.
    #[must_use]
    pub fn resolve(&self, viewport_width: f64) -> usize {
        self.entries
            .iter()
            .filter(|entry| viewport_width >= entry.min_width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .map_or(1, |entry| entry.slides)
    }

    #[must_use]
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }
}

/// How many slides the track shows at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlidesPerView {
    /// Measured: as many slides as fit the container width.
    Auto,
    /// Constant count regardless of width.
    Fixed(usize),
    /// Resolved from the windowing viewport via a breakpoint table.
    Breakpoints(BreakpointTable),
}

impl Default for SlidesPerView {
    fn default() -> Self {
        Self::Auto
    }
}

impl SlidesPerView {
    pub fn validate(&self) -> CarouselResult<()> {
        match self {
            Self::Auto => Ok(()),
            Self::Fixed(n) => {
                if *n == 0 {
                    return Err(CarouselError::InvalidOptions(
                        "fixed slides_to_show must be >= 1".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::Breakpoints(table) => table.validate(),
        }
    }
}

/// Derived layout for one track: visible-slide count, per-slide stride, and
/// the navigable index/page ranges.
///
/// Recomputed on mount and after every debounced resize; everything else
/// reads from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    total_slides: usize,
    slides_per_view: usize,
    stride: f64,
    max_index: usize,
    page_count: usize,
}

impl TrackLayout {
    /// Derives the layout from host-measured geometry.
    ///
    /// Zero slides produce the inert layout (`slides_per_view = 1`,
    /// `max_index = 0`, `page_count = 0`).
    #[must_use]
    pub fn compute(
        geometry: TrackGeometry,
        viewport: Viewport,
        total_slides: usize,
        mode: &SlidesPerView,
    ) -> Self {
        let slide_width = geometry.slide_width.max(MIN_SLIDE_WIDTH);
        let gap = geometry.gap.max(0.0);
        let stride = slide_width + gap;

        let slides_per_view = match mode {
            SlidesPerView::Auto => {
                let fits = ((geometry.container_width.max(0.0) + gap) / stride).floor() as usize;
                fits.max(1)
            }
            SlidesPerView::Fixed(n) => (*n).max(1),
            SlidesPerView::Breakpoints(table) => table.resolve(viewport.width).max(1),
        };

        let max_index = total_slides.saturating_sub(slides_per_view);
        let page_count = if total_slides == 0 {
            0
        } else {
            total_slides.div_ceil(slides_per_view)
        };

        Self {
            total_slides,
            slides_per_view,
            stride,
            max_index,
            page_count,
        }
    }

    #[must_use]
    pub fn total_slides(self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn slides_per_view(self) -> usize {
        self.slides_per_view
    }

    /// Pixels the track moves to advance by one slide.
    #[must_use]
    pub fn stride(self) -> f64 {
        self.stride
    }

    #[must_use]
    pub fn max_index(self) -> usize {
        self.max_index
    }

    #[must_use]
    pub fn page_count(self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.total_slides == 0
    }

    #[must_use]
    pub fn clamp_index(self, index: usize) -> usize {
        index.min(self.max_index)
    }

    /// Canonical scrolled distance for a slide index.
    #[must_use]
    pub fn offset_for(self, index: usize) -> f64 {
        self.clamp_index(index) as f64 * self.stride
    }

    #[must_use]
    pub fn max_offset(self) -> f64 {
        self.offset_for(self.max_index)
    }

    /// Indicator page owning `index`.
    #[must_use]
    pub fn page_of(self, index: usize) -> usize {
        self.clamp_index(index) / self.slides_per_view
    }

    /// First slide index of an indicator page, clamped into range.
    #[must_use]
    pub fn first_index_of_page(self, page: usize) -> usize {
        self.clamp_index(page.saturating_mul(self.slides_per_view))
    }
}
