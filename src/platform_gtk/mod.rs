use std::time::Duration;

use gtk4 as gtk;

use crate::api::CarouselEngine;
use crate::error::CarouselResult;
use crate::view::CarouselView;

/// Bridges a [`CarouselEngine`] to a GTK host.
///
/// GTK widgets report elapsed time through the frame clock in microseconds;
/// the adapter turns consecutive frame timestamps into the deltas the engine
/// consumes. Widget wiring (gesture controllers, the scrolled track child)
/// stays in the host application.
pub struct GtkCarouselAdapter<V: CarouselView> {
    engine: CarouselEngine<V>,
    orientation: gtk::Orientation,
    last_frame_time: Option<i64>,
}

impl<V: CarouselView> GtkCarouselAdapter<V> {
    #[must_use]
    pub fn new(engine: CarouselEngine<V>) -> Self {
        Self {
            engine,
            orientation: gtk::Orientation::Horizontal,
            last_frame_time: None,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> gtk::Orientation {
        self.orientation
    }

    /// Feeds one frame-clock timestamp (`gdk::FrameClock::frame_time`, in
    /// microseconds) to the engine. The first call only establishes the
    /// baseline.
    pub fn on_frame_tick(&mut self, frame_time_us: i64) -> CarouselResult<()> {
        let dt = match self.last_frame_time {
            Some(last) if frame_time_us > last => {
                Duration::from_micros((frame_time_us - last) as u64)
            }
            _ => Duration::ZERO,
        };
        self.last_frame_time = Some(frame_time_us);

        if dt.is_zero() {
            return Ok(());
        }
        self.engine.advance(dt)
    }

    #[must_use]
    pub fn engine(&self) -> &CarouselEngine<V> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine<V> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> CarouselEngine<V> {
        self.engine
    }
}
