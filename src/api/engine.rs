use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::autoplay::AutoplayState;
use crate::core::{
    ChangeCause, Debouncer, NavigationIntent, Navigator, TrackDescriptor, TrackGeometry,
    TrackLayout, Viewport,
};
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{CarouselEvent, CarouselObserver, ObserverContext};
use crate::interaction::{ArrowKey, GestureOutcome, InteractionState, PointerKind};
use crate::view::{CarouselView, ViewCommand};

use super::CarouselOptions;
use super::snapshot::EngineSnapshot;

/// Main orchestration facade consumed by host applications.
///
/// `CarouselEngine` coordinates track layout, navigation, gestures, autoplay,
/// and resize handling, and pushes every visual consequence through the
/// [`CarouselView`] it owns. It keeps no timers of its own: hosts report
/// elapsed time through [`CarouselEngine::advance`] and the engine services
/// whatever countdowns expired, which makes every behavior reproducible in
/// tests.
pub struct CarouselEngine<V: CarouselView> {
    view: V,
    options: CarouselOptions,
    viewport: Viewport,
    geometry: TrackGeometry,
    total_slides: usize,
    layout: TrackLayout,
    navigator: Navigator,
    interaction: InteractionState,
    autoplay: AutoplayState,
    resize_debounce: Debouncer<(Viewport, TrackGeometry)>,
    transition_remaining: Duration,
    observers: IndexMap<String, Box<dyn CarouselObserver>>,
    last_nav_enabled: Option<(bool, bool)>,
    destroyed: bool,
}

impl<V: CarouselView> CarouselEngine<V> {
    /// Builds an engine over a measured track and paints the initial state.
    ///
    /// A track with zero slides mounts inert: the engine exists, but no view
    /// command is ever issued for it.
    pub fn mount(
        view: V,
        descriptor: TrackDescriptor,
        options: CarouselOptions,
    ) -> CarouselResult<Self> {
        options.validate()?;

        if !descriptor.viewport.is_valid() {
            return Err(CarouselError::InvalidViewport {
                width: descriptor.viewport.width,
                height: descriptor.viewport.height,
            });
        }

        let geometry = options.resolve_geometry(descriptor.geometry).validate()?;
        let layout = TrackLayout::compute(
            geometry,
            descriptor.viewport,
            descriptor.slide_count,
            &options.slides_to_show,
        );

        let mut autoplay =
            AutoplayState::new(options.autoplay_config(), options.autoplay && !layout.is_empty());
        autoplay.set_viewport(descriptor.viewport);

        let mut engine = Self {
            view,
            interaction: InteractionState::new(options.drag_config()),
            resize_debounce: Debouncer::new(options.resize_debounce),
            options,
            viewport: descriptor.viewport,
            geometry,
            total_slides: descriptor.slide_count,
            layout,
            navigator: Navigator::new(),
            autoplay,
            transition_remaining: Duration::ZERO,
            observers: IndexMap::new(),
            last_nav_enabled: None,
            destroyed: false,
        };

        if engine.layout.is_empty() {
            warn!("carousel mounted with zero slides, engine is inert");
            return Ok(engine);
        }

        engine.view.apply(ViewCommand::SetOffset {
            offset: 0.0,
            animate: false,
        })?;
        engine.view.apply(ViewCommand::RebuildIndicators {
            page_count: engine.layout.page_count(),
        })?;
        engine
            .view
            .apply(ViewCommand::HighlightIndicator { page: 0 })?;
        engine.sync_nav_enabled()?;

        debug!(
            slides = engine.total_slides,
            slides_per_view = engine.layout.slides_per_view(),
            page_count = engine.layout.page_count(),
            "carousel mounted"
        );
        Ok(engine)
    }

    /// Mounts when the track exists, logs and skips when it does not.
    ///
    /// Hosts with optional carousel sections call this instead of treating a
    /// missing track as an error.
    pub fn mount_or_skip(
        view: V,
        descriptor: Option<TrackDescriptor>,
        options: CarouselOptions,
    ) -> Option<Self> {
        let Some(descriptor) = descriptor else {
            warn!("carousel mount skipped, track not present");
            return None;
        };
        match Self::mount(view, descriptor, options) {
            Ok(engine) => Some(engine),
            Err(err) => {
                warn!(error = %err, "carousel mount skipped");
                None
            }
        }
    }

    /// Resolves a navigation intent and applies its view effects.
    ///
    /// Returns `Ok(true)` when the index moved. Intents arriving while a
    /// transition is in flight are dropped, not queued.
    pub fn navigate(
        &mut self,
        intent: NavigationIntent,
        cause: ChangeCause,
    ) -> CarouselResult<bool> {
        if self.destroyed {
            return Ok(false);
        }

        let from_page = self.layout.page_of(self.navigator.current_index());
        let Some(outcome) = self
            .navigator
            .request(intent, self.layout, self.options.looping)
        else {
            trace!(?intent, "navigation intent dropped");
            return Ok(false);
        };

        let duration = self.options.effective_transition();
        let animate = !duration.is_zero();
        self.transition_remaining = duration;

        self.view.apply(ViewCommand::SetOffset {
            offset: self.layout.offset_for(outcome.to),
            animate,
        })?;

        let to_page = self.layout.page_of(outcome.to);
        if to_page != from_page {
            self.view
                .apply(ViewCommand::HighlightIndicator { page: to_page })?;
        }
        self.sync_nav_enabled()?;

        if !animate {
            self.navigator.finish_transition();
        }

        if cause != ChangeCause::Autoplay {
            if self.options.autoplay_stop_on_interaction {
                self.autoplay.disable();
            }
            self.autoplay.reset_countdown();
        }

        self.emit(CarouselEvent::SlideChanged {
            from: outcome.from,
            to: outcome.to,
            cause,
        });
        Ok(true)
    }

    pub fn next(&mut self) -> CarouselResult<bool> {
        self.navigate(NavigationIntent::Next, ChangeCause::Manual)
    }

    pub fn prev(&mut self) -> CarouselResult<bool> {
        self.navigate(NavigationIntent::Prev, ChangeCause::Manual)
    }

    pub fn go_to_slide(&mut self, index: usize) -> CarouselResult<bool> {
        self.navigate(NavigationIntent::GoToSlide(index), ChangeCause::Manual)
    }

    pub fn go_to_page(&mut self, page: usize) -> CarouselResult<bool> {
        self.navigate(NavigationIntent::GoToPage(page), ChangeCause::Manual)
    }

    /// Keyboard navigation: left steps back, right steps forward.
    pub fn key_arrow(&mut self, key: ArrowKey) -> CarouselResult<bool> {
        match key {
            ArrowKey::Left => self.prev(),
            ArrowKey::Right => self.next(),
        }
    }

    /// Pointer entered the track area. Freezes the autoplay countdown.
    pub fn pointer_enter(&mut self) {
        if self.destroyed {
            return;
        }
        self.interaction.on_pointer_enter();
        self.autoplay.set_hovered(true);
    }

    /// Pointer left the track area. Ends any in-progress drag at its last
    /// known position, then resumes the autoplay countdown.
    pub fn pointer_leave(&mut self) -> CarouselResult<bool> {
        if self.destroyed {
            return Ok(false);
        }
        self.interaction.on_pointer_leave();
        self.autoplay.set_hovered(false);

        if let Some(drag) = self.interaction.drag_state() {
            return self.end_drag(drag.last_x);
        }
        Ok(false)
    }

    /// Starts a drag gesture at pointer position `x`.
    ///
    /// A press during an in-flight transition completes the transition first
    /// so the gesture starts from a settled track.
    pub fn pointer_down(&mut self, x: f64, pointer: PointerKind) {
        if self.destroyed || self.layout.is_empty() {
            return;
        }

        if self.navigator.is_transitioning() {
            self.transition_remaining = Duration::ZERO;
            self.navigator.finish_transition();
        }

        let baseline = self.current_offset();
        self.interaction.on_drag_start(x, baseline, pointer);
        self.autoplay.set_dragging(true);
        self.emit(CarouselEvent::DragStarted { pointer });
    }

    /// Continues a drag; pushes a live (non-animated) offset when the
    /// pointer kind follows the drag.
    pub fn pointer_move(&mut self, x: f64) -> CarouselResult<()> {
        if self.destroyed {
            return Ok(());
        }
        if let Some(live) = self.interaction.on_drag_move(x) {
            self.view.apply(ViewCommand::SetOffset {
                offset: live,
                animate: false,
            })?;
        }
        Ok(())
    }

    /// Ends a drag at pointer position `x`.
    ///
    /// Commits to one page forward or backward when the travel met the swipe
    /// threshold, otherwise snaps back to the current slide. Returns whether
    /// the index moved.
    pub fn pointer_up(&mut self, x: f64) -> CarouselResult<bool> {
        if self.destroyed {
            return Ok(false);
        }
        self.end_drag(x)
    }

    fn end_drag(&mut self, x: f64) -> CarouselResult<bool> {
        let Some(drag) = self.interaction.drag_state() else {
            return Ok(false);
        };
        let followed = match drag.pointer {
            PointerKind::Mouse => true,
            PointerKind::Touch => self.options.touch_live_follow,
        };

        let Some(outcome) = self.interaction.on_drag_end(x) else {
            return Ok(false);
        };
        self.autoplay.set_dragging(false);
        self.autoplay.reset_countdown();

        let (committed, moved) = match outcome {
            GestureOutcome::Commit { forward, delta } => {
                trace!(delta, forward, "swipe committed");
                let intent = if forward {
                    NavigationIntent::Next
                } else {
                    NavigationIntent::Prev
                };
                let moved = self.navigate(intent, ChangeCause::Swipe)?;
                if !moved && followed {
                    self.snap_back()?;
                }
                (true, moved)
            }
            GestureOutcome::SnapBack { delta } => {
                trace!(delta, "swipe below threshold");
                if followed {
                    self.snap_back()?;
                }
                (false, false)
            }
        };

        self.emit(CarouselEvent::DragEnded { committed });
        Ok(moved)
    }

    /// Glides a displaced track back to the current slide's offset.
    fn snap_back(&mut self) -> CarouselResult<()> {
        self.view.apply(ViewCommand::SetOffset {
            offset: self.current_offset(),
            animate: !self.options.effective_transition().is_zero(),
        })
    }

    /// Queues a size change. The reflow itself runs once the debounce window
    /// passes without another notification.
    pub fn notify_resize(&mut self, viewport: Viewport, geometry: TrackGeometry) {
        if self.destroyed {
            return;
        }
        self.resize_debounce.submit((viewport, geometry));
    }

    /// Consumes host-reported elapsed time.
    ///
    /// Expiries are serviced in deadline order; clocks sharing a deadline
    /// resolve as transition completion, then resize reflow, then autoplay,
    /// so a tick neither lands on a still-latched navigator nor fires
    /// through a viewport gate a tied reflow just closed.
    pub fn advance(&mut self, dt: Duration) -> CarouselResult<()> {
        if self.destroyed {
            return Ok(());
        }

        let mut left = dt;
        loop {
            let deadlines = [
                self.transition_deadline(),
                self.resize_debounce.deadline(),
                self.autoplay.deadline(),
            ];
            let Some(nearest) = deadlines.into_iter().flatten().min() else {
                break;
            };
            if nearest > left {
                break;
            }
            left -= nearest;

            self.step_transition(nearest);
            if let Some((viewport, geometry)) = self.resize_debounce.advance(nearest) {
                self.apply_resize(viewport, geometry)?;
            }

            // Reflow first: a gate-closing resize must suppress a tick
            // expiring at the same instant.
            let ticks = self.autoplay.advance(nearest);
            for _ in 0..ticks {
                self.autoplay_step()?;
            }
        }

        if !left.is_zero() {
            self.step_transition(left);
            let _ = self.resize_debounce.advance(left);
            let _ = self.autoplay.advance(left);
        }
        Ok(())
    }

    /// Marks the in-flight transition as visually finished.
    ///
    /// Hosts whose toolkit reports animation completion call this instead of
    /// waiting out the configured duration. Idempotent.
    pub fn transition_finished(&mut self) {
        if self.destroyed {
            return;
        }
        self.transition_remaining = Duration::ZERO;
        self.navigator.finish_transition();
    }

    /// Reports whether the carousel is visible to the user. While out of
    /// view, autoplay keeps counting but skips its advances.
    pub fn set_in_view(&mut self, in_view: bool) {
        if self.destroyed {
            return;
        }
        self.autoplay.set_in_view(in_view);
    }

    /// Tears the instance down. After this, no view command is ever issued
    /// again and all observers are released.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        debug!("carousel destroyed");
        self.autoplay.disable();
        self.autoplay.set_dragging(false);
        self.interaction.cancel_drag();
        self.resize_debounce.clear();
        self.transition_remaining = Duration::ZERO;
        self.navigator.finish_transition();
        self.emit(CarouselEvent::Destroyed);
        self.observers.clear();
        self.destroyed = true;
    }

    /// Registers an observer under its id, replacing any previous one with
    /// the same id. Observers are notified in registration order.
    pub fn register_observer(&mut self, observer: Box<dyn CarouselObserver>) {
        self.observers.insert(observer.id().to_owned(), observer);
    }

    pub fn unregister_observer(&mut self, id: &str) -> bool {
        self.observers.shift_remove(id).is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            geometry: self.geometry,
            total_slides: self.total_slides,
            slides_per_view: self.layout.slides_per_view(),
            stride: self.layout.stride(),
            current_index: self.navigator.current_index(),
            current_page: self.layout.page_of(self.navigator.current_index()),
            page_count: self.layout.page_count(),
            max_index: self.layout.max_index(),
            phase: self.navigator.phase(),
            autoplay_active: self.autoplay.is_active(),
            destroyed: self.destroyed,
            mode: self.options.slides_to_show.clone(),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.layout.page_of(self.navigator.current_index())
    }

    /// Canonical offset of the current slide, in px.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.layout.offset_for(self.navigator.current_index())
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    #[must_use]
    pub fn slides_per_view(&self) -> usize {
        self.layout.slides_per_view()
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.layout.max_index()
    }

    #[must_use]
    pub fn stride(&self) -> f64 {
        self.layout.stride()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    fn transition_deadline(&self) -> Option<Duration> {
        if self.navigator.is_transitioning() && !self.transition_remaining.is_zero() {
            Some(self.transition_remaining)
        } else {
            None
        }
    }

    fn step_transition(&mut self, dt: Duration) {
        if !self.navigator.is_transitioning() {
            return;
        }
        if dt >= self.transition_remaining {
            self.transition_remaining = Duration::ZERO;
            self.navigator.finish_transition();
        } else {
            self.transition_remaining -= dt;
        }
    }

    fn autoplay_step(&mut self) -> CarouselResult<()> {
        trace!("autoplay tick");
        if !self.options.looping && self.navigator.current_index() >= self.layout.max_index() {
            // End of track without wrap-around: rewind to the start or stall.
            if self.options.autoplay_rewind {
                self.navigate(NavigationIntent::GoToSlide(0), ChangeCause::Autoplay)?;
            }
            return Ok(());
        }
        self.navigate(NavigationIntent::Next, ChangeCause::Autoplay)?;
        Ok(())
    }

    fn apply_resize(&mut self, viewport: Viewport, measured: TrackGeometry) -> CarouselResult<()> {
        if !viewport.is_valid() {
            return Err(CarouselError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let geometry = self.options.resolve_geometry(measured).validate()?;

        let old_layout = self.layout;
        let old_page = self.layout.page_of(self.navigator.current_index());

        self.viewport = viewport;
        self.geometry = geometry;
        self.layout = TrackLayout::compute(
            geometry,
            viewport,
            self.total_slides,
            &self.options.slides_to_show,
        );
        self.autoplay.set_viewport(viewport);
        self.navigator.force_into(self.layout);

        // A reflow repositions the track without animation, so any in-flight
        // transition is finished here rather than left to its timer.
        self.transition_remaining = Duration::ZERO;
        self.navigator.finish_transition();

        if self.layout.is_empty() {
            return Ok(());
        }

        self.view.apply(ViewCommand::SetOffset {
            offset: self.current_offset(),
            animate: false,
        })?;

        let new_page = self.layout.page_of(self.navigator.current_index());
        if self.layout.page_count() != old_layout.page_count() {
            self.view.apply(ViewCommand::RebuildIndicators {
                page_count: self.layout.page_count(),
            })?;
            self.view
                .apply(ViewCommand::HighlightIndicator { page: new_page })?;
        } else if new_page != old_page {
            self.view
                .apply(ViewCommand::HighlightIndicator { page: new_page })?;
        }
        self.sync_nav_enabled()?;

        if self.layout.slides_per_view() != old_layout.slides_per_view()
            || self.layout.page_count() != old_layout.page_count()
        {
            debug!(
                slides_per_view = self.layout.slides_per_view(),
                page_count = self.layout.page_count(),
                "carousel reflowed"
            );
            self.emit(CarouselEvent::LayoutChanged {
                slides_per_view: self.layout.slides_per_view(),
                page_count: self.layout.page_count(),
            });
        }
        Ok(())
    }

    fn nav_enabled(&self) -> (bool, bool) {
        if self.layout.max_index() == 0 {
            return (false, false);
        }
        if self.options.looping {
            return (true, true);
        }
        let current = self.navigator.current_index();
        (current > 0, current < self.layout.max_index())
    }

    /// Pushes `SetNavEnabled` only when the pair actually changed.
    fn sync_nav_enabled(&mut self) -> CarouselResult<()> {
        let (prev, next) = self.nav_enabled();
        if self.last_nav_enabled == Some((prev, next)) {
            return Ok(());
        }
        self.view.apply(ViewCommand::SetNavEnabled { prev, next })?;
        self.last_nav_enabled = Some((prev, next));
        Ok(())
    }

    fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            viewport: self.viewport,
            current_index: self.navigator.current_index(),
            current_page: self.layout.page_of(self.navigator.current_index()),
            slides_per_view: self.layout.slides_per_view(),
            page_count: self.layout.page_count(),
            max_index: self.layout.max_index(),
            is_transitioning: self.navigator.is_transitioning(),
            autoplay_active: self.autoplay.is_active(),
        }
    }

    fn emit(&mut self, event: CarouselEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }
}
