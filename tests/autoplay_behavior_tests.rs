use std::time::Duration;

use carousel_rs::api::{CarouselEngine, CarouselOptions};
use carousel_rs::core::{SlidesPerView, TrackDescriptor, TrackGeometry, Viewport};
use carousel_rs::interaction::PointerKind;
use carousel_rs::view::NullView;

const DELAY: Duration = Duration::from_millis(5000);

fn mounted_with(viewport_width: f64, options: CarouselOptions) -> CarouselEngine<NullView> {
    let descriptor = TrackDescriptor::new(
        3,
        TrackGeometry::new(900.0, 280.0, 20.0),
        Viewport::new(viewport_width, 800.0),
    );
    CarouselEngine::mount(NullView::default(), descriptor, options).expect("engine mount")
}

fn autoplay_options() -> CarouselOptions {
    CarouselOptions::default()
        .with_autoplay(true)
        .with_slides_to_show(SlidesPerView::Fixed(1))
        .with_transition_duration(Duration::ZERO)
}

#[test]
fn ticks_fire_only_after_the_full_delay() {
    let mut engine = mounted_with(1200.0, autoplay_options());
    assert!(engine.autoplay_active());

    engine.advance(DELAY - Duration::from_millis(1)).expect("advance");
    assert_eq!(engine.current_index(), 0);

    engine.advance(Duration::from_millis(1)).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn rewinds_to_the_start_after_the_last_slide() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    engine.advance(DELAY).expect("advance");
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 2);

    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn rewind_disabled_stalls_at_the_end() {
    let mut engine = mounted_with(
        1200.0,
        CarouselOptions {
            autoplay_rewind: false,
            ..autoplay_options()
        },
    );

    for _ in 0..5 {
        engine.advance(DELAY).expect("advance");
    }
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn looping_autoplay_wraps_instead_of_rewinding() {
    let mut engine = mounted_with(1200.0, autoplay_options().with_looping(true));

    engine.advance(DELAY).expect("advance");
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 2);

    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 0);
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn hover_freezes_the_countdown_and_leave_resumes_it() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    engine.advance(Duration::from_millis(3000)).expect("advance");
    engine.pointer_enter();
    assert!(!engine.autoplay_active());

    engine.advance(Duration::from_secs(120)).expect("advance");
    assert_eq!(engine.current_index(), 0);

    engine.pointer_leave().expect("pointer leave");
    assert!(engine.autoplay_active());
    engine.advance(Duration::from_millis(2000)).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn an_active_drag_freezes_the_countdown() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    engine.pointer_down(500.0, PointerKind::Touch);
    engine.advance(Duration::from_secs(30)).expect("advance");
    assert_eq!(engine.current_index(), 0);

    // Sub-threshold release restarts a full delay.
    engine.pointer_up(495.0).expect("pointer up");
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn manual_navigation_restarts_the_countdown() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    engine.advance(Duration::from_millis(4000)).expect("advance");
    engine.next().expect("manual next");
    assert_eq!(engine.current_index(), 1);

    // The old tick would have fired 1s later; it must not.
    engine.advance(Duration::from_millis(1000)).expect("advance");
    assert_eq!(engine.current_index(), 1);

    engine.advance(Duration::from_millis(4000)).expect("advance");
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn stop_on_interaction_disables_autoplay_permanently() {
    let mut engine = mounted_with(
        1200.0,
        CarouselOptions {
            autoplay_stop_on_interaction: true,
            ..autoplay_options()
        },
    );

    engine.next().expect("manual next");
    assert!(!engine.autoplay_active());

    engine.advance(Duration::from_secs(60)).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn narrow_viewports_gate_autoplay_off() {
    let mut engine = mounted_with(500.0, autoplay_options());
    assert!(!engine.autoplay_active());

    engine.advance(Duration::from_secs(60)).expect("advance");
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn a_resize_past_the_width_gate_enables_autoplay() {
    let mut engine = mounted_with(500.0, autoplay_options());

    engine.notify_resize(
        Viewport::new(1024.0, 800.0),
        TrackGeometry::new(900.0, 280.0, 20.0),
    );
    engine.advance(Duration::from_millis(250)).expect("advance");
    assert!(engine.autoplay_active());

    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn a_narrowing_resize_tied_with_a_tick_suppresses_it() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    // Both the debounce window and the countdown expire at the same instant.
    engine.advance(DELAY - Duration::from_millis(250)).expect("advance");
    engine.notify_resize(
        Viewport::new(500.0, 800.0),
        TrackGeometry::new(900.0, 280.0, 20.0),
    );
    engine.advance(Duration::from_millis(250)).expect("advance");

    assert_eq!(engine.current_index(), 0);
    assert!(!engine.autoplay_active());
}

#[test]
fn out_of_view_ticks_are_skipped_but_keep_counting() {
    let mut engine = mounted_with(1200.0, autoplay_options());

    engine.set_in_view(false);
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 0);

    engine.set_in_view(true);
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn autoplay_off_by_default_never_moves() {
    let mut engine = mounted_with(
        1200.0,
        CarouselOptions::default()
            .with_slides_to_show(SlidesPerView::Fixed(1))
            .with_transition_duration(Duration::ZERO),
    );
    assert!(!engine.autoplay_active());

    engine.advance(Duration::from_secs(600)).expect("advance");
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn animated_autoplay_completes_its_transition_between_ticks() {
    let descriptor = TrackDescriptor::new(
        3,
        TrackGeometry::new(900.0, 280.0, 20.0),
        Viewport::new(1200.0, 800.0),
    );
    let options = CarouselOptions::default()
        .with_autoplay(true)
        .with_slides_to_show(SlidesPerView::Fixed(1));
    let mut engine =
        CarouselEngine::mount(NullView::default(), descriptor, options).expect("engine mount");

    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 1);
    assert!(engine.is_transitioning());

    // The next full delay both finishes the 400ms transition and fires the
    // following tick.
    engine.advance(DELAY).expect("advance");
    assert_eq!(engine.current_index(), 2);
}
