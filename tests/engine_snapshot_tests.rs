use std::time::Duration;

use carousel_rs::api::{CarouselEngine, CarouselOptions};
use carousel_rs::core::{NavigationPhase, SlidesPerView, TrackDescriptor, TrackGeometry, Viewport};
use carousel_rs::view::NullView;

fn mounted(options: CarouselOptions) -> CarouselEngine<NullView> {
    let descriptor = TrackDescriptor::new(
        6,
        TrackGeometry::new(900.0, 280.0, 20.0),
        Viewport::new(1200.0, 800.0),
    );
    CarouselEngine::mount(NullView::default(), descriptor, options).expect("engine mount")
}

#[test]
fn snapshot_captures_the_mounted_state() {
    let engine = mounted(CarouselOptions::default().with_slides_to_show(SlidesPerView::Fixed(2)));
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.total_slides, 6);
    assert_eq!(snapshot.slides_per_view, 2);
    assert!((snapshot.stride - 300.0).abs() <= 1e-9);
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(snapshot.current_page, 0);
    assert_eq!(snapshot.page_count, 3);
    assert_eq!(snapshot.max_index, 4);
    assert_eq!(snapshot.phase, NavigationPhase::Idle);
    assert!(!snapshot.autoplay_active);
    assert!(!snapshot.destroyed);
    assert_eq!(snapshot.mode, SlidesPerView::Fixed(2));
    assert!((snapshot.viewport.width - 1200.0).abs() <= 1e-9);
    assert!((snapshot.geometry.gap - 20.0).abs() <= 1e-9);
}

#[test]
fn snapshot_tracks_navigation_and_phase() {
    let mut engine =
        mounted(CarouselOptions::default().with_slides_to_show(SlidesPerView::Fixed(2)));

    engine.next().expect("next");
    let mid_flight = engine.snapshot();
    assert_eq!(mid_flight.current_index, 2);
    assert_eq!(mid_flight.current_page, 1);
    assert_eq!(mid_flight.phase, NavigationPhase::Transitioning);

    engine.advance(Duration::from_millis(400)).expect("advance");
    assert_eq!(engine.snapshot().phase, NavigationPhase::Idle);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut engine = mounted(
        CarouselOptions::default()
            .with_slides_to_show(SlidesPerView::Fixed(2))
            .with_transition_duration(Duration::ZERO),
    );
    engine.next().expect("next");

    let encoded = engine.snapshot().to_json().expect("snapshot json");
    let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");

    assert_eq!(value["current_index"], 2);
    assert_eq!(value["page_count"], 3);
    assert_eq!(value["phase"], "Idle");
    assert_eq!(value["mode"]["Fixed"], 2);
    assert_eq!(value["destroyed"], false);
}

#[test]
fn snapshots_are_detached_copies() {
    let mut engine = mounted(
        CarouselOptions::default()
            .with_slides_to_show(SlidesPerView::Fixed(2))
            .with_transition_duration(Duration::ZERO),
    );
    let before = engine.snapshot();

    engine.next().expect("next");
    assert_eq!(before.current_index, 0);
    assert_eq!(engine.snapshot().current_index, 2);
}
