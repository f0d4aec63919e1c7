use std::time::Duration;

use carousel_rs::api::{CarouselEngine, CarouselOptions};
use carousel_rs::core::{SlidesPerView, TrackDescriptor, TrackGeometry, Viewport};
use carousel_rs::interaction::ArrowKey;
use carousel_rs::view::NullView;

#[test]
fn engine_smoke_flow() {
    let geometry = TrackGeometry::new(900.0, 280.0, 20.0);
    let descriptor = TrackDescriptor::new(6, geometry, Viewport::new(1200.0, 800.0));
    let options = CarouselOptions::default().with_slides_to_show(SlidesPerView::Fixed(2));
    let mut engine =
        CarouselEngine::mount(NullView::default(), descriptor, options).expect("engine mount");

    assert_eq!(engine.total_slides(), 6);
    assert_eq!(engine.slides_per_view(), 2);
    assert_eq!(engine.page_count(), 3);
    assert_eq!(engine.max_index(), 4);
    assert_eq!(engine.current_index(), 0);
    assert!((engine.stride() - 300.0).abs() <= 1e-9);
    assert!((engine.viewport().width - 1200.0).abs() <= 1e-9);
    assert!(!engine.options().looping);

    assert!(engine.next().expect("next"));
    assert_eq!(engine.current_index(), 2);
    assert!(engine.is_transitioning());
    engine.advance(Duration::from_millis(400)).expect("advance");
    assert!(!engine.is_transitioning());

    assert!(engine.prev().expect("prev"));
    engine.advance(Duration::from_millis(400)).expect("advance");
    assert_eq!(engine.current_index(), 0);

    assert!(engine.go_to_page(2).expect("go to page"));
    engine.advance(Duration::from_millis(400)).expect("advance");
    assert_eq!(engine.current_index(), 4);
    assert_eq!(engine.current_page(), 2);
    assert!((engine.current_offset() - 1200.0).abs() <= 1e-9);

    assert!(engine.key_arrow(ArrowKey::Left).expect("arrow left"));
    engine.advance(Duration::from_millis(400)).expect("advance");
    assert_eq!(engine.current_index(), 2);
    assert!(engine.key_arrow(ArrowKey::Right).expect("arrow right"));
    engine.advance(Duration::from_millis(400)).expect("advance");
    assert_eq!(engine.current_index(), 4);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_index, 4);
    assert_eq!(snapshot.page_count, 3);

    let view = engine.into_view();
    assert_eq!(view.last_offset, Some(1200.0));
    assert_eq!(view.last_highlight, Some(2));
}
