use super::*;

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 70.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
}

#[test]
fn rect_contains_includes_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

#[test]
fn clamp_span_keeps_span_inside_margins() {
    assert_eq!(clamp_span(-5.0, 20.0, 0.0, 100.0, 8.0), 8.0);
    assert_eq!(clamp_span(90.0, 20.0, 0.0, 100.0, 8.0), 72.0);
    assert_eq!(clamp_span(40.0, 20.0, 0.0, 100.0, 8.0), 40.0);
}

#[test]
fn clamp_span_pins_oversized_span_to_start() {
    assert_eq!(clamp_span(30.0, 200.0, 0.0, 100.0, 8.0), 8.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn viewport_size_is_zero_outside_browser() {
    assert_eq!(viewport_size(), Size::default());
}
