use super::*;

fn card() -> Rect {
    Rect::new(100.0, 100.0, 200.0, 100.0)
}

#[test]
fn centre_is_flat() {
    let tilt = tilt_angles(Point::new(200.0, 150.0), card(), 10.0);
    assert!(tilt.rotate_x.abs() < 1e-9);
    assert!(tilt.rotate_y.abs() < 1e-9);
    assert_eq!(tilt.glare_x, 50.0);
}

#[test]
fn corners_reach_max_tilt() {
    let top_left = tilt_angles(Point::new(100.0, 100.0), card(), 10.0);
    assert_eq!(top_left.rotate_x, 10.0);
    assert_eq!(top_left.rotate_y, -10.0);

    let bottom_right = tilt_angles(Point::new(300.0, 200.0), card(), 10.0);
    assert_eq!(bottom_right.rotate_x, -10.0);
    assert_eq!(bottom_right.rotate_y, 10.0);
}

#[test]
fn outside_pointer_clamps() {
    let tilt = tilt_angles(Point::new(-500.0, 9_999.0), card(), 8.0);
    assert_eq!(tilt.rotate_y, -8.0);
    assert_eq!(tilt.rotate_x, -8.0);
}

#[test]
fn degenerate_rect_rests() {
    assert_eq!(tilt_angles(Point::new(1.0, 1.0), Rect::default(), 10.0), Tilt::rest());
}

#[test]
fn transform_formats_angles() {
    let tilt = Tilt { rotate_x: 1.5, rotate_y: -2.0, glare_x: 0.0, glare_y: 0.0 };
    assert_eq!(tilt.transform(800.0), "perspective(800px) rotateX(1.50deg) rotateY(-2.00deg)");
}
