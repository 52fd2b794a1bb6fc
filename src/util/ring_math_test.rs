use super::*;

#[test]
fn ring_geometry_full_and_empty() {
    let full = ring_geometry(48.0, 4.0, 100.0);
    assert_eq!(full.radius, 22.0);
    assert!(full.dash_offset.abs() < 1e-9);

    let empty = ring_geometry(48.0, 4.0, 0.0);
    assert!((empty.dash_offset - empty.circumference).abs() < 1e-9);
}

#[test]
fn ring_geometry_half() {
    let half = ring_geometry(48.0, 4.0, 50.0);
    assert!((half.dash_offset - half.circumference / 2.0).abs() < 1e-9);
}

#[test]
fn percent_is_clamped_and_nan_is_zero() {
    assert_eq!(ring_geometry(48.0, 4.0, 150.0).percent, 100.0);
    assert_eq!(ring_geometry(48.0, 4.0, -3.0).percent, 0.0);
    assert_eq!(ring_geometry(48.0, 4.0, f64::NAN).percent, 0.0);
}

#[test]
fn stroke_wider_than_ring_yields_zero_radius() {
    assert_eq!(ring_geometry(4.0, 10.0, 50.0).radius, 0.0);
}

#[test]
fn tone_bands_follow_thresholds() {
    assert_eq!(tone_for_percent(10.0, DEFAULT_TONE_THRESHOLDS), Tone::Danger);
    assert_eq!(tone_for_percent(33.0, DEFAULT_TONE_THRESHOLDS), Tone::Warning);
    assert_eq!(tone_for_percent(66.0, DEFAULT_TONE_THRESHOLDS), Tone::Success);
}

#[test]
fn percent_label_rounds() {
    assert_eq!(percent_label(42.6), "43%");
    assert_eq!(percent_label(120.0), "100%");
}
