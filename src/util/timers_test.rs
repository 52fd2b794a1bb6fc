#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn ticker_stops_once() {
    let ticker = every(1000, || {});
    assert!(ticker.is_running());
    let clone = ticker.clone();
    clone.stop();
    assert!(!ticker.is_running());
}

#[test]
fn one_shot_and_frame_helpers_noop_outside_browser() {
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    let fired_cb = fired.clone();
    after(0, move || fired_cb.set(true));
    animate(|_| true);
    assert!(!fired.get());
    assert_eq!(now_ms(), 0.0);
}
