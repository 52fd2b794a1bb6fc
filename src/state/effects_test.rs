use super::*;

#[test]
fn spawn_centres_ripple_on_press_point() {
    let mut state = RippleState::default();
    let ripple = state.spawn(130.0, 215.0, Rect::new(100.0, 200.0, 80.0, 30.0));
    assert_eq!(ripple.x, 30.0);
    assert_eq!(ripple.y, 15.0);
    assert_eq!(ripple.size, 160.0);
    assert_eq!(state.ripples.len(), 1);
}

#[test]
fn spawn_ids_increase() {
    let mut state = RippleState::default();
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let a = state.spawn(1.0, 1.0, rect);
    let b = state.spawn(2.0, 2.0, rect);
    assert!(b.id > a.id);
}

#[test]
fn remove_drops_only_matching_ripple() {
    let mut state = RippleState::default();
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let a = state.spawn(1.0, 1.0, rect);
    let b = state.spawn(2.0, 2.0, rect);
    state.remove(a.id);
    state.remove(9999);
    assert_eq!(state.ripples, vec![b]);
    state.clear();
    assert!(state.ripples.is_empty());
}

#[test]
fn ripple_style_offsets_by_half_size() {
    let ripple = Ripple { id: 1, x: 30.0, y: 15.0, size: 20.0 };
    assert_eq!(ripple.style(), "left: 20px; top: 5px; width: 20px; height: 20px");
}

#[test]
fn burst_emits_evenly_spaced_particles() {
    let mut burst = ParticleBurst::default();
    burst.burst(Point::new(5.0, 5.0), 4, 100.0);
    assert_eq!(burst.particles.len(), 4);
    assert!((burst.particles[0].vx - 100.0).abs() < 1e-9);
    assert!((burst.particles[1].vy - 100.0).abs() < 1e-9);
    assert!((burst.particles[2].vx + 100.0).abs() < 1e-9);
}

#[test]
fn burst_with_zero_count_is_empty() {
    let mut burst = ParticleBurst::default();
    burst.burst(Point::default(), 0, 100.0);
    assert!(burst.is_finished());
}

#[test]
fn step_applies_gravity_and_fades() {
    let mut burst = ParticleBurst::default();
    burst.burst(Point::default(), 1, 0.0);
    burst.step(100.0);
    let p = &burst.particles[0];
    assert!(p.vy > 0.0);
    assert!(p.y > 0.0);
    assert!(p.life < 1.0 && p.life > 0.0);
}

#[test]
fn step_past_lifetime_finishes_burst() {
    let mut burst = ParticleBurst::default();
    burst.burst(Point::default(), DEFAULT_PARTICLE_COUNT, DEFAULT_PARTICLE_SPEED);
    burst.step(PARTICLE_LIFETIME_S * 1000.0 + 1.0);
    assert!(burst.is_finished());
}
