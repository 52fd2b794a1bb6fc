//! Press-feedback effects: ripples and particle bursts.
//!
//! DESIGN
//! ======
//! Both effects are short-lived particle sets owned by a single button. The
//! component drives time (a one-shot timer per ripple, an animation-frame loop
//! for particles); these models only decide geometry and lifetime.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use std::f64::consts::TAU;

use crate::util::geometry::{Point, Rect};

/// How long a ripple lives before it is removed.
pub const DEFAULT_RIPPLE_MS: u32 = 600;

/// One expanding circle anchored at a press point, in button-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Ripple {
    /// Inline style positioning the ripple's bounding square.
    #[must_use]
    pub fn style(&self) -> String {
        let half = self.size / 2.0;
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px",
            self.x - half,
            self.y - half,
            self.size,
            self.size
        )
    }
}

/// Live ripples for one button.
#[derive(Clone, Debug, Default)]
pub struct RippleState {
    pub ripples: Vec<Ripple>,
    next_id: u64,
}

impl RippleState {
    /// Add a ripple for a press at viewport coordinates `(client_x, client_y)`
    /// on a button occupying `rect`.
    pub fn spawn(&mut self, client_x: f64, client_y: f64, rect: Rect) -> Ripple {
        self.next_id += 1;
        let ripple = Ripple {
            id: self.next_id,
            x: client_x - rect.x,
            y: client_y - rect.y,
            size: rect.width.max(rect.height) * 2.0,
        };
        self.ripples.push(ripple.clone());
        ripple
    }

    pub fn remove(&mut self, id: u64) {
        self.ripples.retain(|r| r.id != id);
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}

/// Downward acceleration applied to particles, in px/s².
pub const PARTICLE_GRAVITY: f64 = 900.0;
/// Seconds a particle lives.
pub const PARTICLE_LIFETIME_S: f64 = 0.7;
pub const DEFAULT_PARTICLE_COUNT: usize = 12;
pub const DEFAULT_PARTICLE_SPEED: f64 = 220.0;

/// One particle in a burst. `life` runs from 1.0 (spawned) to 0.0 (dead).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px); opacity: {:.2}",
            self.x,
            self.y,
            self.life.clamp(0.0, 1.0)
        )
    }
}

/// A radial particle burst (the "celebrate" press effect).
#[derive(Clone, Debug, Default)]
pub struct ParticleBurst {
    pub particles: Vec<Particle>,
}

impl ParticleBurst {
    /// Emit `count` particles from `origin`, evenly spaced in angle.
    pub fn burst(&mut self, origin: Point, count: usize, speed: f64) {
        if count == 0 {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / count as f64;
        self.particles.extend((0..count).map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = step * i as f64;
            Particle { x: origin.x, y: origin.y, vx: angle.cos() * speed, vy: angle.sin() * speed, life: 1.0 }
        }));
    }

    /// Advance the simulation by `dt_ms` and drop dead particles.
    pub fn step(&mut self, dt_ms: f64) {
        let dt = (dt_ms / 1000.0).max(0.0);
        for p in &mut self.particles {
            p.vy += PARTICLE_GRAVITY * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.life -= dt / PARTICLE_LIFETIME_S;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}
