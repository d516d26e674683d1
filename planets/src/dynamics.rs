//! Evolution strategies
//!
//! An [`Evolve`] advances one body's state by a time step. The pairwise
//! Newtonian engine in [`crate::world`] accumulates forces first and then
//! evolves each body with a [`Kinematic`] step; the other strategies move
//! bodies independently of one another.

use common::Vector2;
use glam::DVec2;

/// Something that advances `(position, velocity)` by `dt`.
pub trait Evolve {
    fn evolve(&self, position: Vector2, velocity: Vector2, dt: f64) -> (Vector2, Vector2);
}

/// Constant acceleration over the step:
/// `x' = x + v dt + ½ a dt²`, `v' = v + a dt`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematic {
    pub acceleration: Vector2,
}

impl Kinematic {
    pub fn from_force(force: Vector2, mass: f64) -> Self {
        Self {
            acceleration: force / mass,
        }
    }
}

impl Evolve for Kinematic {
    fn evolve(&self, position: Vector2, velocity: Vector2, dt: f64) -> (Vector2, Vector2) {
        let a = self.acceleration;
        (
            position + velocity * dt + 0.5 * a * dt * dt,
            velocity + a * dt,
        )
    }
}

/// Free drift, no forces
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Evolve for Linear {
    fn evolve(&self, position: Vector2, velocity: Vector2, dt: f64) -> (Vector2, Vector2) {
        (position + velocity * dt, velocity)
    }
}

/// Attraction toward a fixed point of strength `gm` (G times the central
/// mass). The test body's own mass cancels out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralGravity {
    pub center: Vector2,
    pub gm: f64,
}

impl CentralGravity {
    pub fn acceleration_at(&self, position: Vector2) -> Vector2 {
        let r = self.center - position;
        let dist2 = r.length_squared();
        if dist2 == 0.0 {
            return DVec2::ZERO;
        }
        r * (self.gm / (dist2 * dist2.sqrt()))
    }
}

impl Evolve for CentralGravity {
    fn evolve(&self, position: Vector2, velocity: Vector2, dt: f64) -> (Vector2, Vector2) {
        Kinematic {
            acceleration: self.acceleration_at(position),
        }
        .evolve(position, velocity, dt)
    }
}
