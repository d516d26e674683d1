//! A single gravitating body

use common::{validate_positive, BodyId, SandboxError, Vector2};
use glam::DVec2;

/// A point mass drawn as a disk of `radius`.
///
/// Mass and radius are always finite and positive; the setters reject
/// anything else and leave the old value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    id: BodyId,
    pub position: Vector2,
    pub velocity: Vector2,
    /// Force accumulated during the current sub-step
    pub(crate) force: Vector2,
    mass: f64,
    radius: f64,
    selected: bool,
}

impl Body {
    pub(crate) fn new(
        id: BodyId,
        position: Vector2,
        velocity: Vector2,
        radius: f64,
        mass: f64,
    ) -> Result<Self, SandboxError> {
        Ok(Self {
            id,
            position,
            velocity,
            force: DVec2::ZERO,
            mass: validate_positive("mass", mass)?,
            radius: validate_positive("radius", radius)?,
            selected: false,
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn force(&self) -> Vector2 {
        self.force
    }

    /// Presentation flag only; physics ignores it.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), SandboxError> {
        self.mass = validate_positive("mass", mass)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), SandboxError> {
        self.radius = validate_positive("radius", radius)?;
        Ok(())
    }

    /// True when `point` lies strictly inside the body's disk.
    pub fn contains(&self, point: Vector2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }

    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
