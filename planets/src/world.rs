//! Body registry and the n-body integration loop

use std::collections::BTreeMap;

use common::{validate_positive, BodyId, PositionLookup, SandboxError, Vector2};
use glam::DVec2;

use crate::body::Body;
use crate::config::SandboxConfig;
use crate::dynamics::{Evolve, Kinematic};

/// How bodies are advanced each sub-step.
pub enum Engine {
    /// O(n²) Newtonian attraction between every unordered pair
    Pairwise,
    /// Each body evolves independently under one strategy
    Independent(Box<dyn Evolve>),
}

/// Read-only copy of a body's state for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    pub radius: f64,
    pub selected: bool,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.position,
            velocity: body.velocity,
            mass: body.mass(),
            radius: body.radius(),
            selected: body.is_selected(),
        }
    }
}

/// Owns every body, the selection and the time switch.
///
/// Bodies are keyed by id; ids only grow, so key order is creation order.
pub struct World {
    bodies: BTreeMap<BodyId, Body>,
    next_id: u64,
    selection: Option<BodyId>,
    time_flowing: bool,
    engine: Engine,
    pub gravitational_constant: f64,
    pub softening: f64,
    velocity_scale: f64,
    default_mass: f64,
    default_radius: f64,
}

impl World {
    /// Empty, paused world. Fails if the configured velocity scale or
    /// default body attributes are not positive.
    pub fn new(config: &SandboxConfig) -> Result<Self, SandboxError> {
        Ok(Self {
            bodies: BTreeMap::new(),
            next_id: 0,
            selection: None,
            time_flowing: false,
            engine: Engine::Pairwise,
            gravitational_constant: config.gravitational_constant,
            softening: config.softening,
            velocity_scale: validate_positive("velocity scale", config.velocity_scale)?,
            default_mass: validate_positive("mass", config.default_mass)?,
            default_radius: validate_positive("radius", config.default_radius)?,
        })
    }

    pub fn set_engine(&mut self, engine: Engine) {
        self.engine = engine;
    }

    // ------------------------------------------------------------------
    // Registry

    /// Adds a body and returns its fresh id.
    pub fn create_body(
        &mut self,
        position: Vector2,
        velocity: Vector2,
        radius: f64,
        mass: f64,
    ) -> Result<BodyId, SandboxError> {
        let id = BodyId::from_raw(self.next_id);
        let body = Body::new(id, position, velocity, radius, mass)?;
        self.next_id += 1;
        self.bodies.insert(id, body);
        log::debug!("Created body {} at ({}, {})", id, position.x, position.y);
        Ok(id)
    }

    /// Adds a resting body of default mass and radius.
    pub fn create_default_body(&mut self, position: Vector2) -> Result<BodyId, SandboxError> {
        self.create_body(position, DVec2::ZERO, self.default_radius, self.default_mass)
    }

    /// Removes a body, clearing the selection if it pointed at it.
    pub fn remove_body(&mut self, id: BodyId) -> Result<Body, SandboxError> {
        let body = self.bodies.remove(&id).ok_or(SandboxError::NotFound(id))?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        log::debug!("Removed body {}", id);
        Ok(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    /// Bodies in creation order.
    pub fn bodies(&self) -> impl DoubleEndedIterator<Item = &Body> {
        self.bodies.values()
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.values().map(BodySnapshot::from).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Topmost body under `point`: the most recently created one wins.
    pub fn hit_test(&self, point: Vector2) -> Option<BodyId> {
        self.bodies
            .values()
            .rev()
            .find(|body| body.contains(point))
            .map(Body::id)
    }

    pub fn default_mass(&self) -> f64 {
        self.default_mass
    }

    pub fn default_radius(&self) -> f64 {
        self.default_radius
    }

    /// Sets the default mass used by [`World::create_default_body`].
    pub fn set_default_mass(&mut self, mass: f64) -> Result<(), SandboxError> {
        self.default_mass = validate_positive("mass", mass)?;
        Ok(())
    }

    pub fn set_default_radius(&mut self, radius: f64) -> Result<(), SandboxError> {
        self.default_radius = validate_positive("radius", radius)?;
        Ok(())
    }

    pub fn velocity_scale(&self) -> f64 {
        self.velocity_scale
    }

    pub fn set_velocity_scale(&mut self, scale: f64) -> Result<(), SandboxError> {
        self.velocity_scale = validate_positive("velocity scale", scale)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection and time

    /// Selects a body. Selecting always pauses time.
    pub fn select(&mut self, id: BodyId) -> Result<(), SandboxError> {
        if !self.bodies.contains_key(&id) {
            return Err(SandboxError::NotFound(id));
        }
        self.deselect();
        if let Some(body) = self.bodies.get_mut(&id) {
            body.set_selected(true);
        }
        self.selection = Some(id);
        self.time_flowing = false;
        Ok(())
    }

    /// Clears the selection. Time stays paused.
    pub fn deselect(&mut self) {
        for body in self.bodies.values_mut() {
            body.set_selected(false);
        }
        self.selection = None;
    }

    pub fn is_selected(&self) -> Option<BodyId> {
        self.selection
    }

    pub fn selected_body(&self) -> Option<&Body> {
        self.selection.and_then(|id| self.bodies.get(&id))
    }

    /// Points the selected body's velocity at `real_point`. No-op without a
    /// selection.
    pub fn set_selected_velocity(&mut self, real_point: Vector2) {
        let scale = self.velocity_scale;
        if let Some(body) = self.selection.and_then(|id| self.bodies.get_mut(&id)) {
            body.velocity = (real_point - body.position) * scale;
        }
    }

    pub fn set_selected_mass(&mut self, mass: f64) -> Result<(), SandboxError> {
        match self.selection.and_then(|id| self.bodies.get_mut(&id)) {
            Some(body) => body.set_mass(mass),
            None => Ok(()),
        }
    }

    pub fn set_selected_radius(&mut self, radius: f64) -> Result<(), SandboxError> {
        match self.selection.and_then(|id| self.bodies.get_mut(&id)) {
            Some(body) => body.set_radius(radius),
            None => Ok(()),
        }
    }

    /// Flips the time switch. Any selection is dropped, since editing and
    /// running time are mutually exclusive.
    pub fn toggle_time(&mut self) {
        self.time_flowing = !self.time_flowing;
        if self.selection.is_some() {
            self.deselect();
        }
        log::info!("Time {}", if self.time_flowing { "flowing" } else { "paused" });
    }

    pub fn is_time_flowing(&self) -> bool {
        self.time_flowing
    }

    // ------------------------------------------------------------------
    // Physics

    /// Force on `a` from `b`; the force on `b` is its negation.
    pub fn pair_force(&self, a: &Body, b: &Body) -> Result<Vector2, SandboxError> {
        pair_force(self.gravitational_constant, self.softening, a, b)
    }

    /// Advances the simulation by `dt` split into `substeps` equal slices.
    /// Does nothing while time is paused.
    pub fn step_time(&mut self, dt: f64, substeps: u32) {
        if !self.time_flowing {
            return;
        }
        if !dt.is_finite() {
            log::warn!("Ignoring time step of {}", dt);
            return;
        }

        let substeps = substeps.max(1);
        let sub_dt = dt / substeps as f64;
        for _ in 0..substeps {
            self.substep(sub_dt);
        }
    }

    fn substep(&mut self, dt: f64) {
        if let Engine::Independent(strategy) = &self.engine {
            for body in self.bodies.values_mut() {
                (body.position, body.velocity) = strategy.evolve(body.position, body.velocity, dt);
            }
            return;
        }

        self.accumulate_forces();
        for body in self.bodies.values_mut() {
            let step = Kinematic::from_force(body.force, body.mass());
            (body.position, body.velocity) = step.evolve(body.position, body.velocity, dt);
        }
    }

    /// Zeroes every accumulator, then adds each pair's attraction once,
    /// equal and opposite.
    fn accumulate_forces(&mut self) {
        let g = self.gravitational_constant;
        let softening = self.softening;

        let mut bodies: Vec<&mut Body> = self.bodies.values_mut().collect();
        for body in bodies.iter_mut() {
            body.force = DVec2::ZERO;
        }

        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut *head[i];
            for b in tail.iter_mut() {
                let b = &mut **b;
                match pair_force(g, softening, a, b) {
                    Ok(force) => {
                        a.force += force;
                        b.force -= force;
                    }
                    Err(err) => log::debug!("Skipping pair: {}", err),
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics

    pub fn total_momentum(&self) -> Vector2 {
        self.bodies.values().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.values().map(Body::kinetic_energy).sum()
    }

    pub fn center_of_mass(&self) -> Vector2 {
        let total_mass: f64 = self.bodies.values().map(Body::mass).sum();
        if total_mass > 0.0 {
            self.bodies
                .values()
                .map(|body| body.position * body.mass())
                .sum::<Vector2>()
                / total_mass
        } else {
            DVec2::ZERO
        }
    }
}

impl PositionLookup for World {
    fn position_of(&self, id: BodyId) -> Option<Vector2> {
        self.bodies.get(&id).map(|body| body.position)
    }
}

/// `G mA mB (pB - pA) / (|pB - pA|² + ε²)^(3/2)`
fn pair_force(g: f64, softening: f64, a: &Body, b: &Body) -> Result<Vector2, SandboxError> {
    let r = b.position - a.position;
    let dist2 = r.length_squared() + softening * softening;
    if dist2 == 0.0 {
        return Err(SandboxError::DegenerateGeometry(a.id(), b.id()));
    }
    Ok(r * (g * a.mass() * b.mass() / (dist2 * dist2.sqrt())))
}
