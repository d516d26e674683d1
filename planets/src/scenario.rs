//! Preset starting configurations

use common::SandboxError;
use glam::DVec2;
use rand::Rng;

use crate::world::World;

/// Named presets the binary can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// One default body at the origin
    Single,
    /// Heavy body with a light orbiter
    Binary,
    /// Central mass with a ring of orbiters
    Ring,
}

impl Preset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Preset::Single),
            "binary" => Some(Preset::Binary),
            "ring" => Some(Preset::Ring),
            _ => None,
        }
    }

    pub fn build(self, world: &mut World, rng: &mut impl Rng) -> Result<(), SandboxError> {
        match self {
            Preset::Single => init_single(world),
            Preset::Binary => init_binary(world),
            Preset::Ring => init_ring(world, 8, rng),
        }
    }
}

pub fn init_single(world: &mut World) -> Result<(), SandboxError> {
    world.create_default_body(DVec2::ZERO)?;
    Ok(())
}

/// Mass 100 at rest at the origin and mass 1 at (10, 0) moving at (0, 7)
pub fn init_binary(world: &mut World) -> Result<(), SandboxError> {
    world.create_body(DVec2::ZERO, DVec2::ZERO, 1.0, 100.0)?;
    world.create_body(DVec2::new(10.0, 0.0), DVec2::new(0.0, 7.0), 0.3, 1.0)?;
    Ok(())
}

/// Central mass plus `count` light bodies on near-circular orbits at random
/// angles and distances.
pub fn init_ring(world: &mut World, count: usize, rng: &mut impl Rng) -> Result<(), SandboxError> {
    let central_mass = 1000.0;
    world.create_body(DVec2::ZERO, DVec2::ZERO, 2.0, central_mass)?;

    for _ in 0..count {
        let distance = 8.0 + rng.gen::<f64>() * 12.0;
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let direction = DVec2::new(angle.cos(), angle.sin());

        // v = sqrt(GM/r) for a circular orbit
        let orbital_speed = (world.gravitational_constant * central_mass / distance).sqrt();
        let velocity = direction.perp() * orbital_speed;

        let mass = 0.5 + rng.gen::<f64>() * 2.0;
        world.create_body(direction * distance, velocity, 0.5, mass)?;
    }
    Ok(())
}
