//! Tunables for the sandbox

use common::constants::{DEFAULT_ZOOM_LINEAR, NEWTON_G};
use common::Vector2;
use glam::DVec2;

/// Every knob the world, camera and controller read at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    pub gravitational_constant: f64,
    /// Plummer softening length; zero gives exact Newtonian forces
    pub softening: f64,
    pub substeps: u32,
    pub default_mass: f64,
    pub default_radius: f64,
    /// Velocity = (click point - body position) * velocity_scale
    pub velocity_scale: f64,
    pub screen_size: Vector2,
    pub fps: u32,
    pub zoom_linear: f64,
    pub scroll_zoom_step: f64,
    pub key_zoom_step: f64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: NEWTON_G,
            softening: 0.0,
            substeps: 10,
            default_mass: 100.0,
            default_radius: 1.0,
            velocity_scale: 1.0,
            screen_size: DVec2::new(500.0, 500.0),
            fps: 60,
            zoom_linear: DEFAULT_ZOOM_LINEAR,
            scroll_zoom_step: 0.10,
            key_zoom_step: 0.02,
        }
    }
}

impl SandboxConfig {
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_velocity_scale(mut self, scale: f64) -> Self {
        self.velocity_scale = scale;
        self
    }

    pub fn with_default_body(mut self, mass: f64, radius: f64) -> Self {
        self.default_mass = mass;
        self.default_radius = radius;
        self
    }

    pub fn with_screen_size(mut self, width: f64, height: f64) -> Self {
        self.screen_size = DVec2::new(width, height);
        self
    }

    /// Frame duration in seconds
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps.max(1) as f64
    }
}
