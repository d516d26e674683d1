//! Shared pieces of the planets sandbox
//!
//! This crate holds everything that is independent of how bodies are stored:
//! vector helpers, body identifiers, the error type and the camera rig that
//! maps between real (simulation) space and screen (pixel) space.

pub mod camera;
pub mod error;
pub mod geometry;

pub use camera::*;
pub use error::*;
pub use geometry::*;

use std::fmt;

/// Stable identifier of a body. Ids increase monotonically and are never
/// reused by the world that issued them, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u64);

impl BodyId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves a body id to its current real-space position.
///
/// The camera only ever holds an id for the body it follows and goes through
/// this trait at use time, so a removed body reads as `None` instead of a
/// dangling reference.
pub trait PositionLookup {
    fn position_of(&self, id: BodyId) -> Option<Vector2>;
}

/// Constants shared by the sandbox
pub mod constants {
    /// Newton's gravitational constant (scaled for the sandbox)
    pub const NEWTON_G: f64 = 10.0;

    /// Initial zoom exponent: zoom = 10^ZOOM_LINEAR pixels per real unit
    pub const DEFAULT_ZOOM_LINEAR: f64 = 1.0;

    /// Zoom exponent bound in both directions
    pub const MAX_ZOOM_LINEAR: f64 = 8.0;
}
