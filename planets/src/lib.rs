//! 2D gravity sandbox
//!
//! Point-mass planets attract each other with Newtonian gravity while the
//! user selects them, drags out their velocities, edits mass and radius, and
//! pans, zooms or follows with the camera. Rendering and window handling are
//! left to the embedding shell: it feeds [`controller::Intent`]s in, calls
//! [`controller::Sandbox::tick`] once per frame and draws from the query
//! methods.

pub mod body;
pub mod config;
pub mod controller;
pub mod dynamics;
pub mod scenario;
pub mod text_field;
pub mod world;

pub use body::Body;
pub use config::SandboxConfig;
pub use controller::{Intent, Key, Mode, Sandbox};
pub use dynamics::{CentralGravity, Evolve, Kinematic, Linear};
pub use world::{BodySnapshot, Engine, World};
