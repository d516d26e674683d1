//! Camera rig for the 2D sandbox
//!
//! Converts between real space (simulation units, y up) and screen space
//! (pixels, y down). The camera's real position is `pan_offset` plus the
//! position of the followed body, if any.

use glam::DVec2;

use crate::constants::{DEFAULT_ZOOM_LINEAR, MAX_ZOOM_LINEAR};
use crate::{BodyId, PositionLookup, SandboxError, Vector2};

/// Pan/zoom camera that can follow a body without visual jumps
#[derive(Debug, Clone)]
pub struct CameraRig {
    pan_offset: Vector2,
    zoom_linear: f64,
    zoom: f64,
    screen_size: Vector2,
    followed: Option<BodyId>,
}

impl CameraRig {
    pub fn new(screen_size: Vector2) -> Self {
        Self::with_zoom_linear(screen_size, DEFAULT_ZOOM_LINEAR)
    }

    pub fn with_zoom_linear(screen_size: Vector2, zoom_linear: f64) -> Self {
        let zoom_linear = zoom_linear.clamp(-MAX_ZOOM_LINEAR, MAX_ZOOM_LINEAR);
        Self {
            pan_offset: DVec2::ZERO,
            zoom_linear,
            zoom: 10f64.powf(zoom_linear),
            screen_size,
            followed: None,
        }
    }

    pub fn pan_offset(&self) -> Vector2 {
        self.pan_offset
    }

    /// Pixels per real-space unit
    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_linear(&self) -> f64 {
        self.zoom_linear
    }

    pub fn screen_size(&self) -> Vector2 {
        self.screen_size
    }

    pub fn update_screen_size(&mut self, screen_size: Vector2) {
        self.screen_size = screen_size;
    }

    pub fn is_following(&self) -> Option<BodyId> {
        self.followed
    }

    /// Real-space point shown at the screen center. A followed body that no
    /// longer exists contributes nothing; see [`CameraRig::release_missing`].
    pub fn camera_position(&self, bodies: &impl PositionLookup) -> Vector2 {
        self.pan_offset + self.follow_origin(bodies)
    }

    fn follow_origin(&self, bodies: &impl PositionLookup) -> Vector2 {
        match self.followed {
            Some(id) => bodies.position_of(id).unwrap_or(DVec2::ZERO),
            None => DVec2::ZERO,
        }
    }

    pub fn real_to_screen(&self, p: Vector2, bodies: &impl PositionLookup) -> Vector2 {
        let camera = self.camera_position(bodies);
        let half = self.screen_size / 2.0;
        DVec2::new(
            half.x + self.zoom * (p.x - camera.x),
            half.y - self.zoom * (p.y - camera.y),
        )
    }

    pub fn screen_to_real(&self, s: Vector2, bodies: &impl PositionLookup) -> Vector2 {
        let camera = self.camera_position(bodies);
        let half = self.screen_size / 2.0;
        DVec2::new(
            (s.x - half.x) / self.zoom + camera.x,
            -(s.y - half.y) / self.zoom + camera.y,
        )
    }

    /// Pans by a pointer movement given in screen pixels.
    pub fn pan(&mut self, screen_delta: Vector2) {
        self.pan_offset += DVec2::new(-screen_delta.x, screen_delta.y) / self.zoom;
    }

    /// Changes the zoom exponent. The factor is `10^zoom_linear`, so it stays
    /// positive; the exponent is clamped to keep coordinates representable.
    pub fn zoom(&mut self, linear_delta: f64) {
        self.zoom_linear =
            (self.zoom_linear + linear_delta).clamp(-MAX_ZOOM_LINEAR, MAX_ZOOM_LINEAR);
        self.zoom = 10f64.powf(self.zoom_linear);
    }

    /// Starts following `id` while keeping the camera where it is.
    ///
    /// Any previous follow is ended first so that both transitions are
    /// continuous.
    pub fn set_focus(
        &mut self,
        id: BodyId,
        bodies: &impl PositionLookup,
    ) -> Result<(), SandboxError> {
        let position = bodies.position_of(id).ok_or(SandboxError::NotFound(id))?;
        self.end_focus(bodies);
        self.pan_offset -= position;
        self.followed = Some(id);
        log::debug!("Camera following body {}", id);
        Ok(())
    }

    /// Stops following. No-op when nothing is followed.
    pub fn end_focus(&mut self, bodies: &impl PositionLookup) {
        if let Some(id) = self.followed.take() {
            match bodies.position_of(id) {
                Some(position) => self.pan_offset += position,
                None => log::warn!("Ended follow of missing body {}; view may jump", id),
            }
            log::debug!("Camera released body {}", id);
        }
    }

    /// Drops the follow on a body that is about to disappear, using its last
    /// known position so the view stays put.
    pub fn forget_body(&mut self, id: BodyId, last_position: Vector2) {
        if self.followed == Some(id) {
            self.pan_offset += last_position;
            self.followed = None;
            log::debug!("Camera released removed body {}", id);
        }
    }

    /// Drops a follow whose body has vanished without going through
    /// [`CameraRig::forget_body`]. The view keeps showing `pan_offset`, which
    /// is what it already showed once the body was gone.
    pub fn release_missing(&mut self, bodies: &impl PositionLookup) {
        if let Some(id) = self.followed {
            if bodies.position_of(id).is_none() {
                log::warn!("Followed body {} no longer exists, releasing camera", id);
                self.followed = None;
            }
        }
    }
}
