//! Interaction controller
//!
//! Turns high-level user intents into world and camera operations. The
//! controller owns the world, the camera and the two numeric fields; its
//! mode is derived from them on demand. The world is only reachable
//! read-only from outside, and every intent first drops field focus that
//! has outlived the selection.
//!
//! Modes:
//! - `Neutral`: nothing selected. Clicks select, ctrl-clicks create.
//! - `Selected`: a body is selected and time is paused. Clicks set the
//!   body's velocity or focus a field.
//! - `EditingText`: a field of the selected body has focus and swallows
//!   keyboard input, including space.

use common::{arrow_polygon, corner_brackets, BodyId, CameraRig, SandboxError, Vector2};
use glam::DVec2;

use crate::config::SandboxConfig;
use crate::text_field::{Attribute, NumericField};
use crate::world::World;

/// Keys the controller reacts to. Modifier decoding is the shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Backspace,
    Enter,
    Char(char),
}

/// One user action, already decoded from raw window events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Primary click; `create` is set when the create modifier was held.
    LeftClick { screen: Vector2, create: bool },
    RightClick { screen: Vector2 },
    /// Pointer drag with the pan button held, in screen pixels
    Pan { delta: Vector2 },
    /// Wheel notches, positive zooms in
    Scroll { notches: f64 },
    /// A zoom key held for this frame
    ZoomKey { zoom_in: bool },
    Key(Key),
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Neutral,
    Selected(BodyId),
    EditingText(BodyId, Attribute),
}

const NEUTRAL_INSTRUCTIONS: &[&str] = &[
    "Hold middle-mouse button to pan.",
    "Press space to toggle time on/off.",
    "Press ctrl + left-click to create a new planet.",
    "Left-click on a planet to select it and edit its properties.",
    "Right-click on a planet to follow it.",
];

const SELECTED_INSTRUCTIONS: &[&str] = &[
    "Hold middle-mouse button to pan.",
    "Press space to deselect and toggle time on.",
    "Left-click to set the planet's velocity",
    "Press Esc to return.",
];

/// World + camera + fields, driven one intent at a time
pub struct Sandbox {
    world: World,
    camera: CameraRig,
    fields: [NumericField; 2],
    substeps: u32,
    scroll_zoom_step: f64,
    key_zoom_step: f64,
}

impl Sandbox {
    /// Empty sandbox
    pub fn new(config: &SandboxConfig) -> Result<Self, SandboxError> {
        Ok(Self::from_world(config, World::new(config)?))
    }

    /// Sandbox with one default body at the origin, as on startup
    pub fn with_default_body(config: &SandboxConfig) -> Result<Self, SandboxError> {
        let mut sandbox = Self::new(config)?;
        sandbox.world.create_default_body(DVec2::ZERO)?;
        Ok(sandbox)
    }

    /// Takes over a prepared world, e.g. one filled from a preset. The
    /// camera, fields and step settings come from `config`.
    pub fn from_world(config: &SandboxConfig, world: World) -> Self {
        let mut sandbox = Self {
            world,
            camera: CameraRig::with_zoom_linear(config.screen_size, config.zoom_linear),
            fields: [
                NumericField::new(Attribute::Mass, config.screen_size),
                NumericField::new(Attribute::Radius, config.screen_size),
            ],
            substeps: config.substeps,
            scroll_zoom_step: config.scroll_zoom_step,
            key_zoom_step: config.key_zoom_step,
        };
        if let Some(id) = sandbox.world.is_selected() {
            sandbox.load_fields(id);
        }
        sandbox
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn fields(&self) -> &[NumericField] {
        &self.fields
    }

    pub fn mode(&self) -> Mode {
        match self.world.is_selected() {
            None => Mode::Neutral,
            Some(id) => match self.focused_field() {
                Some(field) => Mode::EditingText(id, field.attribute()),
                None => Mode::Selected(id),
            },
        }
    }

    fn focused_field(&self) -> Option<&NumericField> {
        self.fields.iter().find(|field| field.is_focused())
    }

    fn is_editing_text(&self) -> bool {
        self.focused_field().is_some()
    }

    /// Advances the world by one frame if time is flowing.
    pub fn tick(&mut self, dt: f64) {
        self.camera.release_missing(&self.world);
        self.world.step_time(dt, self.substeps);
    }

    /// Fields only hold focus while their body is selected.
    fn blur_orphaned_fields(&mut self) {
        if self.world.is_selected().is_none() && self.is_editing_text() {
            log::debug!("Selection gone, dropping field focus");
            for field in &mut self.fields {
                field.blur();
            }
        }
    }

    /// Applies one intent. Errors are recoverable: state is left consistent
    /// and the caller decides whether to log them.
    pub fn handle(&mut self, intent: Intent) -> Result<(), SandboxError> {
        self.blur_orphaned_fields();
        match intent {
            Intent::LeftClick { screen, create } => self.left_click(screen, create),
            Intent::RightClick { screen } => self.right_click(screen),
            Intent::Pan { delta } => {
                self.camera.pan(delta);
                Ok(())
            }
            Intent::Scroll { notches } => {
                self.camera.zoom(notches * self.scroll_zoom_step);
                Ok(())
            }
            Intent::ZoomKey { zoom_in } => {
                if !self.is_editing_text() {
                    let sign = if zoom_in { 1.0 } else { -1.0 };
                    self.camera.zoom(sign * self.key_zoom_step);
                }
                Ok(())
            }
            Intent::Key(key) => self.key(key),
            Intent::Resize { width, height } => {
                let size = DVec2::new(width, height);
                self.camera.update_screen_size(size);
                for field in &mut self.fields {
                    field.relayout(size);
                }
                Ok(())
            }
        }
    }

    fn left_click(&mut self, screen: Vector2, create: bool) -> Result<(), SandboxError> {
        let real = self.camera.screen_to_real(screen, &self.world);

        match self.mode() {
            Mode::Neutral => match (self.world.hit_test(real), create) {
                (None, true) => {
                    self.world.create_default_body(real)?;
                }
                (Some(id), false) => self.select(id)?,
                _ => {}
            },
            Mode::Selected(_) | Mode::EditingText(..) => {
                if create {
                    return Ok(());
                }
                let mut on_field = false;
                for field in &mut self.fields {
                    on_field |= field.handle_click(screen);
                }
                if !on_field {
                    self.world.set_selected_velocity(real);
                }
            }
        }
        Ok(())
    }

    fn select(&mut self, id: BodyId) -> Result<(), SandboxError> {
        self.world.select(id)?;
        self.load_fields(id);
        Ok(())
    }

    fn load_fields(&mut self, id: BodyId) {
        if let Some(body) = self.world.body(id) {
            let (mass, radius) = (body.mass(), body.radius());
            for field in &mut self.fields {
                field.load(match field.attribute() {
                    Attribute::Mass => mass,
                    Attribute::Radius => radius,
                });
            }
        }
    }

    fn deselect(&mut self) {
        self.world.deselect();
        for field in &mut self.fields {
            field.blur();
        }
    }

    fn right_click(&mut self, screen: Vector2) -> Result<(), SandboxError> {
        let real = self.camera.screen_to_real(screen, &self.world);
        match self.world.hit_test(real) {
            Some(id) => self.camera.set_focus(id, &self.world),
            None => {
                self.camera.end_focus(&self.world);
                Ok(())
            }
        }
    }

    fn key(&mut self, key: Key) -> Result<(), SandboxError> {
        if key == Key::Escape {
            self.deselect();
            return Ok(());
        }

        if let Some(index) = self.fields.iter().position(NumericField::is_focused) {
            return self.edit_field(index, key);
        }

        if key == Key::Space {
            self.world.toggle_time();
        }
        Ok(())
    }

    fn edit_field(&mut self, index: usize, key: Key) -> Result<(), SandboxError> {
        let field = &mut self.fields[index];
        match key {
            Key::Char(c) => field.push(c),
            Key::Space => field.push(' '),
            Key::Backspace => field.backspace(),
            Key::Enter => {
                let value = field.commit().map_err(|err| {
                    log::warn!("Rejected input: {}", err);
                    err
                })?;
                let attribute = field.attribute();
                field.blur();
                match attribute {
                    Attribute::Mass => self.world.set_selected_mass(value)?,
                    Attribute::Radius => self.world.set_selected_radius(value)?,
                }
            }
            Key::Escape => {}
        }
        Ok(())
    }

    /// Removes a body, releasing the camera and selection first so neither
    /// refers to it afterwards.
    pub fn remove_body(&mut self, id: BodyId) -> Result<(), SandboxError> {
        let was_selected = self.world.is_selected() == Some(id);
        let body = self.world.remove_body(id)?;
        self.camera.forget_body(id, body.position);
        if was_selected {
            self.deselect();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Render queries

    pub fn real_to_screen(&self, p: Vector2) -> Vector2 {
        self.camera.real_to_screen(p, &self.world)
    }

    pub fn screen_to_real(&self, s: Vector2) -> Vector2 {
        self.camera.screen_to_real(s, &self.world)
    }

    pub fn camera_position(&self) -> Vector2 {
        self.camera.camera_position(&self.world)
    }

    /// Screen polygon of the selected body's velocity arrow
    pub fn velocity_arrow(&self) -> Option<[Vector2; 6]> {
        let body = self.world.selected_body()?;
        let tail = self.real_to_screen(body.position);
        let tip = body.position + body.velocity / self.world.velocity_scale();
        let tip = self.real_to_screen(tip);
        Some(arrow_polygon(tail, tip))
    }

    /// Screen polygons of the brackets around the followed body
    pub fn follow_highlight(&self) -> Option<[[Vector2; 6]; 4]> {
        let body = self.world.body(self.camera.is_following()?)?;
        let brackets = corner_brackets(body.position, body.radius());
        Some(brackets.map(|bracket| bracket.map(|p| self.real_to_screen(p))))
    }

    /// Help lines for the current mode
    pub fn instructions(&self) -> &'static [&'static str] {
        match self.mode() {
            Mode::Neutral => NEUTRAL_INSTRUCTIONS,
            Mode::Selected(_) | Mode::EditingText(..) => SELECTED_INSTRUCTIONS,
        }
    }
}
