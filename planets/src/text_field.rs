//! Numeric input boxes for editing a selected body's mass and radius

use common::{parse_positive, SandboxError, Vector2};
use glam::DVec2;

/// Which body attribute a field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Mass,
    Radius,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Mass => "mass",
            Attribute::Radius => "radius",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Attribute::Mass => "M=",
            Attribute::Radius => "R=",
        }
    }
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub top_left: Vector2,
    pub size: Vector2,
}

impl ScreenRect {
    pub fn contains(&self, point: Vector2) -> bool {
        let bottom_right = self.top_left + self.size;
        point.x >= self.top_left.x
            && point.x < bottom_right.x
            && point.y >= self.top_left.y
            && point.y < bottom_right.y
    }
}

const FIELD_SIZE: DVec2 = DVec2::new(200.0, 20.0);

/// One editable number.
///
/// `input` is what the user is typing; `committed` is the last accepted text
/// and is what `input` snaps back to when a commit fails.
#[derive(Debug, Clone)]
pub struct NumericField {
    attribute: Attribute,
    rect: ScreenRect,
    input: String,
    committed: String,
    focused: bool,
}

impl NumericField {
    /// Field laid out for a screen of `screen_size`; mass sits 30 px above
    /// the bottom edge and radius 60 px.
    pub fn new(attribute: Attribute, screen_size: Vector2) -> Self {
        Self {
            attribute,
            rect: Self::layout(attribute, screen_size),
            input: String::new(),
            committed: String::new(),
            focused: false,
        }
    }

    fn layout(attribute: Attribute, screen_size: Vector2) -> ScreenRect {
        let from_bottom = match attribute {
            Attribute::Mass => 30.0,
            Attribute::Radius => 60.0,
        };
        ScreenRect {
            top_left: DVec2::new(10.0, screen_size.y - from_bottom),
            size: FIELD_SIZE,
        }
    }

    pub fn relayout(&mut self, screen_size: Vector2) {
        self.rect = Self::layout(self.attribute, screen_size);
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Prompt plus current text, with a caret while focused
    pub fn display_text(&self) -> String {
        format!(
            "{}{}{}",
            self.attribute.prompt(),
            self.input,
            if self.focused { "|" } else { "" }
        )
    }

    /// Loads a value as both the committed and the editable text.
    pub fn load(&mut self, value: f64) {
        self.committed = value.to_string();
        self.input = self.committed.clone();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Focuses when `point` is inside the box, blurs otherwise.
    pub fn handle_click(&mut self, point: Vector2) -> bool {
        self.focused = self.rect.contains(point);
        self.focused
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Parses the typed text. On failure the text reverts to the last
    /// committed value and the field keeps focus.
    pub fn commit(&mut self) -> Result<f64, SandboxError> {
        match parse_positive(self.attribute.name(), &self.input) {
            Ok(value) => {
                self.load(value);
                Ok(value)
            }
            Err(err) => {
                self.input = self.committed.clone();
                Err(err)
            }
        }
    }
}
