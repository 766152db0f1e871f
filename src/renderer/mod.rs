//! Rendering module
//!
//! The simulation never draws. Scenes issue commands against a [`Canvas`]
//! supplied by the host once per frame; [`DrawList`] is the recording
//! canvas used by the headless runner and the tests.

pub mod overlay;
pub mod shapes;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::color::Color;
use crate::sim::Rect;

/// Opaque image assets, resolved by name on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Image {
    Logo,
    Wasd,
    Spacebar,
    /// 50×50 life marker
    Heart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// Which point of the drawn item the given position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: u32,
    pub weight: FontWeight,
    pub anchor: Anchor,
}

impl TextStyle {
    pub const fn new(size: u32, weight: FontWeight, anchor: Anchor) -> Self {
        Self {
            size,
            weight,
            anchor,
        }
    }
}

/// A drawing surface owned by the host
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle, color: Color);
    /// Blit an image at its natural size
    fn draw_image(&mut self, image: Image, at: Point, anchor: Anchor);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
    FillEllipse {
        bounds: Rect,
        color: Color,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
        color: Color,
    },
    Image {
        image: Image,
        at: Point,
        anchor: Anchor,
    },
}

/// Canvas that records every call for later replay or inspection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Hand out the recorded frame and start a new one
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = Image> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { image, .. } => Some(*image),
            _ => None,
        })
    }

    pub fn count_polygons(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillPolygon { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { bounds, color });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style,
            color,
        });
    }

    fn draw_image(&mut self, image: Image, at: Point, anchor: Anchor) {
        self.commands.push(DrawCommand::Image { image, at, anchor });
    }
}
