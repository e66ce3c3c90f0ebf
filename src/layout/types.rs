//! Core types for the layout engine
//!
//! All coordinates are in inches, measured from the top-left corner of the
//! canvas. Font sizes are in points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::warning::LayoutWarning;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding box representing the spatial extent of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box from a top-left corner and a size
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}': expected six hex digits like 1A1A4E or #1A1A4E")]
pub struct ColorParseError {
    pub input: String,
}

/// An opaque RGB color
///
/// Parsed from and serialized to six-digit hex strings. A leading `#` is
/// accepted on input; output always carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form, as used in SVG attributes
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| err())
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Horizontal alignment of text inside its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One abstract drawing instruction with absolute canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle, optionally outlined
    FilledRect {
        rect: BoundingBox,
        fill: Color,
        line: Option<Color>,
    },
    /// Single-paragraph text frame
    Text {
        rect: BoundingBox,
        text: String,
        font_size: f64,
        bold: bool,
        italic: bool,
        color: Color,
        align: TextAlign,
    },
    /// Isosceles triangle pointing up, inscribed in `rect`
    Triangle { rect: BoundingBox, fill: Color },
}

impl DrawCommand {
    /// Unoutlined filled rectangle
    pub fn rect(rect: BoundingBox, fill: Color) -> Self {
        DrawCommand::FilledRect {
            rect,
            fill,
            line: None,
        }
    }

    pub fn triangle(rect: BoundingBox, fill: Color) -> Self {
        DrawCommand::Triangle { rect, fill }
    }

    /// The frame the command occupies
    pub fn bounds(&self) -> BoundingBox {
        match self {
            DrawCommand::FilledRect { rect, .. }
            | DrawCommand::Text { rect, .. }
            | DrawCommand::Triangle { rect, .. } => *rect,
        }
    }

    /// Short name of the command kind
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::FilledRect { .. } => "rect",
            DrawCommand::Text { .. } => "text",
            DrawCommand::Triangle { .. } => "triangle",
        }
    }
}

/// Builder for [`DrawCommand::Text`], defaulting to regular black left-aligned text
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    /// Produce the text command for `text` framed by `rect`
    pub fn text(&self, rect: BoundingBox, text: impl Into<String>) -> DrawCommand {
        DrawCommand::Text {
            rect,
            text: text.into(),
            font_size: self.font_size,
            bold: self.bold,
            italic: self.italic,
            color: self.color,
            align: self.align,
        }
    }
}

/// The complete result of one layout pass
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    /// Draw commands in emission (z-) order
    pub commands: Vec<DrawCommand>,
    /// Canvas-used box: origin to the furthest x and y reached
    pub bounds: BoundingBox,
    /// Fixed canvas the layout targets
    pub canvas: Size,
    /// Non-fatal problems encountered while placing content
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    pub fn new(canvas: Size) -> Self {
        Self {
            commands: Vec::new(),
            bounds: BoundingBox::zero(),
            canvas,
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    /// Recompute `bounds` as the max x/y reached by any command
    pub fn compute_bounds(&mut self) {
        let (max_x, max_y) = self
            .commands
            .iter()
            .map(|c| c.bounds())
            .fold((0.0_f64, 0.0_f64), |(x, y), b| {
                (x.max(b.right()), y.max(b.bottom()))
            });
        self.bounds = BoundingBox::new(0.0, 0.0, max_x, max_y);
    }

    /// Whether any content reaches past the fixed canvas
    pub fn exceeds_canvas(&self) -> bool {
        const EPSILON: f64 = 1e-9;
        self.bounds.right() > self.canvas.width + EPSILON
            || self.bounds.bottom() > self.canvas.height + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.right(), 4.0);
        assert_eq!(b.bottom(), 6.0);
        assert_eq!(
            BoundingBox::from_origin(Point::new(1.0, 2.0), Size::new(3.0, 4.0)),
            b
        );
    }

    #[test]
    fn test_color_parse_with_and_without_hash() {
        assert_eq!("1A1A4E".parse::<Color>().unwrap(), Color::rgb(0x1a, 0x1a, 0x4e));
        assert_eq!("#cc0000".parse::<Color>().unwrap(), Color::rgb(0xcc, 0, 0));
        assert_eq!(" F0C040 ".parse::<Color>().unwrap(), Color::rgb(0xf0, 0xc0, 0x40));
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        assert!("12345".parse::<Color>().is_err());
        assert!("GGGGGG".parse::<Color>().is_err());
        assert!("#1234567".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display_and_hex() {
        let c = Color::rgb(0x1a, 0x1a, 0x4e);
        assert_eq!(c.to_string(), "#1A1A4E");
        assert_eq!(c.to_hex(), "#1a1a4e");
    }

    #[test]
    fn test_compute_bounds_takes_max_extent() {
        let mut result = LayoutResult::new(Size::new(10.0, 5.0));
        result.push(DrawCommand::rect(BoundingBox::new(1.0, 1.0, 2.0, 2.0), Color::BLACK));
        result.push(DrawCommand::triangle(
            BoundingBox::new(4.0, 0.5, 0.5, 0.5),
            Color::WHITE,
        ));
        result.compute_bounds();
        assert_eq!(result.bounds, BoundingBox::new(0.0, 0.0, 4.5, 3.0));
        assert!(!result.exceeds_canvas());
    }

    #[test]
    fn test_exceeds_canvas() {
        let mut result = LayoutResult::new(Size::new(2.0, 2.0));
        result.push(DrawCommand::rect(BoundingBox::new(0.0, 1.5, 1.0, 1.0), Color::BLACK));
        result.compute_bounds();
        assert!(result.exceeds_canvas());
    }

    #[test]
    fn test_text_style_builder() {
        let cmd = TextStyle::new(9.0)
            .bold()
            .color(Color::WHITE)
            .centered()
            .text(BoundingBox::new(0.0, 0.0, 1.0, 0.3), "2023");
        match cmd {
            DrawCommand::Text {
                text,
                font_size,
                bold,
                italic,
                color,
                align,
                ..
            } => {
                assert_eq!(text, "2023");
                assert_eq!(font_size, 9.0);
                assert!(bold);
                assert!(!italic);
                assert_eq!(color, Color::WHITE);
                assert_eq!(align, TextAlign::Center);
            }
            other => panic!("expected text command, got {:?}", other),
        }
    }
}
