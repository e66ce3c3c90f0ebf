//! SVG generation from layout results

use crate::layout::{BoundingBox, Color, DrawCommand, LayoutResult, Point, TextAlign};

use super::SvgConfig;

/// Typographic points per inch
const POINTS_PER_INCH: f64 = 72.0;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Inches to user units
    fn px(&self, inches: f64) -> String {
        format_number(inches * self.config.pixels_per_inch)
    }

    /// Add a filled rectangle, optionally outlined
    pub fn add_rect(&mut self, rect: &BoundingBox, fill: Color, line: Option<Color>) {
        let stroke = line
            .map(|c| format!(r#" stroke="{}""#, c.to_hex()))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<rect class="{}rect" x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            self.indent_str(),
            self.prefix(),
            self.px(rect.x),
            self.px(rect.y),
            self.px(rect.width),
            self.px(rect.height),
            fill.to_hex(),
            stroke
        ));
    }

    /// Add an upward-pointing triangle inscribed in `rect`
    pub fn add_triangle(&mut self, rect: &BoundingBox, fill: Color) {
        let points = [
            Point::new(rect.x + rect.width / 2.0, rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        ];
        let points_str = points
            .iter()
            .map(|p| format!("{},{}", self.px(p.x), self.px(p.y)))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon class="{}triangle" points="{}" fill="{}"/>"#,
            self.indent_str(),
            self.prefix(),
            points_str,
            fill.to_hex()
        ));
    }

    /// Add a text frame, vertically centered in `rect`
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        rect: &BoundingBox,
        text: &str,
        font_size: f64,
        bold: bool,
        italic: bool,
        color: Color,
        align: TextAlign,
    ) {
        let (x, anchor) = match align {
            TextAlign::Left => (rect.x, "start"),
            TextAlign::Center => (rect.x + rect.width / 2.0, "middle"),
            TextAlign::Right => (rect.right(), "end"),
        };
        let size = format_number(font_size * self.config.pixels_per_inch / POINTS_PER_INCH);
        let weight = if bold { r#" font-weight="bold""# } else { "" };
        let style = if italic { r#" font-style="italic""# } else { "" };

        self.elements.push(format!(
            r#"{}<text class="{}text" x="{}" y="{}" text-anchor="{}" dominant-baseline="middle" font-size="{}"{}{} fill="{}">{}</text>"#,
            self.indent_str(),
            self.prefix(),
            self.px(x),
            self.px(rect.y + rect.height / 2.0),
            anchor,
            size,
            weight,
            style,
            color.to_hex(),
            escape_xml(text)
        ));
    }

    /// Build the final SVG string for a canvas of `width` x `height` inches
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let (w, h) = (self.px(width), self.px(height));
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Arial, Helvetica, sans-serif">"#
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a LayoutResult to an SVG string
///
/// Commands are written in emission order, so later commands paint over
/// earlier ones. The viewport is the fixed canvas.
pub fn render_svg(result: &LayoutResult, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for command in &result.commands {
        match command {
            DrawCommand::FilledRect { rect, fill, line } => builder.add_rect(rect, *fill, *line),
            DrawCommand::Triangle { rect, fill } => builder.add_triangle(rect, *fill),
            DrawCommand::Text {
                rect,
                text,
                font_size,
                bold,
                italic,
                color,
                align,
            } => builder.add_text(rect, text, *font_size, *bold, *italic, *color, *align),
        }
    }

    builder.build(result.canvas.width, result.canvas.height)
}

/// Round to three decimals and drop trailing zeros
fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
