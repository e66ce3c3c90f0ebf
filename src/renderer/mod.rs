//! SVG renderer for generating output from layout results
//!
//! This module takes a LayoutResult and produces an SVG string, scaling the
//! layout's inch coordinates by the configured pixels per inch.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
