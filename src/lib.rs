//! Roadmap Layout - multi-year roadmap slides from structured data
//!
//! This library loads a roadmap (timeline columns, goals, swim-lane rows,
//! milestones, use cases), lays it out on a fixed 16:9 canvas and renders
//! the resulting draw commands to SVG.
//!
//! # Example
//!
//! ```rust
//! use roadmap_layout::{render, sample::sample_roadmap};
//!
//! let roadmap = sample_roadmap().unwrap();
//! let output = render(&roadmap).unwrap();
//! assert!(output.svg.contains("<svg"));
//! assert!(output.warnings.is_empty());
//! ```

pub mod dump;
pub mod error;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod sample;
pub mod settings;

pub use error::LoadError;
pub use layout::{LayoutConfig, LayoutError, LayoutResult, LayoutWarning};
pub use model::Roadmap;
pub use renderer::{render_svg, SvgConfig};
pub use settings::Settings;

use std::borrow::Cow;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while reading input
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Replaces the roadmap's own settings when set
    pub settings: Option<Settings>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Override the title and palette carried by the input
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Output of the render pipeline
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub svg: String,
    /// Milestones skipped or rows flagged during layout
    pub warnings: Vec<LayoutWarning>,
}

/// Render a roadmap to SVG with default configuration
pub fn render(roadmap: &Roadmap) -> Result<RenderOutput, RenderError> {
    render_with_config(roadmap, RenderConfig::default())
}

/// Render a roadmap to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use roadmap_layout::{render_with_config, sample::sample_roadmap, RenderConfig, Settings, SvgConfig};
///
/// let settings = Settings { title: "FY roadmap".into(), ..Settings::default() };
/// let config = RenderConfig::new()
///     .with_settings(settings)
///     .with_svg(SvgConfig::default().with_standalone(false));
///
/// let output = render_with_config(&sample_roadmap().unwrap(), config).unwrap();
/// assert!(output.svg.starts_with("<svg"));
/// assert!(output.svg.contains("FY roadmap"));
/// ```
pub fn render_with_config(
    roadmap: &Roadmap,
    config: RenderConfig,
) -> Result<RenderOutput, RenderError> {
    let result = compute_layout(roadmap, &config)?;
    let svg = render_svg(&result, &config.svg);

    Ok(RenderOutput {
        svg,
        warnings: result.warnings,
    })
}

/// Lay out a roadmap, applying the settings override from `config`
pub fn compute_layout(roadmap: &Roadmap, config: &RenderConfig) -> Result<LayoutResult, LayoutError> {
    let roadmap = match &config.settings {
        Some(settings) => Cow::Owned(Roadmap {
            settings: settings.clone(),
            ..roadmap.clone()
        }),
        None => Cow::Borrowed(roadmap),
    };
    layout::compute(&roadmap, &config.layout)
}
