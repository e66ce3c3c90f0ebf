//! Configuration for the layout engine
//!
//! Every offset here is a fixed constant of the roadmap template, in inches.
//! Content is never measured; text that does not fit its frame is the
//! renderer's concern.

use super::types::Size;

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Fixed target canvas (16:9 slide)
    pub canvas: Size,

    /// Top of the title text frame
    pub title_top: f64,
    /// Height of the title text frame
    pub title_height: f64,

    /// Top of the timeline header row
    pub header_top: f64,
    /// Height of the timeline header row
    pub header_height: f64,
    /// Left edge of the timeline grid (where row backgrounds start)
    pub left_margin: f64,
    /// Width of the "Fiscal Years" cell between the margin and the first column
    pub label_gutter: f64,

    /// Width of the merged STC label column
    pub stc_width: f64,
    /// Width of the per-row FTA label column
    pub fta_width: f64,
    /// Vertical cursor where the first goal block starts
    pub content_top: f64,
    /// Height of a goal title frame
    pub goal_label_height: f64,
    /// Cursor advance for a goal title (frame plus spacing)
    pub goal_label_pitch: f64,
    /// Width of the vertical gridline drawn at each column's left edge (1pt)
    pub gridline_width: f64,

    /// Side of the square a milestone triangle is inscribed in
    pub marker_size: f64,
    /// Horizontal inset of a marker from an exactly matched column's left edge
    pub column_inset: f64,
    /// Horizontal inset of a marker placed by the overflow rule
    pub overflow_inset: f64,
    /// Offset from marker left edge to its label's left edge
    pub milestone_label_gutter: f64,
    /// Milestone label frame size
    pub milestone_label_size: Size,

    /// Gap between the last goal block and the term bands
    pub band_gap: f64,
    /// Height shared by the three term bands
    pub band_height: f64,
    /// Gap between the term band top and the legend top
    pub legend_gap: f64,
    /// Left edge of the legend block
    pub legend_left: f64,
    /// Legend use-case captions, drawn one per line under the heading
    pub use_case_captions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(13.333, 7.5),
            title_top: 0.15,
            title_height: 0.5,
            header_top: 0.6,
            header_height: 0.3,
            left_margin: 1.4,
            label_gutter: 1.0,
            stc_width: 0.4,
            fta_width: 1.0,
            content_top: 0.95,
            goal_label_height: 0.25,
            goal_label_pitch: 0.3,
            gridline_width: 1.0 / 72.0,
            marker_size: 0.12,
            column_inset: 0.15,
            overflow_inset: 0.3,
            milestone_label_gutter: 0.14,
            milestone_label_size: Size::new(0.9, 0.15),
            band_gap: 0.1,
            band_height: 0.35,
            legend_gap: 0.5,
            legend_left: 0.3,
            use_case_captions: (1..=4)
                .map(|i| format!("UC{i} \u{2013} Use case {i} text"))
                .collect(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the first timeline column
    pub fn grid_start(&self) -> f64 {
        self.left_margin + self.label_gutter
    }

    /// Set the left margin of the timeline grid
    pub fn with_left_margin(mut self, margin: f64) -> Self {
        self.left_margin = margin;
        self
    }

    /// Set the marker insets for exact and overflow placements
    pub fn with_insets(mut self, column_inset: f64, overflow_inset: f64) -> Self {
        self.column_inset = column_inset;
        self.overflow_inset = overflow_inset;
        self
    }

    /// Replace the legend's use-case caption lines
    pub fn with_use_case_captions<I, S>(mut self, captions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_case_captions = captions.into_iter().map(Into::into).collect();
        self
    }
}
