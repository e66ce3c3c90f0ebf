//! Milestone placer: markers and labels inside a stacked row
//!
//! A milestone's y comes from its row top plus its vertical offset; its x from
//! the column resolver. Milestones are never nudged apart, so several markers
//! on the same year and offset overdraw in declaration order.

use crate::model::Milestone;
use crate::settings::Settings;

use super::columns::{ColumnLayout, YearPlacement};
use super::config::LayoutConfig;
use super::rows::StackedRow;
use super::types::{BoundingBox, Color, DrawCommand, Point, Size, TextStyle};
use super::warning::LayoutWarning;

/// Label color of non-critical milestones
pub const NEUTRAL_TEXT: Color = Color::rgb(0x33, 0x33, 0x33);

const LABEL_FONT_SIZE: f64 = 7.0;

/// A milestone with its resolved geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMilestone {
    /// Declaration index in the roadmap's milestone list
    pub index: usize,
    pub placement: YearPlacement,
    /// Square the triangle marker is inscribed in
    pub marker: BoundingBox,
    pub label: BoundingBox,
    pub text: String,
    pub label_color: Color,
}

impl PlacedMilestone {
    /// Marker then label, in emission order
    pub fn commands(&self, marker_fill: Color) -> [DrawCommand; 2] {
        [
            DrawCommand::triangle(self.marker, marker_fill),
            TextStyle::new(LABEL_FONT_SIZE)
                .color(self.label_color)
                .text(self.label, self.text.clone()),
        ]
    }
}

/// Result of placing one row's milestones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMilestones {
    pub placed: Vec<PlacedMilestone>,
    pub warnings: Vec<LayoutWarning>,
}

/// Place every milestone targeting `row`
///
/// `milestones` carries each milestone's declaration index, in declaration
/// order. Unresolvable years are reported and skipped. Offsets outside
/// `[0, row height]` are reported but the marker is still placed.
pub fn place_milestones<'m>(
    row: &StackedRow<'_>,
    milestones: impl IntoIterator<Item = (usize, &'m Milestone)>,
    columns: &ColumnLayout,
    settings: &Settings,
    config: &LayoutConfig,
) -> RowMilestones {
    let mut result = RowMilestones::default();

    for (index, milestone) in milestones {
        if !(0.0..=row.height).contains(&milestone.vertical_offset) {
            result.warnings.push(LayoutWarning::offset_outside_row(
                index,
                milestone.row_id,
                milestone.vertical_offset,
                row.height,
            ));
        }
        match place_one(row.top, milestone, columns, settings, config) {
            Some((placement, marker, label, label_color)) => {
                result.placed.push(PlacedMilestone {
                    index,
                    placement,
                    marker,
                    label,
                    text: milestone.text.clone(),
                    label_color,
                })
            }
            None => result.warnings.push(LayoutWarning::unresolvable(
                index,
                milestone.row_id,
                milestone.year,
                &milestone.text,
            )),
        }
    }

    result
}

fn place_one(
    row_top: f64,
    milestone: &Milestone,
    columns: &ColumnLayout,
    settings: &Settings,
    config: &LayoutConfig,
) -> Option<(YearPlacement, BoundingBox, BoundingBox, Color)> {
    let placement = columns.resolve_year(milestone.year)?;
    let x = match placement {
        YearPlacement::Column { x } => x + config.column_inset,
        YearPlacement::Overflow { x } => x + config.overflow_inset,
    };
    let y = row_top + milestone.vertical_offset;

    let marker = BoundingBox::from_origin(
        Point::new(x, y),
        Size::new(config.marker_size, config.marker_size),
    );
    let label = BoundingBox::from_origin(
        Point::new(x + config.milestone_label_gutter, y),
        config.milestone_label_size,
    );
    let label_color = if milestone.is_critical {
        settings.critical
    } else {
        NEUTRAL_TEXT
    };

    Some((placement, marker, label, label_color))
}
