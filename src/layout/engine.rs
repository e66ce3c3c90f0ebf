//! Layout computation engine
//!
//! Runs the stages in order and concatenates their geometry into one
//! draw-command list:
//!
//! 1. canvas background and title
//! 2. timeline header (column resolver)
//! 3. per goal: goal label, then per row the STC cell of a run that just
//!    closed, FTA cell, row background, gridlines, milestones; the block's
//!    last STC cell follows its last row
//! 4. term bands
//! 5. legend
//!
//! The vertical cursor is threaded explicitly from one goal block to the
//! next. Every stage is a pure function of its inputs.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::{Goal, Roadmap};
use crate::settings::Settings;

use super::columns::{resolve_columns, ColumnLayout};
use super::config::LayoutConfig;
use super::error::LayoutError;
use super::legend;
use super::milestones::place_milestones;
use super::rows::{stack_rows, StackedRow, StcCell};
use super::types::{BoundingBox, Color, DrawCommand, LayoutResult, TextStyle};
use super::validate_structure;
use super::warning::LayoutWarning;

/// Canvas background fill
pub const CANVAS_BACKGROUND: Color = Color::rgb(0xe0, 0xe0, 0xd0);
/// Fill of the 1pt vertical gridlines
pub const GRIDLINE: Color = Color::rgb(0xcc, 0xcc, 0xcc);

const HEADER_GUTTER_LABEL: &str = "Fiscal Years \u{2192}";

// Label frames inside the STC and FTA cells, relative to the cell
const STC_LABEL_INSET: f64 = 0.02;
const FTA_LABEL_DX: f64 = 0.25;
const FTA_LABEL_WIDTH: f64 = 0.5;
const CELL_LABEL_HEIGHT: f64 = 0.25;
const CELL_LABEL_LIFT: f64 = 0.1;

/// Compute the complete layout of a roadmap
///
/// Structural problems abort with [`LayoutError`] before anything is
/// emitted. Milestones that cannot be placed are skipped and reported in
/// [`LayoutResult::warnings`].
pub fn compute(roadmap: &Roadmap, config: &LayoutConfig) -> Result<LayoutResult, LayoutError> {
    validate_structure(roadmap)?;
    let columns = resolve_columns(&roadmap.timeline, config.grid_start())?;
    let settings = &roadmap.settings;

    let mut result = LayoutResult::new(config.canvas);
    result.push(DrawCommand::rect(
        BoundingBox::new(0.0, 0.0, config.canvas.width, config.canvas.height),
        CANVAS_BACKGROUND,
    ));
    result.push(
        TextStyle::new(24.0).bold().italic().centered().text(
            BoundingBox::new(0.0, config.title_top, config.canvas.width, config.title_height),
            settings.title.as_str(),
        ),
    );
    result.extend(header_commands(&columns, settings, config));
    result.warnings.extend(dangling_milestones(roadmap));

    let mut cursor = config.content_top;
    for goal in &roadmap.goals {
        let block = layout_goal_block(goal, roadmap, &columns, cursor, config);
        debug!(
            goal = goal.id,
            top = cursor,
            bottom = block.bottom,
            commands = block.commands.len(),
            "stacked goal block"
        );
        result.extend(block.commands);
        result.warnings.extend(block.warnings);
        cursor = block.bottom;
    }

    let band_top = legend::band_top(cursor, config);
    for band in legend::term_bands(band_top, settings, config) {
        result.extend(band.commands());
    }
    result.extend(legend::legend(band_top, &roadmap.use_cases, settings, config));

    result.compute_bounds();
    for warning in &result.warnings {
        warn!(kind = %warning.kind, "{}", warning.message);
    }
    debug!(
        commands = result.commands.len(),
        warnings = result.warnings.len(),
        max_x = result.bounds.right(),
        max_y = result.bounds.bottom(),
        "layout complete"
    );
    Ok(result)
}

/// "Fiscal Years" gutter cell followed by one navy cell per column
fn header_commands(
    columns: &ColumnLayout,
    settings: &Settings,
    config: &LayoutConfig,
) -> Vec<DrawCommand> {
    let label = TextStyle::new(9.0).bold().color(Color::WHITE).centered();
    let gutter = BoundingBox::new(
        config.left_margin,
        config.header_top,
        config.label_gutter,
        config.header_height,
    );

    let mut commands = vec![
        DrawCommand::rect(gutter, settings.navy),
        label.text(gutter, HEADER_GUTTER_LABEL),
    ];
    for column in &columns.columns {
        let cell = BoundingBox::new(column.x, config.header_top, column.width, config.header_height);
        commands.push(DrawCommand::rect(cell, settings.navy));
        commands.push(label.text(cell, column.label.as_str()));
    }
    commands
}

/// Milestones whose row id matches no row
fn dangling_milestones(roadmap: &Roadmap) -> Vec<LayoutWarning> {
    let row_ids: HashSet<i64> = roadmap.rows.iter().map(|r| r.id).collect();
    roadmap
        .milestones
        .iter()
        .enumerate()
        .filter(|(_, m)| !row_ids.contains(&m.row_id))
        .map(|(index, m)| LayoutWarning::dangling(index, m.row_id, &m.text))
        .collect()
}

/// Geometry of one goal block
#[derive(Debug)]
struct GoalBlockLayout {
    commands: Vec<DrawCommand>,
    warnings: Vec<LayoutWarning>,
    bottom: f64,
}

fn layout_goal_block(
    goal: &Goal,
    roadmap: &Roadmap,
    columns: &ColumnLayout,
    top: f64,
    config: &LayoutConfig,
) -> GoalBlockLayout {
    let settings = &roadmap.settings;
    let mut commands = vec![TextStyle::new(12.0).bold().italic().centered().text(
        BoundingBox::new(0.0, top, config.canvas.width, config.goal_label_height),
        goal.name.as_str(),
    )];

    let rows: Vec<_> = roadmap.rows_for_goal(goal.id).collect();
    let block = stack_rows(&rows, top + config.goal_label_pitch);
    let mut warnings = block.warnings.clone();

    let mut cells = block.stc_cells.iter().peekable();
    for (index, row) in block.rows.iter().enumerate() {
        // The previous run closes where the next one begins
        if let Some(cell) = cells.next_if(|c| c.end_row() == index) {
            commands.extend(stc_cell_commands(cell, settings, config));
        }
        commands.extend(row_commands(row, columns, settings, config));

        let milestones = place_milestones(
            row,
            roadmap.milestones_for_row(row.row.id),
            columns,
            settings,
            config,
        );
        for placed in &milestones.placed {
            commands.extend(placed.commands(settings.milestone));
        }
        warnings.extend(milestones.warnings);
    }
    for cell in cells {
        commands.extend(stc_cell_commands(cell, settings, config));
    }

    GoalBlockLayout {
        commands,
        warnings,
        bottom: block.bottom,
    }
}

/// Merged navy STC cell with its label centered vertically
fn stc_cell_commands(cell: &StcCell, settings: &Settings, config: &LayoutConfig) -> [DrawCommand; 2] {
    let rect = BoundingBox::new(0.0, cell.top, config.stc_width, cell.height);
    let label = BoundingBox::new(
        STC_LABEL_INSET,
        cell.center_y() - CELL_LABEL_LIFT,
        config.stc_width - 2.0 * STC_LABEL_INSET,
        CELL_LABEL_HEIGHT,
    );
    [
        DrawCommand::rect(rect, settings.navy),
        TextStyle::new(9.0)
            .bold()
            .color(Color::WHITE)
            .centered()
            .text(label, cell.label.as_str()),
    ]
}

/// FTA cell, row background and one gridline per distinct column key
fn row_commands(
    row: &StackedRow<'_>,
    columns: &ColumnLayout,
    settings: &Settings,
    config: &LayoutConfig,
) -> Vec<DrawCommand> {
    let fta = BoundingBox::new(config.stc_width, row.top, config.fta_width, row.height);
    let fta_label = BoundingBox::new(
        config.stc_width + FTA_LABEL_DX,
        row.top + row.height / 2.0 - CELL_LABEL_LIFT,
        FTA_LABEL_WIDTH,
        CELL_LABEL_HEIGHT,
    );
    let background = BoundingBox::new(
        config.left_margin,
        row.top,
        columns.end_x() - config.left_margin,
        row.height,
    );

    let mut commands = vec![
        DrawCommand::rect(fta, settings.navy),
        TextStyle::new(11.0)
            .bold()
            .color(Color::WHITE)
            .centered()
            .text(fta_label, row.row.fta_label.as_str()),
        DrawCommand::rect(background, row.row.background.resolve(settings)),
    ];
    commands.extend(columns.key_positions().into_iter().map(|x| {
        DrawCommand::rect(
            BoundingBox::new(x, row.top, config.gridline_width, row.height),
            GRIDLINE,
        )
    }));
    commands
}
