//! Layout engine for roadmap slides
//!
//! This module takes a loaded [`Roadmap`] and computes absolute geometry,
//! producing a [`LayoutResult`] holding an ordered list of draw commands in
//! inches on a fixed 16:9 canvas.

pub mod columns;
pub mod config;
pub mod engine;
pub mod error;
pub mod legend;
pub mod milestones;
pub mod rows;
pub mod types;
pub mod warning;

pub use columns::{resolve_columns, ColumnLayout, YearPlacement};
pub use config::LayoutConfig;
pub use engine::compute;
pub use error::{EntityKind, LayoutError};
pub use types::*;
pub use warning::{LayoutWarning, WarningKind};

use std::collections::HashSet;

use crate::model::Roadmap;

/// Check goal and row structure before any geometry is computed
///
/// Goal and row ids must be unique, every row must belong to a declared goal
/// and have a positive finite height. Timeline checks run in the column
/// resolver.
pub fn validate_structure(roadmap: &Roadmap) -> Result<(), LayoutError> {
    let mut goal_ids = HashSet::new();
    for goal in &roadmap.goals {
        if !goal_ids.insert(goal.id) {
            return Err(LayoutError::invalid_input(
                EntityKind::Goal,
                goal.id,
                "duplicate goal id",
            ));
        }
    }

    let mut row_ids = HashSet::new();
    for row in &roadmap.rows {
        if !row_ids.insert(row.id) {
            return Err(LayoutError::invalid_input(
                EntityKind::Row,
                row.id,
                "duplicate row id",
            ));
        }
        if !row.height.is_finite() || row.height <= 0.0 {
            return Err(LayoutError::invalid_input(
                EntityKind::Row,
                row.id,
                format!("height must be a positive number, got {}", row.height),
            ));
        }
        if !goal_ids.contains(&row.goal_id) {
            return Err(LayoutError::invalid_input(
                EntityKind::Row,
                row.id,
                format!("references unknown goal {}", row.goal_id),
            ));
        }
    }
    Ok(())
}
