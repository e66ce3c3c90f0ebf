//! Column resolver: timeline entries to x-offsets
//!
//! Columns are laid out left to right from the grid start. Each column is
//! looked up by its year key (the leading year of a ranged label). Years
//! beyond the enumerated columns fall back to the overflow column.

use std::collections::{HashMap, HashSet};

use crate::model::TimelineEntry;

use super::error::{EntityKind, LayoutError};

/// One resolved timeline column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub key: String,
    pub x: f64,
    pub width: f64,
}

/// The column that catches years past the enumerated ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowColumn {
    /// Index into [`ColumnLayout::columns`]
    pub index: usize,
    pub x: f64,
    pub width: f64,
    /// Years at or past this value resolve here; `None` if the label has no numeric year
    pub threshold: Option<i32>,
    /// Whether the input flagged this column, as opposed to defaulting to the last one
    pub flagged: bool,
}

/// Where a milestone year landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YearPlacement {
    /// Year matched a column key; `x` is that column's left edge
    Column { x: f64 },
    /// Year fell past the overflow threshold; `x` is the overflow column's left edge
    Overflow { x: f64 },
}

/// Output of the column resolver
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub columns: Vec<Column>,
    /// Left edge of the first column
    pub start_x: f64,
    /// Sum of all column widths
    pub total_width: f64,
    pub overflow: Option<OverflowColumn>,
    positions: HashMap<String, f64>,
}

impl ColumnLayout {
    /// Right edge of the last column
    pub fn end_x(&self) -> f64 {
        self.start_x + self.total_width
    }

    /// Left edge of the column keyed by `key`
    ///
    /// When two columns share a key, the later one wins.
    pub fn x_for_key(&self, key: &str) -> Option<f64> {
        self.positions.get(key).copied()
    }

    /// One x per distinct key, in first-appearance order
    ///
    /// A duplicated key contributes only the position lookups resolve to.
    pub fn key_positions(&self) -> Vec<f64> {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .filter(|c| seen.insert(c.key.as_str()))
            .filter_map(|c| self.x_for_key(&c.key))
            .collect()
    }

    /// Resolve a year by exact key, then by the overflow rule
    pub fn resolve_year(&self, year: i32) -> Option<YearPlacement> {
        if let Some(x) = self.x_for_key(&year.to_string()) {
            return Some(YearPlacement::Column { x });
        }
        let overflow = self.overflow?;
        match overflow.threshold {
            Some(threshold) if year >= threshold => Some(YearPlacement::Overflow { x: overflow.x }),
            _ => None,
        }
    }
}

/// Lay out timeline columns starting at `start_x`
///
/// Fails when a width is not a positive finite number, when more than one
/// column is flagged as overflow, or when the flagged column is not last.
pub fn resolve_columns(
    entries: &[TimelineEntry],
    start_x: f64,
) -> Result<ColumnLayout, LayoutError> {
    validate_timeline(entries)?;

    let columns: Vec<Column> = entries
        .iter()
        .scan(start_x, |x, entry| {
            let column = Column {
                label: entry.label.clone(),
                key: entry.year_key().to_string(),
                x: *x,
                width: entry.width,
            };
            *x += entry.width;
            Some(column)
        })
        .collect();

    let total_width = entries.iter().map(|e| e.width).sum();

    let positions = columns
        .iter()
        .map(|c| (c.key.clone(), c.x))
        .collect::<HashMap<_, _>>();

    let flagged = entries.iter().position(|e| e.is_overflow_column);
    let overflow_index = flagged.or_else(|| entries.len().checked_sub(1));
    let overflow = overflow_index.map(|index| OverflowColumn {
        index,
        x: columns[index].x,
        width: columns[index].width,
        threshold: entries[index].leading_year(),
        flagged: flagged.is_some(),
    });

    Ok(ColumnLayout {
        columns,
        start_x,
        total_width,
        overflow,
        positions,
    })
}

fn validate_timeline(entries: &[TimelineEntry]) -> Result<(), LayoutError> {
    for entry in entries {
        if !(entry.width.is_finite() && entry.width > 0.0) {
            return Err(LayoutError::invalid_input(
                EntityKind::TimelineColumn,
                &entry.label,
                format!("width must be positive, got {}", entry.width),
            ));
        }
    }

    let mut flagged = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_overflow_column);
    if let Some((index, first)) = flagged.next() {
        if let Some((_, second)) = flagged.next() {
            return Err(LayoutError::invalid_input(
                EntityKind::TimelineColumn,
                &second.label,
                format!(
                    "more than one overflow column (already flagged '{}')",
                    first.label
                ),
            ));
        }
        if index + 1 != entries.len() {
            return Err(LayoutError::invalid_input(
                EntityKind::TimelineColumn,
                &first.label,
                "overflow column must be the last timeline entry",
            ));
        }
    }
    Ok(())
}
