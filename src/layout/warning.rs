//! Non-fatal layout problems
//!
//! A warning means one record was skipped or looks suspicious; the rest of the
//! layout is still emitted.

use std::fmt;

/// A warning about a record the layout could not place cleanly
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutWarning {
    pub kind: WarningKind,
    /// Declaration index of the milestone, or row position within its goal block
    pub index: usize,
    pub message: String,
}

/// Category of layout warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Milestone year matches no column and is before the overflow threshold
    UnresolvableMilestonePlacement,
    /// Milestone references a row id that does not exist
    DanglingReference,
    /// Adjacent STC labels differ only in case or surrounding whitespace
    SuspiciousStcSplit,
    /// Milestone offset is negative or past its row's height; the marker is still drawn
    OffsetOutsideRow,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnresolvableMilestonePlacement => write!(f, "unresolvable-placement"),
            WarningKind::DanglingReference => write!(f, "dangling-reference"),
            WarningKind::SuspiciousStcSplit => write!(f, "suspicious-stc-split"),
            WarningKind::OffsetOutsideRow => write!(f, "offset-outside-row"),
        }
    }
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl LayoutWarning {
    pub fn unresolvable(index: usize, row_id: i64, year: i32, text: &str) -> Self {
        Self {
            kind: WarningKind::UnresolvableMilestonePlacement,
            index,
            message: format!(
                "milestone #{} \"{}\" on row {}: year {} matches no timeline column and is before the overflow column",
                index + 1,
                text,
                row_id,
                year
            ),
        }
    }

    pub fn dangling(index: usize, row_id: i64, text: &str) -> Self {
        Self {
            kind: WarningKind::DanglingReference,
            index,
            message: format!(
                "milestone #{} \"{}\" references unknown row {}",
                index + 1,
                text,
                row_id
            ),
        }
    }

    pub fn offset_outside_row(index: usize, row_id: i64, offset: f64, row_height: f64) -> Self {
        Self {
            kind: WarningKind::OffsetOutsideRow,
            index,
            message: format!(
                "milestone #{} on row {}: vertical offset {} is outside the row height {}",
                index + 1,
                row_id,
                offset,
                row_height
            ),
        }
    }

    /// `index` is the position of the second row in the goal's row list
    pub fn suspicious_split(index: usize, row_id: i64, previous: &str, current: &str) -> Self {
        Self {
            kind: WarningKind::SuspiciousStcSplit,
            index,
            message: format!(
                "row {}: STC label {:?} differs from previous {:?} only by case or whitespace; the labels are drawn as separate cells",
                row_id, current, previous
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let w = LayoutWarning::dangling(2, 42, "Goal text");
        insta::assert_snapshot!(
            w.to_string(),
            @r#"dangling-reference: milestone #3 "Goal text" references unknown row 42"#
        );
    }

    #[test]
    fn test_offset_outside_row_display() {
        let w = LayoutWarning::offset_outside_row(0, 3, 5.0, 0.6);
        insta::assert_snapshot!(
            w.to_string(),
            @"offset-outside-row: milestone #1 on row 3: vertical offset 5 is outside the row height 0.6"
        );
    }

    #[test]
    fn test_unresolvable_mentions_year() {
        let w = LayoutWarning::unresolvable(0, 1, 1999, "early");
        assert_eq!(w.kind, WarningKind::UnresolvableMilestonePlacement);
        assert!(w.message.contains("1999"));
        assert!(w.message.contains("row 1"));
    }
}
