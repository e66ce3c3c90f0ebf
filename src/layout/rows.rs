//! Row stacker: vertical placement of one goal block
//!
//! Rows are stacked in declared order from a starting cursor. Contiguous rows
//! with the same STC label share one merged label cell spanning their
//! combined height. Label equality is exact; no trimming or case folding.

use crate::model::Row;

use super::warning::LayoutWarning;

/// A row with its resolved vertical extent
#[derive(Debug, Clone, PartialEq)]
pub struct StackedRow<'a> {
    pub row: &'a Row,
    pub top: f64,
    pub height: f64,
}

impl StackedRow<'_> {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A merged STC label cell covering one run of rows
#[derive(Debug, Clone, PartialEq)]
pub struct StcCell {
    pub label: String,
    pub top: f64,
    pub height: f64,
    /// Index of the first row of the run within the block
    pub first_row: usize,
    pub row_count: usize,
}

impl StcCell {
    /// Index of the first row after the run
    pub fn end_row(&self) -> usize {
        self.first_row + self.row_count
    }

    /// Vertical center, where the label is anchored
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Output of the row stacker for one goal block
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBlock<'a> {
    pub rows: Vec<StackedRow<'a>>,
    pub stc_cells: Vec<StcCell>,
    /// Cursor the block started at
    pub top: f64,
    /// Cursor after the last row
    pub bottom: f64,
    pub warnings: Vec<LayoutWarning>,
}

/// Stack `rows` starting at cursor `top`
pub fn stack_rows<'a>(rows: &[&'a Row], top: f64) -> StackedBlock<'a> {
    let stacked: Vec<StackedRow<'a>> = rows
        .iter()
        .copied()
        .scan(top, |cursor, row| {
            let placed = StackedRow {
                row,
                top: *cursor,
                height: row.height,
            };
            *cursor += row.height;
            Some(placed)
        })
        .collect();

    let bottom = stacked.last().map_or(top, StackedRow::bottom);

    StackedBlock {
        stc_cells: merge_stc_runs(&stacked),
        warnings: check_suspicious_splits(rows),
        rows: stacked,
        top,
        bottom,
    }
}

/// Fold rows into closed runs of identical STC labels
fn merge_stc_runs(rows: &[StackedRow<'_>]) -> Vec<StcCell> {
    rows.iter()
        .enumerate()
        .fold(Vec::new(), |mut cells: Vec<StcCell>, (index, placed)| {
            match cells.last_mut() {
                Some(cell) if cell.label == placed.row.stc_label => {
                    cell.height += placed.height;
                    cell.row_count += 1;
                }
                _ => cells.push(StcCell {
                    label: placed.row.stc_label.clone(),
                    top: placed.top,
                    height: placed.height,
                    first_row: index,
                    row_count: 1,
                }),
            }
            cells
        })
}

fn check_suspicious_splits(rows: &[&Row]) -> Vec<LayoutWarning> {
    rows.windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let (prev, cur) = (&pair[0].stc_label, &pair[1].stc_label);
            let looks_same = prev != cur && prev.trim().eq_ignore_ascii_case(cur.trim());
            looks_same.then(|| LayoutWarning::suspicious_split(index + 1, pair[1].id, prev, cur))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::warning::WarningKind;
    use pretty_assertions::assert_eq;

    fn rows(spec: &[(&str, f64)]) -> Vec<Row> {
        spec.iter()
            .enumerate()
            .map(|(i, (label, h))| Row::new(i as i64 + 1, 1, *label, *h))
            .collect()
    }

    fn refs(rows: &[Row]) -> Vec<&Row> {
        rows.iter().collect()
    }

    #[test]
    fn test_rows_stack_without_gaps() {
        let input = rows(&[("A", 0.6), ("B", 0.4), ("C", 0.75)]);
        let block = stack_rows(&refs(&input), 1.25);

        assert_eq!(block.rows[0].top, 1.25);
        for pair in block.rows.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        let heights: Vec<f64> = block.rows.iter().map(|r| r.height).collect();
        assert_eq!(heights, vec![0.6, 0.4, 0.75]);
        assert!((block.bottom - (1.25 + 0.6 + 0.4 + 0.75)).abs() < 1e-12);
    }

    #[test]
    fn test_contiguous_run_merges_into_one_cell() {
        let input = rows(&[("STC1", 0.6), ("STC1", 0.5), ("STC1", 0.4)]);
        let block = stack_rows(&refs(&input), 0.0);

        assert_eq!(block.stc_cells.len(), 1);
        let cell = &block.stc_cells[0];
        assert_eq!(cell.label, "STC1");
        assert_eq!(cell.top, 0.0);
        assert!((cell.height - 1.5).abs() < 1e-12);
        assert_eq!((cell.first_row, cell.row_count), (0, 3));
    }

    #[test]
    fn test_broken_run_produces_separate_cells() {
        let input = rows(&[("A", 0.6), ("B", 0.6), ("A", 0.6)]);
        let block = stack_rows(&refs(&input), 0.0);

        let labels: Vec<&str> = block.stc_cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "A"]);
        assert!((block.stc_cells[2].top - 1.2).abs() < 1e-12);
        assert_eq!(block.stc_cells[1].end_row(), 2);
    }

    #[test]
    fn test_single_row_run_still_emits_cell() {
        let input = rows(&[("STC1", 0.6), ("STC1", 0.6), ("STC3", 0.6), ("STC2", 0.6)]);
        let block = stack_rows(&refs(&input), 0.0);

        let counts: Vec<usize> = block.stc_cells.iter().map(|c| c.row_count).collect();
        assert_eq!(counts, vec![2, 1, 1]);
        assert_eq!(block.stc_cells[0].center_y(), 0.6);
    }

    #[test]
    fn test_empty_block() {
        let block = stack_rows(&[], 3.0);
        assert!(block.rows.is_empty());
        assert!(block.stc_cells.is_empty());
        assert_eq!(block.bottom, 3.0);
    }

    #[test]
    fn test_whitespace_difference_splits_and_warns() {
        let input = rows(&[("STC1", 0.6), ("STC1 ", 0.6), ("stc1", 0.6)]);
        let block = stack_rows(&refs(&input), 0.0);

        assert_eq!(block.stc_cells.len(), 3);
        assert_eq!(block.warnings.len(), 2);
        assert!(block
            .warnings
            .iter()
            .all(|w| w.kind == WarningKind::SuspiciousStcSplit));
        assert_eq!(block.warnings[0].index, 1);
        assert!(block.warnings[0].message.contains("row 2"));
    }

    #[test]
    fn test_distinct_labels_do_not_warn() {
        let input = rows(&[("STC1", 0.6), ("STC2", 0.6)]);
        assert!(stack_rows(&refs(&input), 0.0).warnings.is_empty());
    }
}
