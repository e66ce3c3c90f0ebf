//! Sample roadmap input, printed by `roadmap-layout --template`
//!
//! Carries the dummy data of the roadmap data-entry template: seven year
//! columns, two goals with six rows, and three use-case indicators.

use crate::error::LoadError;
use crate::model::{self, Roadmap};

pub const SAMPLE_ROADMAP: &str = r#"# Roadmap input. Colors are hex codes with or without a leading '#'.

# Header columns, left to right. The overflow column holds every later year.
timeline = [
    { label = "2023", width = 0.8 },
    { label = "2024", width = 0.8 },
    { label = "2025", width = 0.8 },
    { label = "2026", width = 0.8 },
    { label = "2027", width = 0.8 },
    { label = "2028", width = 0.8 },
    { label = "2029-2053", width = 1.8, is_overflow_column = true },
]

goals = [
    { id = 1, name = "Overarching goal 1" },
    { id = 2, name = "Overarching goal 2" },
]

# Adjacent rows with the same STC label share one merged cell.
# background is one of pink, purple, yellow.
rows = [
    { id = 1, stc_label = "STC1", fta_label = "FTA1", background = "pink", goal_id = 1, height = 0.6 },
    { id = 2, stc_label = "STC1", fta_label = "FTA2", background = "pink", goal_id = 1, height = 0.6 },
    { id = 3, stc_label = "STC3", fta_label = "FTA3", background = "purple", goal_id = 1, height = 0.6 },
    { id = 4, stc_label = "STC2", fta_label = "FTA4", background = "purple", goal_id = 1, height = 0.6 },
    { id = 5, stc_label = "STC4", fta_label = "FTA5", background = "yellow", goal_id = 2, height = 0.6 },
    { id = 6, stc_label = "STC4", fta_label = "FTA6", background = "yellow", goal_id = 2, height = 0.6 },
]

# vertical_offset is measured from the row top, in inches.
milestones = [
    { row_id = 1, year = 2024, vertical_offset = 0.15, text = "Critical Goal Text", is_critical = true },
    { row_id = 1, year = 2027, vertical_offset = 0.2, text = "Goal text" },
    { row_id = 1, year = 2028, vertical_offset = 0.35, text = "Goal text" },
    { row_id = 2, year = 2025, vertical_offset = 0.1, text = "Goal text" },
    { row_id = 2, year = 2026, vertical_offset = 0.08, text = "Critical Goal Text", is_critical = true },
    { row_id = 2, year = 2026, vertical_offset = 0.25, text = "Critical Goal Text", is_critical = true },
    { row_id = 2, year = 2026, vertical_offset = 0.42, text = "Critical Goal Text", is_critical = true },
    { row_id = 2, year = 2027, vertical_offset = 0.1, text = "Goal text" },
    { row_id = 2, year = 2029, vertical_offset = 0.25, text = "Critical Goal Text", is_critical = true },
    { row_id = 3, year = 2025, vertical_offset = 0.35, text = "Goal text" },
    { row_id = 3, year = 2026, vertical_offset = 0.1, text = "Goal text" },
    { row_id = 3, year = 2027, vertical_offset = 0.4, text = "Goal text" },
    { row_id = 3, year = 2028, vertical_offset = 0.15, text = "Goal text" },
    { row_id = 4, year = 2025, vertical_offset = 0.12, text = "Goal text" },
    { row_id = 4, year = 2027, vertical_offset = 0.22, text = "Critical Goal Text", is_critical = true },
    { row_id = 4, year = 2027, vertical_offset = 0.42, text = "Goal text" },
    { row_id = 5, year = 2024, vertical_offset = 0.12, text = "Goal text" },
    { row_id = 5, year = 2026, vertical_offset = 0.08, text = "Goal text" },
    { row_id = 5, year = 2026, vertical_offset = 0.28, text = "Goal text" },
    { row_id = 5, year = 2027, vertical_offset = 0.38, text = "Critical Goal Text", is_critical = true },
    { row_id = 6, year = 2023, vertical_offset = 0.2, text = "Goal text" },
    { row_id = 6, year = 2027, vertical_offset = 0.08, text = "Critical Goal Text", is_critical = true },
    { row_id = 6, year = 2027, vertical_offset = 0.25, text = "Goal text" },
    { row_id = 6, year = 2027, vertical_offset = 0.42, text = "Critical Goal Text", is_critical = true },
]

use_cases = [
    { id = "UC1, UC2, UC3, UC4", description = "All use cases", color = "F0C040" },
    { id = "UC1, UC2", description = "Use case 1 text, Use case 2 text", color = "E8A060" },
    { id = "UC2, UC4", description = "Use case 2 text, Use case 4 text", color = "F0D080" },
]

# Tables come after every top-level array; keys below belong to settings.
[settings]
title = "Dummy data Infrastructure Capstone Roadmap"
navy = "1A1A4E"
pink = "FFE0E0"
purple = "E0D8F0"
yellow = "FFF0D0"
milestone = "F0C040"
critical = "CC0000"
near_term = "555555"
mid_term = "C8A080"
far_term = "E8D8C8"
"#;

/// Parse [`SAMPLE_ROADMAP`]
pub fn sample_roadmap() -> Result<Roadmap, LoadError> {
    model::from_toml_str(SAMPLE_ROADMAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let roadmap = sample_roadmap().unwrap();
        assert_eq!(roadmap.timeline.len(), 7);
        assert!(roadmap.timeline[6].is_overflow_column);
        assert_eq!(roadmap.goals.len(), 2);
        assert_eq!(roadmap.rows.len(), 6);
        assert_eq!(roadmap.milestones.len(), 24);
        assert_eq!(roadmap.use_cases.len(), 3);
        assert_eq!(
            roadmap.settings.title,
            "Dummy data Infrastructure Capstone Roadmap"
        );
        assert_eq!(roadmap.milestones.iter().filter(|m| m.is_critical).count(), 9);
        assert_eq!(roadmap.settings.mid_term.to_string(), "#C8A080");
    }

    #[test]
    fn test_sample_lays_out_every_row() {
        let roadmap = sample_roadmap().unwrap();
        let result = crate::layout::compute(&roadmap, &crate::layout::LayoutConfig::default()).unwrap();
        assert!(result.warnings.is_empty());

        let fta_labels = result
            .commands
            .iter()
            .filter(|c| matches!(c, crate::layout::DrawCommand::Text { text, .. } if text.starts_with("FTA")))
            .count();
        assert_eq!(fta_labels, 6);
    }
}
