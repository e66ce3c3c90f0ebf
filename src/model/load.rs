//! Reading a [`Roadmap`] from TOML or JSON
//!
//! Each sheet of the roadmap workbook maps to one top-level
//! key: `settings`, `timeline`, `goals`, `rows`, `milestones`, `use_cases`.

use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

use super::Roadmap;

/// Input encodings the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON; everything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Toml,
        }
    }

    /// Guess the format of unnamed input such as stdin
    ///
    /// A TOML document can never start with `{`.
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            InputFormat::Json
        } else {
            InputFormat::Toml
        }
    }
}

/// Parse a roadmap from a string in the given format
pub fn from_str(content: &str, format: InputFormat) -> Result<Roadmap, LoadError> {
    let roadmap = match format {
        InputFormat::Toml => from_toml_str(content)?,
        InputFormat::Json => from_json_str(content)?,
    };
    debug!(
        columns = roadmap.timeline.len(),
        goals = roadmap.goals.len(),
        rows = roadmap.rows.len(),
        milestones = roadmap.milestones.len(),
        use_cases = roadmap.use_cases.len(),
        "loaded roadmap"
    );
    Ok(roadmap)
}

pub fn from_toml_str(content: &str) -> Result<Roadmap, LoadError> {
    Ok(toml::from_str(content)?)
}

pub fn from_json_str(content: &str) -> Result<Roadmap, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a roadmap file, picking the format from its extension
pub fn from_file(path: &Path) -> Result<Roadmap, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    from_str(&content, InputFormat::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BackgroundColor, TimelineEntry};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a.toml")), InputFormat::Toml);
        assert_eq!(InputFormat::from_path(Path::new("roadmap")), InputFormat::Toml);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::detect("  {\"goals\": []}"), InputFormat::Json);
        assert_eq!(InputFormat::detect("[settings]\n"), InputFormat::Toml);
        assert_eq!(InputFormat::detect(""), InputFormat::Toml);
    }

    #[test]
    fn test_toml_with_template_column_names() {
        let roadmap = from_toml_str(
            r#"
[[timeline]]
"Year" = 2023
"Width (inches)" = 0.8
"Is Last Column" = "No"

[[timeline]]
"Year" = "2029-2053"
"Width (inches)" = 1.8
"Is Last Column" = "Yes"

[[rows]]
"Row ID" = 1
"STC Label" = "STC1"
"FTA Label" = "FTA1"
"Background Color" = "Purple"
"Goal ID" = 1
"Row Height (inches)" = 0.6
"#,
        )
        .expect("Should parse");

        assert_eq!(
            roadmap.timeline,
            vec![
                TimelineEntry::new("2023", 0.8),
                TimelineEntry::new("2029-2053", 1.8).overflow(),
            ]
        );
        assert_eq!(roadmap.rows[0].background, BackgroundColor::Purple);
        assert_eq!(roadmap.rows[0].height, 0.6);
    }

    #[test]
    fn test_json_roadmap() {
        let roadmap = from_json_str(
            r##"{
                "settings": { "title": "JSON roadmap" },
                "timeline": [{ "label": "2024", "width": 0.8 }],
                "goals": [{ "id": 1, "name": "Goal" }],
                "milestones": [
                    { "row_id": 1, "year": 2024, "vertical_offset": 0.1, "text": "x", "is_critical": true }
                ],
                "use_cases": [{ "id": "UC1", "color": "#F0C040" }]
            }"##,
        )
        .expect("Should parse");

        assert_eq!(roadmap.settings.title, "JSON roadmap");
        assert!(roadmap.milestones[0].is_critical);
        assert_eq!(roadmap.use_cases[0].description, "");
    }

    #[test]
    fn test_bad_background_is_an_error() {
        let result = from_toml_str(
            r#"
[[rows]]
id = 1
stc_label = "S"
fta_label = "F"
background = "green"
goal_id = 1
height = 0.6
"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, LoadError::Toml(_)));
        assert!(err.to_string().contains("unknown background color"));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        // Arrays nested under a [settings] header land in the wrong table
        let err = from_toml_str(
            r#"
[settings]
title = "Nested"
goals = [{ id = 1, name = "Goal" }]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Toml(_)));
        assert!(err.to_string().contains("unknown field `goals`"));

        let err = from_json_str(r#"{ "milestone": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().contains("milestone"));
    }

    #[test]
    fn test_spreadsheet_floats_for_ids_and_years() {
        let roadmap = from_json_str(
            r#"{
                "goals": [{ "Goal ID": 1.0, "Goal Name": "Goal" }],
                "rows": [{
                    "Row ID": 1.0, "STC Label": "STC1", "FTA Label": "FTA1",
                    "Background Color": "Pink", "Goal ID": 1.0, "Row Height (inches)": 0.6
                }],
                "milestones": [{
                    "Row ID": 1.0, "Year": 2023.0, "Vertical Offset": 0.1,
                    "Text": "Goal text", "Is Critical": "No"
                }]
            }"#,
        )
        .expect("Should parse");

        assert_eq!(roadmap.goals[0].id, 1);
        assert_eq!(roadmap.rows[0].goal_id, 1);
        assert_eq!(roadmap.milestones[0].row_id, 1);
        assert_eq!(roadmap.milestones[0].year, 2023);

        let err = from_json_str(
            r#"{ "milestones": [{ "row_id": 1, "year": 2023.5, "text": "x" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = from_file(Path::new("/nonexistent/roadmap.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
