//! Integration tests for the load, layout and render pipeline

use roadmap_layout::dump::LayoutDump;
use roadmap_layout::layout::{compute, LayoutConfig};
use roadmap_layout::model::{from_json_str, from_toml_str};
use roadmap_layout::sample::{sample_roadmap, SAMPLE_ROADMAP};
use roadmap_layout::{render, render_with_config, LoadError, RenderConfig, RenderError, SvgConfig};

/// Count occurrences of an element tag in an SVG string
fn count_tag(svg: &str, tag: &str) -> usize {
    svg.matches(&format!("<{} ", tag)).count()
}

#[test]
fn test_sample_renders_to_svg() {
    let output = render(&sample_roadmap().unwrap()).expect("Should render");
    let svg = &output.svg;

    assert!(output.warnings.is_empty());
    assert!(svg.contains(r#"viewBox="0 0 1279.968 720""#));
    assert!(svg.contains("Dummy data Infrastructure Capstone Roadmap"));
    assert!(svg.contains("Fiscal Years \u{2192}"));
    assert!(svg.contains(">2029-2053</text>"));
    assert!(svg.contains(">Near Term</text>"));
    assert!(svg.contains(">UC1, UC2, UC3, UC4</text>"));
    assert_eq!(count_tag(svg, "polygon"), 28);
}

#[test]
fn test_svg_paints_in_command_order() {
    let result = compute(&sample_roadmap().unwrap(), &LayoutConfig::default()).unwrap();
    let svg = roadmap_layout::render_svg(&result, &SvgConfig::default());

    let elements = count_tag(&svg, "rect") + count_tag(&svg, "text") + count_tag(&svg, "polygon");
    assert_eq!(elements, result.commands.len());

    // Canvas background is painted first
    let first = svg.lines().nth(2).unwrap_or_default();
    assert!(first.contains(r##"fill="#e0e0d0""##), "{}", first);
}

#[test]
fn test_render_twice_is_identical() {
    let roadmap = sample_roadmap().unwrap();
    let first = render(&roadmap).unwrap();
    let second = render(&roadmap).unwrap();
    assert_eq!(first.svg, second.svg);
}

#[test]
fn test_json_and_toml_inputs_agree() {
    let json = r#"{
        "settings": { "title": "Same" },
        "timeline": [
            { "label": 2023, "width": 0.8 },
            { "label": "2029-2053", "width": 1.8, "is_overflow_column": "Yes" }
        ],
        "goals": [{ "id": 1, "name": "Goal" }],
        "rows": [{ "id": 1, "stc_label": "STC1", "fta_label": "FTA1", "background": "Purple", "goal_id": 1, "height": 0.6 }],
        "milestones": [{ "row_id": 1, "year": 2030, "vertical_offset": 0.2, "text": "Late", "is_critical": "No" }]
    }"#;
    let toml = r#"
settings = { title = "Same" }
timeline = [
    { label = "2023", width = 0.8 },
    { label = "2029-2053", width = 1.8, is_overflow_column = true },
]
goals = [{ id = 1, name = "Goal" }]
rows = [{ id = 1, stc_label = "STC1", fta_label = "FTA1", background = "purple", goal_id = 1, height = 0.6 }]
milestones = [{ row_id = 1, year = 2030, vertical_offset = 0.2, text = "Late" }]
"#;

    let from_json = from_json_str(json).unwrap();
    let from_toml = from_toml_str(toml).unwrap();
    assert_eq!(from_json, from_toml);
    assert_eq!(render(&from_json).unwrap().svg, render(&from_toml).unwrap().svg);
}

#[test]
fn test_layout_dump_lists_every_command() {
    let result = compute(&sample_roadmap().unwrap(), &LayoutConfig::default()).unwrap();
    let json = LayoutDump::from_result(&result).to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["commands"].as_array().map(Vec::len),
        Some(result.commands.len())
    );
    assert_eq!(value["commands"][0]["kind"], "rect");
    assert_eq!(value["commands"][1]["text"], "Dummy data Infrastructure Capstone Roadmap");
    assert_eq!(value["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_toml_error_report_points_at_source() {
    let source = SAMPLE_ROADMAP.replace("[settings]", "[settings");
    let err = from_toml_str(&source).unwrap_err();
    assert!(matches!(err, LoadError::Toml(_)));
    assert!(err.span().is_some());

    let report = err.format(&source, "roadmap.toml");
    assert!(report.contains("invalid roadmap input"));
    assert!(report.contains("roadmap.toml"));
}

#[test]
fn test_layout_error_surfaces_through_render() {
    let mut roadmap = sample_roadmap().unwrap();
    roadmap.goals.remove(1);
    let err = render_with_config(&roadmap, RenderConfig::new()).unwrap_err();
    assert!(matches!(err, RenderError::Layout(_)));
    assert!(err.to_string().contains("references unknown goal 2"));
}
