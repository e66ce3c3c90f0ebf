//! Roadmap data model
//!
//! Plain immutable records. Loading from TOML or JSON lives in [`load`];
//! structural validation is done by the layout engine, which is the only
//! consumer.

mod de;
pub mod load;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::layout::Color;
use crate::settings::Settings;

pub use load::{from_file, from_json_str, from_toml_str};

/// One timeline header column
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    /// Header text, a single year (`2023`) or a range (`2029-2053`)
    #[serde(alias = "Year", deserialize_with = "de::string_or_number")]
    pub label: String,
    /// Column width in inches
    #[serde(alias = "width_inches", alias = "Width (inches)")]
    pub width: f64,
    /// Marks the "this year onward" column; must be last when present
    #[serde(
        default,
        alias = "is_last_column",
        alias = "Is Last Column",
        deserialize_with = "de::yes_no"
    )]
    pub is_overflow_column: bool,
}

impl TimelineEntry {
    pub fn new(label: impl Into<String>, width: f64) -> Self {
        Self {
            label: label.into(),
            width,
            is_overflow_column: false,
        }
    }

    /// Flag this entry as the overflow column
    pub fn overflow(mut self) -> Self {
        self.is_overflow_column = true;
        self
    }

    /// Lookup key: the leading year of a ranged label, or the label itself
    pub fn year_key(&self) -> &str {
        self.label.split('-').next().unwrap_or_default().trim()
    }

    /// Numeric value of [`year_key`](Self::year_key), if it is one
    pub fn leading_year(&self) -> Option<i32> {
        self.year_key().parse().ok()
    }
}

/// An overarching goal heading one block of rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Goal {
    #[serde(alias = "Goal ID", deserialize_with = "de::whole_number")]
    pub id: i64,
    #[serde(alias = "Goal Name")]
    pub name: String,
}

impl Goal {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Background fill of a swim-lane row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum BackgroundColor {
    #[default]
    Pink,
    Purple,
    Yellow,
}

impl BackgroundColor {
    /// The concrete color for this key in the given settings
    pub fn resolve(&self, settings: &Settings) -> Color {
        match self {
            BackgroundColor::Pink => settings.pink,
            BackgroundColor::Purple => settings.purple,
            BackgroundColor::Yellow => settings.yellow,
        }
    }
}

impl FromStr for BackgroundColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pink" => Ok(BackgroundColor::Pink),
            "purple" => Ok(BackgroundColor::Purple),
            "yellow" => Ok(BackgroundColor::Yellow),
            other => Err(format!(
                "unknown background color '{}': expected pink, purple or yellow",
                other
            )),
        }
    }
}

impl TryFrom<String> for BackgroundColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundColor::Pink => write!(f, "pink"),
            BackgroundColor::Purple => write!(f, "purple"),
            BackgroundColor::Yellow => write!(f, "yellow"),
        }
    }
}

/// One swim-lane row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Row {
    #[serde(alias = "Row ID", deserialize_with = "de::whole_number")]
    pub id: i64,
    /// Strategic Test Capability label; adjacent equal labels merge
    #[serde(alias = "STC Label")]
    pub stc_label: String,
    /// Functional Test Area label
    #[serde(alias = "FTA Label")]
    pub fta_label: String,
    #[serde(default, alias = "Background Color")]
    pub background: BackgroundColor,
    #[serde(alias = "Goal ID", deserialize_with = "de::whole_number")]
    pub goal_id: i64,
    /// Row height in inches
    #[serde(alias = "height_inches", alias = "Row Height (inches)")]
    pub height: f64,
}

impl Row {
    pub fn new(id: i64, goal_id: i64, stc_label: impl Into<String>, height: f64) -> Self {
        Self {
            id,
            stc_label: stc_label.into(),
            fta_label: format!("FTA{}", id),
            background: BackgroundColor::default(),
            goal_id,
            height,
        }
    }

    pub fn with_background(mut self, background: BackgroundColor) -> Self {
        self.background = background;
        self
    }
}

/// A dated marker inside a row
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Milestone {
    #[serde(alias = "Row ID", deserialize_with = "de::whole_number")]
    pub row_id: i64,
    #[serde(alias = "Year", deserialize_with = "de::whole_number")]
    pub year: i32,
    /// Distance from the row top to the marker top, in inches
    #[serde(default, alias = "Vertical Offset")]
    pub vertical_offset: f64,
    #[serde(alias = "Text")]
    pub text: String,
    #[serde(default, alias = "Is Critical", deserialize_with = "de::yes_no")]
    pub is_critical: bool,
}

impl Milestone {
    pub fn new(row_id: i64, year: i32, vertical_offset: f64, text: impl Into<String>) -> Self {
        Self {
            row_id,
            year,
            vertical_offset,
            text: text.into(),
            is_critical: false,
        }
    }

    pub fn critical(mut self) -> Self {
        self.is_critical = true;
        self
    }
}

/// One legend indicator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UseCase {
    #[serde(alias = "Use Case ID")]
    pub id: String,
    #[serde(default, alias = "Description")]
    pub description: String,
    #[serde(alias = "Color")]
    pub color: Color,
}

impl UseCase {
    pub fn new(id: impl Into<String>, description: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            color,
        }
    }
}

/// Everything one layout pass consumes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Roadmap {
    pub settings: Settings,
    pub timeline: Vec<TimelineEntry>,
    pub goals: Vec<Goal>,
    pub rows: Vec<Row>,
    pub milestones: Vec<Milestone>,
    #[serde(alias = "usecases")]
    pub use_cases: Vec<UseCase>,
}

impl Roadmap {
    /// Rows of one goal block, in declared order
    pub fn rows_for_goal(&self, goal_id: i64) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |r| r.goal_id == goal_id)
    }

    /// Milestones of one row with their declaration index, in declared order
    pub fn milestones_for_row(&self, row_id: i64) -> impl Iterator<Item = (usize, &Milestone)> {
        self.milestones
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.row_id == row_id)
    }
}
