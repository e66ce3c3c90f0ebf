//! Roadmap title and named color palette
//!
//! The set of keys is closed: every recognized setting is a named field with
//! a default. Keys may be written in snake_case (`near_term`) or with the
//! spreadsheet column names the roadmap template has always used
//! (`Near Term Color`). Unknown keys are rejected rather than ignored.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::LoadError;
use crate::layout::Color;

/// Title and colors read by every layout stage
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Centered title at the top of the canvas. Default `Roadmap`.
    #[serde(alias = "Title")]
    pub title: String,
    /// Header cells, STC/FTA label columns. Default `1A1A4E`.
    #[serde(alias = "Navy Color")]
    pub navy: Color,
    /// Row background for `pink` rows. Default `FFE0E0`.
    #[serde(alias = "Pink Background")]
    pub pink: Color,
    /// Row background for `purple` rows. Default `E0D8F0`.
    #[serde(alias = "Purple Background")]
    pub purple: Color,
    /// Row background for `yellow` rows. Default `FFF0D0`.
    #[serde(alias = "Yellow Background")]
    pub yellow: Color,
    /// Milestone triangle fill. Default `F0C040`.
    #[serde(alias = "Milestone Color")]
    pub milestone: Color,
    /// Label color of critical milestones. Default `CC0000`.
    #[serde(alias = "Critical Text Color")]
    pub critical: Color,
    /// Near term band. Default `555555`.
    #[serde(alias = "Near Term Color")]
    pub near_term: Color,
    /// Mid term band. Default `C8A080`.
    #[serde(alias = "Mid Term Color")]
    pub mid_term: Color,
    /// Far term band. Default `E8D8C8`.
    #[serde(alias = "Far Term Color")]
    pub far_term: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Roadmap".to_string(),
            navy: Color::rgb(0x1a, 0x1a, 0x4e),
            pink: Color::rgb(0xff, 0xe0, 0xe0),
            purple: Color::rgb(0xe0, 0xd8, 0xf0),
            yellow: Color::rgb(0xff, 0xf0, 0xd0),
            milestone: Color::rgb(0xf0, 0xc0, 0x40),
            critical: Color::rgb(0xcc, 0x00, 0x00),
            near_term: Color::rgb(0x55, 0x55, 0x55),
            mid_term: Color::rgb(0xc8, 0xa0, 0x80),
            far_term: Color::rgb(0xe8, 0xd8, 0xc8),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file whose top-level keys are setting names
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        content.parse()
    }
}

impl FromStr for Settings {
    type Err = LoadError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}
