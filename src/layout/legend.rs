//! Term bands and legend block
//!
//! Both sit below the last goal block. Every offset is a constant relative to
//! the band top or the legend anchor; nothing is sized from content.

use crate::model::UseCase;
use crate::settings::Settings;

use super::config::LayoutConfig;
use super::milestones::NEUTRAL_TEXT;
use super::types::{BoundingBox, Color, DrawCommand, TextStyle};

/// Fill of the STC legend swatch
pub const STC_SWATCH: Color = Color::rgb(0xc0, 0xa0, 0x80);

/// Planning horizon of a term band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Near,
    Mid,
    Far,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Near, Term::Mid, Term::Far];

    pub fn label(&self) -> &'static str {
        match self {
            Term::Near => "Near Term",
            Term::Mid => "Mid Term",
            Term::Far => "Far Term",
        }
    }

    /// (offset from the left margin, width); bands overlap by 0.1in
    fn extent(&self) -> (f64, f64) {
        match self {
            Term::Near => (0.0, 2.4),
            Term::Mid => (2.3, 2.0),
            Term::Far => (4.2, 3.4),
        }
    }

    fn colors(&self, settings: &Settings) -> (Color, Color) {
        match self {
            Term::Near => (settings.near_term, Color::WHITE),
            Term::Mid => (settings.mid_term, Color::WHITE),
            Term::Far => (settings.far_term, NEUTRAL_TEXT),
        }
    }
}

/// One resolved term band
#[derive(Debug, Clone, PartialEq)]
pub struct TermBand {
    pub term: Term,
    pub rect: BoundingBox,
    pub fill: Color,
    pub text_color: Color,
}

impl TermBand {
    pub fn commands(&self) -> [DrawCommand; 2] {
        [
            DrawCommand::rect(self.rect, self.fill),
            TextStyle::new(11.0)
                .bold()
                .italic()
                .color(self.text_color)
                .centered()
                .text(self.rect, self.term.label()),
        ]
    }
}

/// Top edge of the term bands given the bottom of the last goal block
pub fn band_top(content_bottom: f64, config: &LayoutConfig) -> f64 {
    content_bottom + config.band_gap
}

/// Near, mid and far bands starting at `top`
pub fn term_bands(top: f64, settings: &Settings, config: &LayoutConfig) -> Vec<TermBand> {
    Term::ALL
        .iter()
        .map(|&term| {
            let (offset, width) = term.extent();
            let (fill, text_color) = term.colors(settings);
            TermBand {
                term,
                rect: BoundingBox::new(
                    config.left_margin + offset,
                    top,
                    width,
                    config.band_height,
                ),
                fill,
                text_color,
            }
        })
        .collect()
}

// Offsets below are relative to the legend anchor (legend_left, legend_top).
const SWATCH_WIDTH: f64 = 1.3;
const SWATCH_HEIGHT: f64 = 0.2;
const STC_SWATCH_DY: f64 = 0.2;
const FTA_SWATCH_DY: f64 = 0.45;
const KEY_DY: f64 = 0.7;
const KEY_LABEL_DX: f64 = 0.15;
const USE_CASE_DX: f64 = 1.6;
const HEADING_DY: f64 = 0.2;
const CAPTION_DY: f64 = 0.35;
const CAPTION_PITCH: f64 = 0.15;
const CAPTION_WIDTH: f64 = 1.5;
const LINE_HEIGHT: f64 = 0.15;
const INDICATOR_DX: f64 = USE_CASE_DX + 1.7;
const INDICATOR_DY: f64 = 0.2;
const INDICATOR_PITCH: f64 = 0.2;
const INDICATOR_SIZE: f64 = 0.1;
const INDICATOR_LABEL_DX: f64 = 0.12;

/// Legend block draw commands, anchored `legend_gap` below the band top
pub fn legend(
    band_top: f64,
    use_cases: &[UseCase],
    settings: &Settings,
    config: &LayoutConfig,
) -> Vec<DrawCommand> {
    let top = band_top + config.legend_gap;
    let left = config.legend_left;
    let small = TextStyle::new(7.0);
    let swatch_caption = TextStyle::new(7.0).color(Color::WHITE).centered();

    let mut commands = vec![TextStyle::new(8.0)
        .bold()
        .italic()
        .text(BoundingBox::new(left, top, 1.0, 0.2), "LEGEND")];

    for (dy, fill, caption) in [
        (STC_SWATCH_DY, STC_SWATCH, "Strategic Test Capability"),
        (FTA_SWATCH_DY, settings.navy, "Functional Test Area"),
    ] {
        let rect = BoundingBox::new(left, top + dy, SWATCH_WIDTH, SWATCH_HEIGHT);
        commands.push(DrawCommand::rect(rect, fill));
        commands.push(swatch_caption.text(rect, caption));
    }

    commands.push(DrawCommand::triangle(
        BoundingBox::new(left, top + KEY_DY, config.marker_size, config.marker_size),
        settings.milestone,
    ));
    commands.push(small.text(
        BoundingBox::new(left + KEY_LABEL_DX, top + KEY_DY, 1.0, LINE_HEIGHT),
        "Key Milestone",
    ));

    let uc_left = left + USE_CASE_DX;
    commands.push(small.clone().bold().text(
        BoundingBox::new(uc_left, top + HEADING_DY, CAPTION_WIDTH, LINE_HEIGHT),
        "Use Cases:",
    ));
    commands.extend(config.use_case_captions.iter().enumerate().map(|(i, caption)| {
        small.text(
            BoundingBox::new(
                uc_left,
                top + CAPTION_DY + i as f64 * CAPTION_PITCH,
                CAPTION_WIDTH,
                LINE_HEIGHT,
            ),
            caption.as_str(),
        )
    }));

    let indicator_left = left + INDICATOR_DX;
    for (i, use_case) in use_cases.iter().enumerate() {
        let y = top + INDICATOR_DY + i as f64 * INDICATOR_PITCH;
        commands.push(DrawCommand::triangle(
            BoundingBox::new(indicator_left, y, INDICATOR_SIZE, INDICATOR_SIZE),
            use_case.color,
        ));
        commands.push(TextStyle::new(6.0).text(
            BoundingBox::new(indicator_left + INDICATOR_LABEL_DX, y, 1.2, 0.12),
            use_case.id.as_str(),
        ));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bands_share_height_and_top() {
        let config = LayoutConfig::default();
        let bands = term_bands(5.0, &Settings::default(), &config);

        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|b| b.rect.y == 5.0 && b.rect.height == 0.35));
        let xs: Vec<f64> = bands.iter().map(|b| b.rect.x).collect();
        assert!((xs[0] - 1.4).abs() < 1e-12);
        assert!((xs[1] - 3.7).abs() < 1e-12);
        assert!((xs[2] - 5.6).abs() < 1e-12);
        let widths: Vec<f64> = bands.iter().map(|b| b.rect.width).collect();
        assert_eq!(widths, vec![2.4, 2.0, 3.4]);
    }

    #[test]
    fn test_band_colors_follow_settings() {
        let settings = Settings::default();
        let bands = term_bands(0.0, &settings, &LayoutConfig::default());
        assert_eq!(bands[0].fill, settings.near_term);
        assert_eq!(bands[2].fill, settings.far_term);
        assert_eq!(bands[0].text_color, Color::WHITE);
        assert_eq!(bands[2].text_color, NEUTRAL_TEXT);
    }

    #[test]
    fn test_band_top_is_below_content() {
        assert_eq!(band_top(4.55, &LayoutConfig::default()), 4.55 + 0.1);
    }

    #[test]
    fn test_legend_fixed_entries_without_use_cases() {
        let commands = legend(5.0, &[], &Settings::default(), &LayoutConfig::default());
        // title, 2 swatches with captions, key marker + label, heading, 4 captions
        assert_eq!(commands.len(), 1 + 4 + 2 + 1 + 4);
        assert_eq!(commands[0].bounds(), BoundingBox::new(0.3, 5.5, 1.0, 0.2));
        assert_eq!(commands[5].kind(), "triangle");
    }

    #[test]
    fn test_use_case_indicators_stack_at_fixed_pitch() {
        let use_cases = vec![
            UseCase::new("UC1, UC2", "", Color::rgb(0xe8, 0xa0, 0x60)),
            UseCase::new("UC2, UC4", "", Color::rgb(0xf0, 0xd0, 0x80)),
        ];
        let commands = legend(5.0, &use_cases, &Settings::default(), &LayoutConfig::default());
        let indicators: Vec<&DrawCommand> = commands[12..].iter().collect();

        assert_eq!(indicators.len(), 4);
        let first = indicators[0].bounds();
        let second = indicators[2].bounds();
        assert!((first.x - 3.6).abs() < 1e-12);
        assert!((second.y - first.y - 0.2).abs() < 1e-12);
        match indicators[2] {
            DrawCommand::Triangle { fill, .. } => assert_eq!(*fill, use_cases[1].color),
            other => panic!("expected triangle, got {:?}", other),
        }
        match indicators[3] {
            DrawCommand::Text { text, font_size, .. } => {
                assert_eq!(text, "UC2, UC4");
                assert_eq!(*font_size, 6.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
