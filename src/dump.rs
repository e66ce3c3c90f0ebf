//! Serializable view of a layout pass, for inspecting geometry as JSON

use serde::Serialize;

use crate::layout::{BoundingBox, DrawCommand, LayoutResult, TextAlign};

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub exceeds_canvas: bool,
    pub commands: Vec<CommandDump>,
    pub warnings: Vec<WarningDump>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandDump {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<String>,
    },
    Text {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: String,
        font_size: f64,
        bold: bool,
        italic: bool,
        color: String,
        align: TextAlign,
    },
    Triangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
}

#[derive(Debug, Serialize)]
pub struct WarningDump {
    pub kind: String,
    pub index: usize,
    pub message: String,
}

impl LayoutDump {
    pub fn from_result(result: &LayoutResult) -> Self {
        let commands = result.commands.iter().map(CommandDump::from).collect();
        let warnings = result
            .warnings
            .iter()
            .map(|w| WarningDump {
                kind: w.kind.to_string(),
                index: w.index,
                message: w.message.clone(),
            })
            .collect();

        LayoutDump {
            canvas_width: result.canvas.width,
            canvas_height: result.canvas.height,
            max_x: result.bounds.right(),
            max_y: result.bounds.bottom(),
            exceeds_canvas: result.exceeds_canvas(),
            commands,
            warnings,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&DrawCommand> for CommandDump {
    fn from(command: &DrawCommand) -> Self {
        let BoundingBox {
            x,
            y,
            width,
            height,
        } = command.bounds();

        match command {
            DrawCommand::FilledRect { fill, line, .. } => CommandDump::Rect {
                x,
                y,
                width,
                height,
                fill: fill.to_hex(),
                line: line.map(|c| c.to_hex()),
            },
            DrawCommand::Text {
                text,
                font_size,
                bold,
                italic,
                color,
                align,
                ..
            } => CommandDump::Text {
                x,
                y,
                width,
                height,
                text: text.clone(),
                font_size: *font_size,
                bold: *bold,
                italic: *italic,
                color: color.to_hex(),
                align: *align,
            },
            DrawCommand::Triangle { fill, .. } => CommandDump::Triangle {
                x,
                y,
                width,
                height,
                fill: fill.to_hex(),
            },
        }
    }
}
