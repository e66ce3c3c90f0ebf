//! Roadmap Layout CLI
//!
//! Usage:
//!   roadmap-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>    Write output to a file instead of stdout
//!   -s, --settings <FILE>  Settings file replacing the input's settings (TOML)
//!   -f, --format <FORMAT>  Output format: svg (default) or json
//!   --strict               Exit with status 2 when any warning was produced
//!   -t, --template         Print a sample input file
//!   -d, --debug            Log stage summaries at debug level
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

use roadmap_layout::dump::LayoutDump;
use roadmap_layout::model::load::{self, InputFormat};
use roadmap_layout::{compute_layout, render_svg, sample, LoadError, RenderConfig, Settings};

#[derive(Parser)]
#[command(name = "roadmap-layout")]
#[command(about = "Lay out a multi-year roadmap slide from structured data")]
struct Cli {
    /// Input file, TOML or JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file replacing the input's title and colors (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Exit with status 2 when any milestone was skipped or row flagged
    #[arg(long)]
    strict: bool,

    /// Print a sample input file with dummy data
    #[arg(short, long)]
    template: bool,

    /// Log stage summaries at debug level
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "roadmap_layout=debug"
    } else {
        "roadmap_layout=info"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    // stdout carries the SVG or JSON
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.template {
        print!("{}", sample::SAMPLE_ROADMAP);
        return;
    }

    // No file and an interactive stdin: nothing to read
    if cli.input.is_none() && io::stdin().is_terminal() {
        let _ = Cli::command().print_help();
        return;
    }

    init_tracing(cli.debug);

    match run(&cli) {
        Ok(warnings) if cli.strict && warnings > 0 => {
            eprintln!("{} warning(s) in strict mode", warnings);
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}

/// Run the pipeline; returns the number of layout warnings
fn run(cli: &Cli) -> Result<usize, String> {
    let (source, name, format) = read_input(cli.input.as_deref())?;
    let roadmap = load::from_str(&source, format).map_err(|e| e.format(&source, &name))?;

    let mut config = RenderConfig::new();
    if let Some(path) = &cli.settings {
        config = config.with_settings(load_settings(path)?);
    }

    let result = compute_layout(&roadmap, &config).map_err(|e| format!("Error: {}", e))?;
    if result.exceeds_canvas() {
        warn!(
            max_x = result.bounds.right(),
            max_y = result.bounds.bottom(),
            "content extends past the {}x{} in canvas",
            result.canvas.width,
            result.canvas.height
        );
    }

    let rendered = match cli.format {
        OutputFormat::Svg => render_svg(&result, &config.svg),
        OutputFormat::Json => LayoutDump::from_result(&result)
            .to_json_pretty()
            .map_err(|e| format!("Error serializing layout: {}", e))?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .map_err(|e| format!("Error writing '{}': {}", path.display(), e))?;
            info!(path = %path.display(), commands = result.commands.len(), "wrote output");
        }
        None => println!("{}", rendered),
    }

    Ok(result.warnings.len())
}

/// Source text, display name and format of the input
fn read_input(path: Option<&Path>) -> Result<(String, String, InputFormat), String> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("Error: {}", LoadError::io(path, e)))?;
            Ok((source, path.display().to_string(), InputFormat::from_path(path)))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            let format = InputFormat::detect(&buffer);
            Ok((buffer, "<stdin>".to_string(), format))
        }
    }
}

fn load_settings(path: &Path) -> Result<Settings, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error loading settings: {}", LoadError::io(path, e)))?;
    source
        .parse::<Settings>()
        .map_err(|e| e.format(&source, &path.display().to_string()))
}
