//! Error types for loading roadmap input

use std::io;
use std::path::{Path, PathBuf};

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur while reading a roadmap or settings file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Source location of the error, when the parser reported one
    pub fn span(&self) -> Option<Span> {
        match self {
            LoadError::Toml(e) => e.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            LoadError::Toml(e) => match e.span() {
                Some(span) => (span, e.message().to_string()),
                None => return self.to_string(),
            },
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid roadmap input")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
