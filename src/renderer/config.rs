//! Output options for the SVG renderer
//!
//! Layout geometry is in inches; the renderer only decides how those inches
//! become SVG user units and how the markup is formatted.

/// How a layout result is written as SVG
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// SVG user units per layout inch; 96 matches CSS pixels
    pub pixels_per_inch: f64,

    /// Emit the `<?xml ...?>` prolog, for writing a file rather than inlining
    pub standalone: bool,

    /// One element per line, indented under the root
    pub pretty_print: bool,

    /// Prepended to the `rect`, `text` and `triangle` class names
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            pixels_per_inch: 96.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("rm-".to_string()),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pixels_per_inch(mut self, ppi: f64) -> Self {
        self.pixels_per_inch = ppi;
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Bare `rect`/`text`/`triangle` class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_css_pixels() {
        let config = SvgConfig::default();
        assert_eq!(config.pixels_per_inch, 96.0);
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix.as_deref(), Some("rm-"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_pixels_per_inch(72.0)
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-");

        assert_eq!(config.pixels_per_inch, 72.0);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
        assert_eq!(config.without_class_prefix().class_prefix, None);
    }
}
