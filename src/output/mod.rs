mod calendar;
mod error_output;
mod html;
mod html_template;
mod json;
mod markdown;
pub mod svg;
mod text;

pub use error_output::{ErrorOutput, print_error_full, print_warning_full};
pub use html::HtmlFormatter;
pub use json::{JsonFormatter, to_json};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use std::fmt;

use crate::error::{InkstreakError, Result};
use crate::stats::WritingReport;

/// Trait for rendering a writing report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &WritingReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
    Svg,
}

impl OutputFormat {
    /// Reject formats a command cannot produce.
    ///
    /// # Errors
    /// Returns a `Config` error naming the supported formats.
    pub fn ensure_supported(self, command: &str, supported: &[Self]) -> Result<()> {
        if supported.contains(&self) {
            return Ok(());
        }
        let names: Vec<String> = supported.iter().map(ToString::to_string).collect();
        Err(InkstreakError::Config(format!(
            "`{command}` does not support --format {self} (supported: {})",
            names.join(", ")
        )))
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Svg => "svg",
        };
        f.write_str(name)
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against stdout.
    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    /// Resolve against stderr.
    #[must_use]
    pub fn use_colors_on_stderr(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color, per https://no-color.org
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal(),
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
