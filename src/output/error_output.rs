//! Error and warning diagnostics on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use super::ColorMode;
use super::ansi;
use crate::InkstreakError;

#[derive(Debug, Clone, Copy)]
enum Severity {
    Error,
    Warning,
}

/// Diagnostic printer with color support.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(&self, err: &InkstreakError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    /// Writes a crate error with its type, detail and suggestion.
    pub fn write_error<W: Write>(&self, w: &mut W, err: &InkstreakError) {
        self.write_diagnostic(
            w,
            Severity::Error,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion().as_deref(),
        );
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_diagnostic(w, Severity::Warning, "Warning", message, detail, suggestion);
    }

    // Write failures are discarded: there is nowhere left to report them.
    fn write_diagnostic<W: Write>(
        &self,
        w: &mut W,
        severity: Severity,
        label: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (icon, color) = match severity {
            Severity::Error => ("✖", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
        };

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{color}{icon} {label}:{} {message}",
                ansi::BOLD,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{icon} {label}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Print an error with auto-detected color.
pub fn print_error_full(err: &InkstreakError) {
    ErrorOutput::stderr().print_error(err);
}

/// Print a warning with auto-detected color.
pub fn print_warning_full(message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    ErrorOutput::stderr().print_warning(message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
