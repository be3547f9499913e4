//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Color specification supporting CSS variables for theming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#40c463")
    Hex(String),
    /// CSS variable with a hex fallback for standalone SVG
    /// (e.g., "level-2" → "var(--color-level-2, #40c463)")
    Themed { name: String, fallback: String },
}

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    #[must_use]
    pub fn themed(name: &str, fallback: &str) -> Self {
        Self::Themed {
            name: name.to_string(),
            fallback: fallback.to_string(),
        }
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::Themed { name, fallback } => format!("var(--color-{name}, {fallback})"),
        }
    }

    #[must_use]
    pub fn muted() -> Self {
        Self::themed("text-muted", "#64748b")
    }

    #[must_use]
    pub fn border() -> Self {
        Self::themed("border", "#e2e8f0")
    }

    #[must_use]
    pub fn primary() -> Self {
        Self::themed("chart-primary", "#6366f1")
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
