//! Primitive SVG elements: calendar cells, text labels, and lines.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A square calendar cell with a hover tooltip.
#[derive(Debug, Clone)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: ChartColor,
    pub tooltip: String,
}

impl SvgElement for Cell {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let tooltip = html_escape(&self.tooltip);
        format!(
            r#"<rect x="{}" y="{}" width="{size}" height="{size}" fill="{color}" rx="2">
    <title>{tooltip}</title>
</rect>"#,
            self.x,
            self.y,
            size = self.size
        )
    }
}

/// A short text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub font_size: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Start,
            color: ChartColor::muted(),
            font_size: 9.0,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

/// A polyline with optional filled area down to a baseline.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    /// Y-coordinate of the fill baseline. In SVG coordinates, higher values
    /// are lower on screen. No area is drawn when unset.
    pub baseline_y: Option<f64>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            fill_opacity: 0.1,
            baseline_y: None,
        }
    }

    #[must_use]
    pub const fn with_baseline_y(mut self, y: f64) -> Self {
        self.baseline_y = Some(y);
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        let mut output = String::new();

        if self.points.len() >= 2
            && let Some(baseline_y) = self.baseline_y
        {
            let first_x = self.points[0].0;
            let last_x = self.points[self.points.len() - 1].0;
            let _ = writeln!(
                output,
                r#"<path d="{path} L{last_x},{baseline_y} L{first_x},{baseline_y} Z" fill="{color}" fill-opacity="{}" stroke="none"/>"#,
                self.fill_opacity
            );
        }

        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        );

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
