//! SVG chart generation for HTML reports and standalone `.svg` output.
//!
//! - viewBox-based scaling (renders at any size)
//! - Colors as CSS variables with hex fallbacks, so charts theme inside the
//!   HTML report and still render on their own
//! - Accessibility: `<title>` elements for screen readers and hover tooltips

mod builder;
mod cumulative_chart;
mod data;
mod element;
mod format;
mod heatmap_chart;
mod style;

pub use builder::SvgBuilder;
pub use cumulative_chart::CumulativeLineChart;
pub use data::DataPoint;
pub use element::{Cell, Label, Line, SvgElement};
pub use format::{format_number, format_thousands, html_escape};
pub use heatmap_chart::{HeatmapCalendar, level_color};
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
