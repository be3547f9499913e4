//! Cumulative word count line chart.

use std::fmt::Write;

use super::data::DataPoint;
use super::element::{Line, SvgElement};
use super::format::{format_number, format_thousands, html_escape};
use super::style::ChartColor;
use crate::snapshot::format_iso_date;
use crate::stats::CumulativePoint;

/// Maximum number of data points to display (downsample if exceeded).
pub const MAX_POINTS: usize = 60;

/// Vertical offset for X-axis labels below the chart baseline.
const X_LABEL_Y_OFFSET: f64 = 14.0;

/// Running total of words over the days that have snapshots.
///
/// Series longer than 60 points are downsampled, always keeping the first
/// and last day.
#[derive(Debug)]
pub struct CumulativeLineChart {
    data: Vec<DataPoint>,
    width: f64,
    height: f64,
    padding: f64,
    line_color: ChartColor,
}

impl CumulativeLineChart {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_points(points: &[CumulativePoint]) -> Self {
        let data = downsample(points, MAX_POINTS)
            .into_iter()
            .map(|p| DataPoint::new(p.date, p.cumulative as f64, p.daily))
            .collect();

        Self {
            data,
            width: 560.0,
            height: 220.0,
            padding: 50.0,
            line_color: ChartColor::primary(),
        }
    }

    #[must_use]
    pub const fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Draw dashed grid lines with Y-axis labels.
    fn draw_grid(&self, output: &mut String, chart_height: f64, max_value: f64, range: f64) {
        let grid_color = ChartColor::border().to_css();
        let label_color = ChartColor::muted().to_css();

        for i in 0..=4 {
            let y = (chart_height / 4.0).mul_add(f64::from(i), self.padding);
            let _ = writeln!(
                output,
                r#"    <line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{grid_color}" stroke-width="1" stroke-dasharray="4,4" opacity="0.5"/>"#,
                self.padding,
                self.width - self.padding
            );

            let label_value = max_value - (range * f64::from(i) / 4.0);
            #[allow(clippy::cast_possible_truncation)]
            let formatted = format_number(label_value.max(0.0) as i64);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{y}" text-anchor="end" fill="{label_color}" font-size="10" dominant-baseline="middle">{formatted}</text>"#,
                self.padding - 8.0
            );
        }
    }

    /// Draw points with tooltips and a sparse set of X-axis labels.
    fn draw_data_points(&self, output: &mut String, points: &[(f64, f64)], baseline_y: f64) {
        let point_color = self.line_color.to_css();
        let label_color = ChartColor::muted().to_css();
        let point_count = points.len();

        for (i, ((x, y), data)) in points.iter().zip(&self.data).enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let total = format_thousands(data.value as u64);
            let tooltip = html_escape(&format!(
                "{}: {total} words ({:+})",
                format_iso_date(data.date),
                data.delta
            ));

            let _ = writeln!(
                output,
                r#"    <circle cx="{x}" cy="{y}" r="3" fill="{point_color}" stroke="var(--color-card, white)" stroke-width="1.5">
        <title>{tooltip}</title>
    </circle>"#
            );

            if i == 0
                || i == point_count - 1
                || (point_count > 5 && i % (point_count / 5).max(1) == 0)
            {
                let _ = writeln!(
                    output,
                    r#"    <text x="{x}" y="{}" text-anchor="middle" fill="{label_color}" font-size="9">{}</text>"#,
                    baseline_y + X_LABEL_Y_OFFSET,
                    data.short_label()
                );
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_svg(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {w} {h}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(output, r"    <title>Cumulative Words</title>");

        if self.data.is_empty() {
            let text_color = ChartColor::muted().to_css();
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No writing recorded yet</text>"#,
                self.width / 2.0,
                self.height / 2.0
            );
            output.push_str("</svg>");
            return output;
        }

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let baseline_y = self.padding + chart_height;

        let max_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(f64::INFINITY, f64::min)
            .min(0.0);
        let range = (max_value - min_value).max(1.0);

        let x_step = if self.data.len() > 1 {
            chart_width / (self.data.len() - 1) as f64
        } else {
            0.0
        };

        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let x = x_step.mul_add(i as f64, self.padding);
                let normalized = (d.value - min_value) / range;
                (x, normalized.mul_add(-chart_height, baseline_y))
            })
            .collect();

        self.draw_grid(&mut output, chart_height, max_value, range);

        let line = Line::new(points.clone(), self.line_color.clone()).with_baseline_y(baseline_y);
        for line in line.render().lines() {
            let _ = writeln!(output, "    {line}");
        }

        self.draw_data_points(&mut output, &points, baseline_y);

        output.push_str("</svg>");
        output
    }
}

impl SvgElement for CumulativeLineChart {
    fn render(&self) -> String {
        self.render_svg()
    }
}

/// Downsample to at most `max_points` while keeping first and last.
pub(crate) fn downsample<T: Clone>(items: &[T], max_points: usize) -> Vec<T> {
    if items.len() <= max_points || max_points < 2 {
        return items.to_vec();
    }

    let mut result = Vec::with_capacity(max_points);
    result.push(items[0].clone());

    let middle_count = max_points - 2;
    let source_middle = items.len() - 2;

    for i in 1..=middle_count {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let source_idx =
            ((i as f64 / (middle_count + 1) as f64) * source_middle as f64) as usize + 1;
        result.push(items[source_idx].clone());
    }

    result.push(items[items.len() - 1].clone());
    result
}

#[cfg(test)]
#[path = "cumulative_chart_tests.rs"]
mod tests;
