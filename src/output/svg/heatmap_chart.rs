//! Calendar heatmap: weeks as columns, weekdays as rows.

use super::builder::SvgBuilder;
use super::element::{Cell, Label, SvgElement};
use super::format::format_thousands;
use super::style::{ChartColor, TextAnchor};
use crate::output::calendar::CalendarGrid;
use crate::snapshot::format_iso_date;
use crate::stats::{HeatmapCell, HeatmapLevel, LEVEL_2_MIN, LEVEL_3_MIN, LEVEL_4_MIN};

const CELL_SIZE: f64 = 11.0;
const CELL_STEP: f64 = 14.0;
const LEFT_GUTTER: f64 = 32.0;
const TOP_GUTTER: f64 = 20.0;
const LEGEND_HEIGHT: f64 = 26.0;
const RIGHT_PADDING: f64 = 10.0;

/// Weekday rows that carry a label.
const WEEKDAY_LABELS: [(usize, &str); 3] = [(0, "Mon"), (2, "Wed"), (4, "Fri")];

/// Fill color for a heatmap level.
#[must_use]
pub fn level_color(level: HeatmapLevel) -> ChartColor {
    match level {
        HeatmapLevel::None => ChartColor::themed("level-0", "#ebedf0"),
        HeatmapLevel::Low => ChartColor::themed("level-1", "#9be9a8"),
        HeatmapLevel::Medium => ChartColor::themed("level-2", "#40c463"),
        HeatmapLevel::High => ChartColor::themed("level-3", "#30a14e"),
        HeatmapLevel::Peak => ChartColor::themed("level-4", "#216e39"),
    }
}

/// Calendar grid with one colored cell per day.
#[derive(Debug)]
pub struct HeatmapCalendar<'a> {
    cells: &'a [HeatmapCell],
    show_legend: bool,
}

impl<'a> HeatmapCalendar<'a> {
    #[must_use]
    pub const fn new(cells: &'a [HeatmapCell]) -> Self {
        Self {
            cells,
            show_legend: true,
        }
    }

    #[must_use]
    pub const fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    fn tooltip(cell: &HeatmapCell) -> String {
        let date = format_iso_date(cell.date);
        match cell.count {
            0 => format!("{date}: no writing"),
            1 => format!("{date}: 1 word"),
            n => format!("{date}: {} words", format_thousands(n)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_svg(&self) -> String {
        let grid = CalendarGrid::new(self.cells);
        let columns = grid.len().max(1) as f64;
        let width = CELL_STEP.mul_add(columns, LEFT_GUTTER + RIGHT_PADDING);
        let grid_bottom = CELL_STEP.mul_add(7.0, TOP_GUTTER);
        let height = if self.show_legend {
            grid_bottom + LEGEND_HEIGHT
        } else {
            grid_bottom
        };

        let mut svg = SvgBuilder::new(width, height).with_title("Writing Activity");

        for (column, month) in grid.month_labels() {
            let x = CELL_STEP.mul_add(column as f64, LEFT_GUTTER);
            svg.push(&Label::new(x, TOP_GUTTER - 6.0, month));
        }

        for (row, name) in WEEKDAY_LABELS {
            let y = CELL_STEP.mul_add(row as f64, TOP_GUTTER) + CELL_SIZE - 2.0;
            svg.push(&Label::new(LEFT_GUTTER - 6.0, y, name).with_anchor(TextAnchor::End));
        }

        for (column, week) in grid.weeks().iter().enumerate() {
            for (row, cell) in week.iter().enumerate() {
                let Some(cell) = cell else { continue };
                svg.push(&Cell {
                    x: CELL_STEP.mul_add(column as f64, LEFT_GUTTER),
                    y: CELL_STEP.mul_add(row as f64, TOP_GUTTER),
                    size: CELL_SIZE,
                    color: level_color(cell.level),
                    tooltip: Self::tooltip(cell),
                });
            }
        }

        if self.show_legend {
            Self::push_legend(&mut svg, width, grid_bottom);
        }

        svg.build()
    }

    fn push_legend(svg: &mut SvgBuilder, width: f64, grid_bottom: f64) {
        let levels = [
            (HeatmapLevel::None, "No writing".to_string()),
            (HeatmapLevel::Low, format!("1-{} words", LEVEL_2_MIN - 1)),
            (HeatmapLevel::Medium, format!("{LEVEL_2_MIN}-{} words", LEVEL_3_MIN - 1)),
            (HeatmapLevel::High, format!("{LEVEL_3_MIN}-{} words", LEVEL_4_MIN - 1)),
            (HeatmapLevel::Peak, format!("{LEVEL_4_MIN}+ words")),
        ];

        let y = grid_bottom + 8.0;
        let more_x = width - RIGHT_PADDING;
        let first_x = CELL_STEP.mul_add(-5.0, more_x - 30.0);

        let label_y = y + CELL_SIZE - 2.0;

        svg.push(&Label::new(first_x - 4.0, label_y, "Less").with_anchor(TextAnchor::End));
        for (i, (level, tooltip)) in levels.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = CELL_STEP.mul_add(i as f64, first_x);
            svg.push(&Cell {
                x,
                y,
                size: CELL_SIZE,
                color: level_color(level),
                tooltip,
            });
        }
        svg.push(&Label::new(more_x - 26.0, label_y, "More"));
    }
}

impl SvgElement for HeatmapCalendar<'_> {
    fn render(&self) -> String {
        self.render_svg()
    }
}

#[cfg(test)]
#[path = "heatmap_chart_tests.rs"]
mod tests;
