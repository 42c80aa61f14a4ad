use std::path::PathBuf;

use plotters::{
    prelude::*,
    style::{
        FontTransform, TRANSPARENT,
        text_anchor::{HPos, Pos, VPos},
    },
};
use tracing::debug;

use crate::error::ReportError;

const FIGURE_SIZE: (u32, u32) = (1000, 600);

/// Fraction of a category slot covered by its bars.
pub const GROUP_WIDTH: f64 = 0.75;

/// Fill colors assigned to series in order: sky blue, light green, salmon.
pub const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(135, 206, 235),
    RGBColor(144, 238, 144),
    RGBColor(250, 128, 114),
];

/// Width of one bar when `count` series share a category slot.
pub fn bar_width(count: usize) -> f64 {
    GROUP_WIDTH / count as f64
}

/// Horizontal offset of the center of series `index` from the category
/// center, with `count` series per category.
pub fn series_offset(index: usize, count: usize) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * bar_width(count)
}

/// One named run of values, parallel to the chart's categories.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: &'static str,
    pub color: RGBColor,
    pub values: Vec<f64>,
}

/// A vertical bar chart. Categories run left to right in the given order;
/// every series must carry one value per category. Multi-series charts get a
/// legend and adjacent grouped bars.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub filepath: PathBuf,
    pub title: String,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub rotate_x_labels: bool,
}

impl BarChart {
    /// Draws the chart and writes it to `filepath`, overwriting any existing
    /// file. The backing drawing area is dropped before returning, so no
    /// chart state survives into a later render.
    pub fn render(&self) -> Result<(), ReportError> {
        if self.categories.is_empty() {
            return Err(self.error("chart has no categories"));
        }
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(self.error(&format!(
                    "series {} has {} values for {} categories",
                    series.name,
                    series.values.len(),
                    self.categories.len()
                )));
            }
        }
        self.draw().map_err(|err| self.error(&err.to_string()))?;
        debug!("wrote {}", self.filepath.display());
        Ok(())
    }

    fn draw(&self) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(&self.filepath, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let max_value = self
            .series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(0f64, f64::max);
        // Headroom above the tallest bar for its value label.
        let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };
        let slots = self.categories.len();

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(if self.rotate_x_labels { 70 } else { 45 })
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..slots as f64 - 0.5, 0f64..y_max)?;

        // Each category occupies one unit of the x range; ticks that do not
        // land on a category center stay unlabeled.
        let x_formatter = |x: &f64| {
            let slot = x.round();
            if (x - slot).abs() > 1e-6 || slot < 0.0 || slot as usize >= slots {
                return String::new();
            }
            self.categories[slot as usize].clone()
        };

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .bold_line_style(&BLACK.mix(0.15))
            .light_line_style(&TRANSPARENT)
            .x_labels(slots)
            .x_label_formatter(&x_formatter)
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .axis_desc_style(("sans-serif", 18))
            .label_style(("sans-serif", 14));
        if self.rotate_x_labels {
            mesh.x_label_style(
                ("sans-serif", 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            );
        }
        mesh.draw()?;

        let count = self.series.len();
        let width = bar_width(count);
        for (index, series) in self.series.iter().enumerate() {
            let offset = series_offset(index, count);
            let color = series.color;
            let bars = series.values.iter().enumerate().map(|(slot, &value)| {
                let center = slot as f64 + offset;
                Rectangle::new(
                    [(center - width / 2.0, 0.0), (center + width / 2.0, value)],
                    color.filled(),
                )
            });
            let drawn = chart.draw_series(bars)?;
            if count > 1 {
                drawn.label(series.name).legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
            }
        }

        let label_style = ("sans-serif", 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        for (index, series) in self.series.iter().enumerate() {
            let offset = series_offset(index, count);
            chart.draw_series(series.values.iter().enumerate().map(|(slot, &value)| {
                Text::new(
                    format!("{value:.0}"),
                    (slot as f64 + offset, value + y_max * 0.01),
                    label_style.clone(),
                )
            }))?;
        }

        if count > 1 {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.9))
                .border_style(&BLACK)
                .label_font(("sans-serif", 14))
                .draw()?;
        }

        root.present()?;
        Ok(())
    }

    fn error(&self, reason: &str) -> ReportError {
        ReportError::Render {
            path: self.filepath.clone(),
            reason: reason.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_series_split_the_group_evenly() {
        let width = bar_width(3);
        assert!((width - 0.25).abs() < 1e-9);

        let offsets: Vec<f64> = (0..3).map(|i| series_offset(i, 3)).collect();
        assert!((offsets[0] + 0.25).abs() < 1e-9);
        assert!(offsets[1].abs() < 1e-9);
        assert!((offsets[2] - 0.25).abs() < 1e-9);
        // Consecutive bars touch exactly.
        for pair in offsets.windows(2) {
            assert!((pair[1] - pair[0] - width).abs() < 1e-9);
        }
    }

    #[test]
    fn single_series_fills_the_group() {
        assert!((bar_width(1) - GROUP_WIDTH).abs() < 1e-9);
        assert!(series_offset(0, 1).abs() < 1e-9);
    }

    fn unused_chart(categories: Vec<String>, series: Vec<Series>) -> BarChart {
        BarChart {
            filepath: PathBuf::from("unused.png"),
            title: "test".to_owned(),
            x_desc: "x",
            y_desc: "y",
            categories,
            series,
            rotate_x_labels: false,
        }
    }

    #[test]
    fn empty_chart_is_a_render_error() {
        let chart = unused_chart(Vec::new(), Vec::new());
        assert!(matches!(chart.render(), Err(ReportError::Render { .. })));
    }

    #[test]
    fn mismatched_series_is_a_render_error() {
        let chart = unused_chart(
            vec!["a".to_owned(), "b".to_owned()],
            vec![Series {
                name: "short",
                color: SERIES_COLORS[0],
                values: vec![1.0],
            }],
        );
        assert!(matches!(chart.render(), Err(ReportError::Render { .. })));
    }
}
