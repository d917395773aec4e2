use chrono::NaiveDate;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use super::curve::monotone_curve;
use super::styles::{variation_color, ChartStyle, ChartTheme};
use crate::types::{AxisDomain, Granularity, LineStyle, PlottedPoint, Theme};
use crate::utils::{format_axis_label, format_axis_percentage};

pub type PlotError = Box<dyn Error + Send + Sync>;

/// A variation drawn on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub id: String,
    pub name: String,
}

/// Everything needed to draw one frame of the chart.
///
/// Owned so it can be handed to a blocking task for export.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    /// Visible slice of the processed series
    pub points: Vec<PlottedPoint>,
    /// Selected variations in selection order
    pub series: Vec<SeriesSpec>,
    pub domain: AxisDomain,
    pub granularity: Granularity,
    pub line_style: LineStyle,
    pub theme: Theme,
}

/// Where the data landed on the bitmap, for mapping the pointer back to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArea {
    pub x_pixels: Range<i32>,
    pub point_count: usize,
}

impl PlotArea {
    /// Index of the point closest to pixel column `x`, if `x` is over the plot.
    pub fn index_at(&self, x: f64) -> Option<usize> {
        if self.point_count == 0 {
            return None;
        }
        let left = f64::from(self.x_pixels.start);
        let right = f64::from(self.x_pixels.end);
        if x < left || x > right {
            return None;
        }
        if self.point_count == 1 {
            return Some(0);
        }
        let width = (right - left).max(1.0);
        let index = ((x - left) / width * (self.point_count - 1) as f64).round() as usize;
        Some(index.min(self.point_count - 1))
    }
}

/// Render the chart into a fresh RGB buffer of `size` pixels.
pub fn render_rgb(
    view: &ChartView,
    size: (u32, u32),
    style: &ChartStyle,
) -> Result<(Vec<u8>, PlotArea), PlotError> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(format!("invalid chart size {}x{}", width, height).into());
    }

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    let area = {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        let area = draw_chart(view, &root, style)?;
        root.present()?;
        area
    };
    Ok((buffer, area))
}

/// Draw axes, series and legend onto `root_area`.
pub fn draw_chart(
    view: &ChartView,
    root_area: &DrawingArea<BitMapBackend, Shift>,
    style: &ChartStyle,
) -> Result<PlotArea, PlotError> {
    let theme = ChartTheme::for_theme(view.theme);
    root_area.fill(&theme.background_color)?;

    let point_count = view.points.len();
    let y_range = y_range(view.domain);
    let baseline = y_range.start;
    let font = ("sans-serif", style.font_size)
        .into_font()
        .color(&theme.text_color);

    let mut chart_builder = ChartBuilder::on(root_area)
        .margin(style.margin)
        .x_label_area_size(style.label_area_size * 3 / 4)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(x_range(point_count), y_range)?;

    let dates: Vec<NaiveDate> = view.points.iter().map(|p| p.date).collect();
    let granularity = view.granularity;
    let x_label_formatter = move |x: &f64| x_label(&dates, *x, granularity);
    let y_label_formatter = |y: &f64| format_axis_percentage(*y);

    chart_builder
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .label_style(font.clone())
        .x_labels(point_count.clamp(2, 12))
        .y_labels(6)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        .draw()?;

    let mut drawn = 0;
    for (index, spec) in view.series.iter().enumerate() {
        let data: Vec<(f64, f64)> = view
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.value(&spec.id).map(|v| (i as f64, v)))
            .collect();
        if data.is_empty() {
            continue;
        }
        draw_variation(
            &mut chart_builder,
            &data,
            variation_color(index),
            &spec.name,
            view.line_style,
            baseline,
            style,
            &theme,
        )?;
        drawn += 1;
    }

    if drawn > 0 {
        chart_builder
            .configure_series_labels()
            .background_style(theme.background_color)
            .border_style(theme.axis_color)
            .label_font(font)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    Ok(PlotArea {
        x_pixels: chart_builder.plotting_area().get_pixel_range().0,
        point_count,
    })
}

#[allow(clippy::too_many_arguments)]
fn draw_variation(
    chart_builder: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    data: &[(f64, f64)],
    color: RGBColor,
    name: &str,
    line_style: LineStyle,
    baseline: f64,
    style: &ChartStyle,
    theme: &ChartTheme,
) -> Result<(), PlotError> {
    let line_width = style.line_width;
    let stroke = color.stroke_width(line_width);
    let path = match line_style {
        LineStyle::Line => data.to_vec(),
        LineStyle::Smooth | LineStyle::Area => monotone_curve(data, style.curve_samples),
    };

    let legend = move |(x, y): (i32, i32)| {
        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
    };

    match line_style {
        LineStyle::Area => {
            chart_builder
                .draw_series(
                    AreaSeries::new(path, baseline, color.mix(style.area_opacity))
                        .border_style(stroke),
                )?
                .label(name)
                .legend(legend);
        }
        LineStyle::Line | LineStyle::Smooth => {
            chart_builder
                .draw_series(LineSeries::new(path, stroke))?
                .label(name)
                .legend(legend);
        }
    }

    // Point markers: a filled dot in the background color, ringed by the series color
    let radius = style.marker_radius as i32;
    chart_builder.draw_series(
        data.iter()
            .map(|&(x, y)| Circle::new((x, y), radius, theme.marker_fill.filled())),
    )?;
    chart_builder.draw_series(data.iter().map(|&(x, y)| Circle::new((x, y), radius, stroke)))?;

    Ok(())
}

fn x_range(point_count: usize) -> Range<f64> {
    if point_count <= 1 {
        -0.5..0.5
    } else {
        0.0..(point_count - 1) as f64
    }
}

// A flat series still needs a non-empty axis.
fn y_range(domain: AxisDomain) -> Range<f64> {
    if domain.max - domain.min < f64::EPSILON {
        domain.min..domain.min + 1.0
    } else {
        domain.min..domain.max
    }
}

fn x_label(dates: &[NaiveDate], x: f64, granularity: Granularity) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    dates
        .get(rounded as usize)
        .map(|date| format_axis_label(*date, granularity))
        .unwrap_or_default()
}
