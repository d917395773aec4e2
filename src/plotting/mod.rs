//! Chart rendering with plotters, plus PNG export.

pub mod chart;
pub mod curve;
pub mod export;
pub mod styles;
pub mod tooltip;


pub use chart::{draw_chart, render_rgb, ChartView, PlotArea, PlotError, SeriesSpec};
pub use export::{export_file_name, export_png, export_png_async, ExportJob, EXPORT_SCALE};
pub use styles::{variation_color, ChartStyle, ChartTheme};
pub use tooltip::{Tooltip, TooltipRow};
