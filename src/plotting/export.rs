//! PNG snapshot of the chart.

use chrono::NaiveDate;
use image::{ImageFormat, RgbImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::chart::{render_rgb, ChartView};
use super::styles::ChartStyle;
use crate::error::{Error, Result};

/// Exported images are rendered at this multiple of the on-screen size.
pub const EXPORT_SCALE: u32 = 2;

/// One pending export, detached from the application state.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub view: ChartView,
    /// On-screen chart size in pixels
    pub size: (u32, u32),
    pub dir: PathBuf,
    pub date: NaiveDate,
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("ab-test-chart-{}.png", date.format("%Y-%m-%d"))
}

/// Render `view` at [`EXPORT_SCALE`] and write it as PNG into `dir`.
pub fn export_png(view: &ChartView, size: (u32, u32), dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let width = size.0 * EXPORT_SCALE;
    let height = size.1 * EXPORT_SCALE;
    let style = ChartStyle::default().scaled(EXPORT_SCALE);

    let (buffer, _) =
        render_rgb(view, (width, height), &style).map_err(|e| Error::Render(e.to_string()))?;
    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| Error::Render("rendered buffer does not match image size".to_string()))?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    debug!("Encoding {}x{} chart to {}", width, height, path.display());
    image.save_with_format(&path, ImageFormat::Png)?;

    info!("Exported chart to {}", path.display());
    Ok(path)
}

/// Run an export on the blocking pool.
pub async fn export_png_async(job: ExportJob) -> Result<PathBuf> {
    tokio::task::spawn_blocking(move || export_png(&job.view, job.size, &job.dir, job.date))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}
