use chrono::NaiveDate;
use eframe::App as EApp;
use egui::TextureHandle;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::fullscreen::FullscreenToggle;
use super::preferences::{resolve_theme, PreferenceStore, THEME_KEY};
use super::selection::Selection;
use crate::analysis::{process, CacheManager, ProcessedSeries, ZoomController};
use crate::config::Settings;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::plotting::{ChartView, ExportJob, PlotArea, SeriesSpec, Tooltip};
use crate::types::{AxisDomain, CacheKey, Granularity, LineStyle, PlottedPoint, Theme};

/// Main application state
pub struct App {
    pub dataset: Dataset,
    pub selection: Selection,
    pub granularity: Granularity,
    pub line_style: LineStyle,
    pub theme: Theme,
    pub zoom: ZoomController,
    /// Full processed series for the current inputs
    pub series: Arc<ProcessedSeries>,
    pub chart_texture: Option<TextureHandle>,
    pub plot_area: Option<PlotArea>,
    pub chart_size: (u32, u32),
    pub update_needed: bool,
    pub is_exporting: bool,
    pub export_dir: PathBuf,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub fullscreen: FullscreenToggle,
    /// Theme last pushed to the egui visuals
    pub applied_theme: Option<Theme>,
    cache: CacheManager,
    preferences: Box<dyn PreferenceStore>,
}

impl App {
    pub fn new(
        dataset: Dataset,
        preferences: Box<dyn PreferenceStore>,
        settings: &Settings,
        prefers_dark: bool,
    ) -> Self {
        let theme = resolve_theme(preferences.as_ref(), prefers_dark);
        let selection = Selection::all(&dataset.variations);
        let key = CacheKey {
            granularity: Granularity::default(),
            selected: selection.ids().to_vec(),
        };
        let mut cache = CacheManager::default();
        let series = cache.get_or_insert_with(key.clone(), || {
            process(&dataset.records, &key.selected, key.granularity)
        });
        info!(
            "Loaded {} records for {} variations",
            dataset.records.len(),
            dataset.variations.len()
        );

        Self {
            zoom: ZoomController::new(series.len()),
            dataset,
            selection,
            granularity: Granularity::default(),
            line_style: LineStyle::default(),
            theme,
            series,
            chart_texture: None,
            plot_area: None,
            chart_size: settings.chart_size,
            update_needed: true,
            is_exporting: false,
            export_dir: settings.export_dir.clone(),
            status_message: None,
            error_message: None,
            fullscreen: FullscreenToggle::default(),
            applied_theme: None,
            cache,
            preferences,
        }
    }

    /// Recompute the series for the current inputs and follow its length.
    pub fn refresh(&mut self) {
        let key = CacheKey {
            granularity: self.granularity,
            selected: self.selection.ids().to_vec(),
        };
        let records = &self.dataset.records;
        self.series = self
            .cache
            .get_or_insert_with(key.clone(), || process(records, &key.selected, key.granularity));

        if self.zoom.set_len(self.series.len()) {
            debug!("Series length changed to {}, zoom reset", self.series.len());
        }
        self.update_needed = true;
    }

    pub fn toggle_variation(&mut self, id: &str) {
        if self.selection.toggle(id) {
            self.refresh();
        }
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        if self.granularity != granularity {
            self.granularity = granularity;
            self.refresh();
        }
    }

    pub fn set_line_style(&mut self, line_style: LineStyle) {
        if self.line_style != line_style {
            self.line_style = line_style;
            self.update_needed = true;
        }
    }

    /// Flip the theme and remember it. A failed write keeps the new theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.preferences.set(THEME_KEY, self.theme.as_str()) {
            warn!("Failed to save theme preference: {}", e);
        }
        self.update_needed = true;
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
        self.update_needed = true;
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
        self.update_needed = true;
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
        self.update_needed = true;
    }

    pub fn visible_points(&self) -> &[PlottedPoint] {
        &self.series.points[self.zoom.visible_range()]
    }

    /// Axis bounds over the whole series, so zooming keeps the scale.
    pub fn domain(&self) -> AxisDomain {
        self.series.domain
    }

    pub fn chart_view(&self) -> ChartView {
        ChartView {
            points: self.visible_points().to_vec(),
            series: self
                .selection
                .ids()
                .iter()
                .map(|id| SeriesSpec {
                    id: id.clone(),
                    name: self
                        .dataset
                        .variation_name(id)
                        .unwrap_or(id.as_str())
                        .to_string(),
                })
                .collect(),
            domain: self.domain(),
            granularity: self.granularity,
            line_style: self.line_style,
            theme: self.theme,
        }
    }

    pub fn set_chart_size(&mut self, size: (u32, u32)) {
        if size != self.chart_size && size.0 > 0 && size.1 > 0 {
            self.chart_size = size;
            self.update_needed = true;
        }
    }

    /// Tooltip for the visible point at `index`.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let point = self.visible_points().get(index)?;
        Tooltip::for_point(
            point,
            self.selection.ids(),
            &self.dataset.variations,
            self.granularity,
        )
    }

    /// Claim the export slot. Returns `None` while another export is running.
    pub fn begin_export(&mut self, date: NaiveDate) -> Option<ExportJob> {
        if self.is_exporting {
            return None;
        }
        self.is_exporting = true;
        self.status_message = Some("Exporting chart...".to_string());
        Some(ExportJob {
            view: self.chart_view(),
            size: self.chart_size,
            dir: self.export_dir.clone(),
            date,
        })
    }

    pub fn finish_export(&mut self, result: Result<PathBuf>) {
        self.is_exporting = false;
        match result {
            Ok(path) => {
                self.status_message = Some(format!("Chart exported to {}", path.display()));
            }
            Err(e) => {
                error!("Failed to export chart: {}", e);
                self.status_message = None;
                self.error_message = Some(format!(
                    "Failed to export chart. Please try again.\n\n{}",
                    e
                ));
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx, Arc::clone(&self.app));
        } else {
            error!("Failed to acquire app lock in update");
        }
    }
}
