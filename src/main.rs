//! A/B Test Conversion Dashboard
//!
//! A GUI application for comparing conversion rates of A/B test variations.

use anyhow::{anyhow, Context as _, Result};
use eframe::egui;
use log::info;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use abchart::app::{App, AppWrapper, FilePreferences};
use abchart::Settings;

fn init_logging() {
    let default_level = if cfg!(feature = "dev") { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    init_logging();

    let settings = Settings::from_env();
    let dataset = settings
        .load_dataset()
        .context("failed to load the A/B test dataset")?;

    // Initialize the Tokio runtime
    let rt = Runtime::new().context("failed to start the async runtime")?;
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("A/B Test Results"),
            ..Default::default()
        };

        info!("Starting dashboard, exports go to {}", settings.export_dir.display());
        eframe::run_native(
            "A/B Test Results",
            options,
            Box::new(move |cc| {
                let prefers_dark = cc.egui_ctx.style().visuals.dark_mode;
                let preferences = FilePreferences::open(settings.preferences_path());
                let app = App::new(dataset, Box::new(preferences), &settings, prefers_dark);
                let app = Arc::new(Mutex::new(app));
                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| anyhow!("error running application: {}", e))
    })
}
