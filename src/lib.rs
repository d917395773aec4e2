//! # A/B Test Conversion Dashboard
//!
//! `abchart` turns daily visit and conversion counts of an A/B test into a
//! conversion-rate chart. It provides the data pipeline (daily or weekly
//! bucketing, per-variation rates, axis domain), the zoomable view window and an
//! egui front end that renders the chart with plotters.
//!
//! ## Features
//!
//! - Daily or weekly aggregation (weeks start on Monday)
//! - Variation selection that never leaves the chart empty
//! - Line, smooth and area chart styles
//! - Zoom in and out over the plotted series
//! - Light and dark themes, remembered between runs
//! - PNG export at twice the on-screen resolution
//!
//! ## Example
//!
//! ```no_run
//! use abchart::app::{App, AppWrapper, MemoryPreferences};
//! use abchart::{Dataset, Settings};
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//!
//! let settings = Settings::default();
//! let dataset = Dataset::bundled().unwrap();
//! let app = App::new(dataset, Box::new(MemoryPreferences::new()), &settings, false);
//! let app_wrapper = AppWrapper { app: Arc::new(Mutex::new(app)) };
//!
//! eframe::run_native(
//!     "A/B Test Results",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{process, ProcessedSeries};
pub use app::App;
pub use config::Settings;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use types::{AxisDomain, CacheKey, Granularity, LineStyle, PlottedPoint, RawRecord, Theme, Variation};
