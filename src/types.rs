//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing A/B test records, plotted series and chart options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-variation counters keyed by variation id.
pub type Counts = BTreeMap<String, u64>;

/// One arm of an A/B test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Stable identifier, the decimal form of the source id
    pub id: String,
    /// Name shown in the legend, the tooltip and the selector
    pub name: String,
}

/// Visits and conversions for one calendar day, or for one week once aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Day of the record, or the Monday of the bucket for weekly records
    pub date: NaiveDate,
    /// Visits per variation id
    #[serde(default)]
    pub visits: Counts,
    /// Conversions per variation id
    #[serde(default)]
    pub conversions: Counts,
}

impl RawRecord {
    pub fn visits_for(&self, id: &str) -> u64 {
        self.visits.get(id).copied().unwrap_or(0)
    }

    pub fn conversions_for(&self, id: &str) -> u64 {
        self.conversions.get(id).copied().unwrap_or(0)
    }
}

/// One item of the rendered series.
///
/// `values` holds a conversion rate (percent) for each variation that was
/// selected when the point was computed, and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedPoint {
    pub date: NaiveDate,
    pub values: BTreeMap<String, f64>,
}

impl PlottedPoint {
    pub fn value(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }
}

/// Bounds of the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub const DEFAULT: AxisDomain = AxisDomain {
        min: 0.0,
        max: 100.0,
    };
}

impl Default for AxisDomain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Time bucketing applied to the raw records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
}

impl Granularity {
    pub const ALL: [Granularity; 2] = [Granularity::Daily, Granularity::Weekly];

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Day",
            Granularity::Weekly => "Week",
        }
    }
}

/// How each variation's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Line,
    Smooth,
    Area,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [LineStyle::Line, LineStyle::Smooth, LineStyle::Area];

    pub fn label(&self) -> &'static str {
        match self {
            LineStyle::Line => "line",
            LineStyle::Smooth => "smooth",
            LineStyle::Area => "area",
        }
    }
}

/// Application color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key used for caching processed series based on the chart inputs.
///
/// The selection is kept in order since it decides series colors.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct CacheKey {
    /// Time bucketing of the series
    pub granularity: Granularity,
    /// Selected variation ids
    pub selected: Vec<String>,
}
