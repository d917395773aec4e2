//! Data pipeline from raw daily counts to the plotted series.
//!
//! raw records -> [`aggregate`] -> [`to_rates`] -> [`compute_domain`]

pub mod aggregation;
mod cache;
pub mod domain;
pub mod rates;
pub mod window;

#[cfg(test)]
mod tests;

pub use aggregation::{aggregate, week_start};
pub use cache::CacheManager;
pub use domain::compute_domain;
pub use rates::{conversion_rate, to_rates};
pub use window::{ViewWindow, ZoomController, MIN_WIDTH};

use crate::types::{AxisDomain, Granularity, PlottedPoint, RawRecord};

/// Chart-ready series plus the axis range covering it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSeries {
    pub points: Vec<PlottedPoint>,
    pub domain: AxisDomain,
}

impl ProcessedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Run the whole pipeline for one set of inputs.
pub fn process(records: &[RawRecord], selected: &[String], granularity: Granularity) -> ProcessedSeries {
    let bucketed = aggregate(records, granularity);
    let points = to_rates(&bucketed, selected);
    let domain = compute_domain(&points, selected);
    ProcessedSeries { points, domain }
}
