use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::types::{Granularity, RawRecord};

/// Bucket records according to the requested granularity.
///
/// Daily data is passed through unchanged. Weekly data is summed per variation
/// into Monday-start weeks, one record per week, in ascending date order.
pub fn aggregate(records: &[RawRecord], granularity: Granularity) -> Vec<RawRecord> {
    match granularity {
        Granularity::Daily => records.to_vec(),
        Granularity::Weekly => aggregate_by_week(records),
    }
}

/// Monday of the week containing `date`. Sunday belongs to the preceding Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn aggregate_by_week(records: &[RawRecord]) -> Vec<RawRecord> {
    let mut weeks: BTreeMap<NaiveDate, RawRecord> = BTreeMap::new();

    for record in records {
        let key = week_start(record.date);
        let bucket = weeks.entry(key).or_insert_with(|| RawRecord {
            date: key,
            visits: BTreeMap::new(),
            conversions: BTreeMap::new(),
        });

        // Counts clamp at u64::MAX rather than wrapping
        for (id, visits) in &record.visits {
            let total = bucket.visits.entry(id.clone()).or_insert(0);
            *total = total.saturating_add(*visits);
        }
        for (id, conversions) in &record.conversions {
            let total = bucket.conversions.entry(id.clone()).or_insert(0);
            *total = total.saturating_add(*conversions);
        }
    }

    // BTreeMap iteration is already chronological
    weeks.into_values().collect()
}
