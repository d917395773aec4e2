use crate::types::{PlottedPoint, RawRecord};

/// Conversion rate in percent. Zero visits yields 0 rather than NaN.
pub fn conversion_rate(conversions: u64, visits: u64) -> f64 {
    if visits == 0 {
        return 0.0;
    }
    conversions as f64 / visits as f64 * 100.0
}

/// Turn records into plotted points carrying a rate for each selected variation.
///
/// One point per record, in input order. Ids missing from a record count as 0.
pub fn to_rates(records: &[RawRecord], selected: &[String]) -> Vec<PlottedPoint> {
    records
        .iter()
        .map(|record| PlottedPoint {
            date: record.date,
            values: selected
                .iter()
                .map(|id| {
                    let rate = conversion_rate(record.conversions_for(id), record.visits_for(id));
                    (id.clone(), rate)
                })
                .collect(),
        })
        .collect()
}
