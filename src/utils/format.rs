use chrono::{Duration, NaiveDate};

use crate::types::Granularity;

/// Tick label for the X axis: the short month name for either granularity.
pub fn format_axis_label(date: NaiveDate, _granularity: Granularity) -> String {
    date.format("%b").to_string()
}

/// Header of the hover tooltip.
///
/// Weekly points span their Monday to the following Sunday, e.g. `Jan 6 - Jan 12`.
/// Daily points read `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Weekly => {
            let end = date + Duration::days(6);
            format!("{} - {}", date.format("%b %-d"), end.format("%b %-d"))
        }
        Granularity::Daily => date.format("%d/%m/%Y").to_string(),
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Y axis tick label, whole percents without decimals.
pub fn format_axis_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}
