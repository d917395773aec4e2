use super::*;
use crate::types::CacheKey;
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use quickcheck_macros::quickcheck;
use std::collections::BTreeMap;

fn uniform_days(start: NaiveDate, days: i64) -> Vec<RawRecord> {
    (0..days)
        .map(|i| RawRecord {
            date: start + Duration::days(i),
            visits: [("A".to_string(), 100)].into_iter().collect(),
            conversions: [("A".to_string(), 50)].into_iter().collect(),
        })
        .collect()
}

fn selected(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_uniform_daily_series() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let series = process(&uniform_days(start, 10), &selected(&["A"]), Granularity::Daily);

    assert_eq!(series.len(), 10);
    assert!(series.points.iter().all(|p| p.value("A") == Some(50.0)));
    assert_eq!(series.domain, AxisDomain { min: 50.0, max: 50.0 });
}

#[test]
fn test_uniform_weekly_series_spans_three_buckets() {
    // Saturday start: 2 + 7 + 1 days
    let start = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
    let series = process(&uniform_days(start, 10), &selected(&["A"]), Granularity::Weekly);

    assert_eq!(series.len(), 3);
    assert!(series.points.iter().all(|p| p.value("A") == Some(50.0)));
    assert_eq!(
        series.points.iter().map(|p| p.date).collect::<Vec<_>>(),
        vec![
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        ]
    );
}

#[test]
fn test_rate_is_computed_after_summing() {
    let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let records = vec![
        RawRecord {
            date: monday,
            visits: [("A".to_string(), 10)].into_iter().collect(),
            conversions: [("A".to_string(), 10)].into_iter().collect(),
        },
        RawRecord {
            date: monday + Duration::days(1),
            visits: [("A".to_string(), 90)].into_iter().collect(),
            conversions: BTreeMap::new(),
        },
    ];

    let series = process(&records, &selected(&["A"]), Granularity::Weekly);
    // 10 / 100, not the mean of 100% and 0%
    assert_eq!(series.points[0].value("A"), Some(10.0));
}

#[test]
fn test_empty_input() {
    let series = process(&[], &selected(&["A"]), Granularity::Weekly);
    assert!(series.is_empty());
    assert_eq!(series.domain, AxisDomain::DEFAULT);
}

#[test]
fn test_cache_reuses_series() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let records = uniform_days(start, 14);
    let mut cache = CacheManager::default();
    let key = CacheKey {
        granularity: Granularity::Weekly,
        selected: selected(&["A"]),
    };

    let mut calls = 0;
    let first = cache.get_or_insert_with(key.clone(), || {
        calls += 1;
        process(&records, &key.selected, key.granularity)
    });
    let second = cache.get_or_insert_with(key.clone(), || {
        calls += 1;
        process(&records, &key.selected, key.granularity)
    });

    assert_eq!(calls, 1);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_cache_key_distinguishes_selection_order() {
    let key1 = CacheKey {
        granularity: Granularity::Daily,
        selected: selected(&["A", "B"]),
    };
    let key2 = CacheKey {
        granularity: Granularity::Daily,
        selected: selected(&["A", "B"]),
    };
    let key3 = CacheKey {
        granularity: Granularity::Daily,
        selected: selected(&["B", "A"]),
    };

    assert_eq!(key1, key2);
    assert_ne!(key1, key3);
}

#[quickcheck]
fn weekly_aggregation_conserves_totals(days: Vec<(u8, u16, u16, u16)>) -> bool {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let records: Vec<RawRecord> = days
        .iter()
        .map(|(offset, a_visits, a_conv, b_visits)| RawRecord {
            date: start + Duration::days(i64::from(*offset)),
            visits: [
                ("A".to_string(), u64::from(*a_visits)),
                ("B".to_string(), u64::from(*b_visits)),
            ]
            .into_iter()
            .collect(),
            conversions: [("A".to_string(), u64::from(*a_conv))].into_iter().collect(),
        })
        .collect();

    let weekly = aggregate(&records, Granularity::Weekly);

    ["A", "B"].iter().all(|id| {
        let daily_visits: u64 = records.iter().map(|r| r.visits_for(id)).sum();
        let weekly_visits: u64 = weekly.iter().map(|r| r.visits_for(id)).sum();
        let daily_conv: u64 = records.iter().map(|r| r.conversions_for(id)).sum();
        let weekly_conv: u64 = weekly.iter().map(|r| r.conversions_for(id)).sum();
        daily_visits == weekly_visits && daily_conv == weekly_conv
    }) && weekly.iter().all(|r| week_start(r.date) == r.date)
}
