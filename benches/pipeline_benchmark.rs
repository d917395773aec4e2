/// Benchmark module for the data pipeline and chart rendering.
/// Measures aggregation, rate computation and rasterizing a frame.
use abchart::plotting::{render_rgb, ChartStyle, ChartView, SeriesSpec};
use abchart::types::{Counts, RawRecord};
use abchart::{process, Granularity, LineStyle, Theme};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VARIATIONS: [&str; 4] = ["0", "10001", "10002", "10003"];

/// Build a synthetic dataset of `days` daily records
fn synthetic_records(days: usize) -> Vec<RawRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    (0..days)
        .map(|day| {
            let mut visits = Counts::new();
            let mut conversions = Counts::new();
            for id in VARIATIONS {
                let v: u64 = rng.gen_range(100..1000);
                visits.insert(id.to_string(), v);
                conversions.insert(id.to_string(), rng.gen_range(0..=v / 5));
            }
            RawRecord {
                date: start + Duration::days(day as i64),
                visits,
                conversions,
            }
        })
        .collect()
}

fn selected() -> Vec<String> {
    VARIATIONS.iter().map(|id| id.to_string()).collect()
}

/// Benchmark the pipeline for both granularities
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let records = synthetic_records(730);
    let selected = selected();

    group.bench_function("process_daily", |b| {
        b.iter(|| process(black_box(&records), &selected, Granularity::Daily))
    });

    group.bench_function("process_weekly", |b| {
        b.iter(|| process(black_box(&records), &selected, Granularity::Weekly))
    });

    group.finish();
}

/// Benchmark rendering one frame for each line style
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let records = synthetic_records(90);
    let selected = selected();
    let series = process(&records, &selected, Granularity::Daily);

    for line_style in LineStyle::ALL {
        let view = ChartView {
            points: series.points.clone(),
            series: selected
                .iter()
                .map(|id| SeriesSpec {
                    id: id.clone(),
                    name: format!("Variation {}", id),
                })
                .collect(),
            domain: series.domain,
            granularity: Granularity::Daily,
            line_style,
            theme: Theme::Light,
        };
        let style = ChartStyle::default();

        group.bench_function(format!("render_{}", line_style.label()), |b| {
            b.iter(|| render_rgb(black_box(&view), (900, 450), &style).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_rendering);
criterion_main!(benches);
