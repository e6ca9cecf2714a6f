use barchart_layout::{
    ChartConfig, ChartOrientation, Margin, Record, Scalar, SeriesConfig, SeriesDefinition, Theme,
    compute_layout,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn synthetic_data(categories: usize, series: usize) -> Vec<Record> {
    (0..categories)
        .map(|cat| {
            let mut record = Record::new();
            record.insert("x".to_string(), Scalar::from(format!("cat-{cat}")));
            for s in 0..series {
                // deterministic mix of positive and negative values
                let value = ((cat * 31 + s * 17) % 200) as f64 / 100.0 - 1.0;
                record.insert(format!("y{s}"), Scalar::from(value));
            }
            record
        })
        .collect()
}

fn synthetic_config(series: usize) -> SeriesConfig {
    let mut config = SeriesConfig::new();
    for s in 0..series {
        config.insert(
            format!("series-{s}"),
            SeriesDefinition {
                x: "x".to_string(),
                y: format!("y{s}"),
                color: None,
                negative_color: None,
            },
        );
    }
    config
}

fn chart_config(grouped: bool) -> ChartConfig {
    ChartConfig {
        chart_type: ChartOrientation::Column,
        grouped,
        width: 1200.0,
        height: 800.0,
        margin: Margin {
            top: 10.0,
            right: 10.0,
            bottom: 50.0,
            left: 50.0,
        },
        ..ChartConfig::default()
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::default();
    for (categories, series) in [(10usize, 2usize), (100, 4), (1000, 8)] {
        let name = format!("stacked_{}x{}", categories, series);
        let data = synthetic_data(categories, series);
        let config = synthetic_config(series);
        let chart = chart_config(false);
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let layout = compute_layout(black_box(data), Some(&config), &theme, &chart)
                    .expect("layout failed");
                black_box(layout.stacked_data.len());
            });
        });
    }
    group.finish();
}

fn bench_grouped_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_grouped");
    let theme = Theme::default();
    for (categories, series) in [(100usize, 4usize), (1000, 8)] {
        let name = format!("grouped_{}x{}", categories, series);
        let data = synthetic_data(categories, series);
        let config = synthetic_config(series);
        let chart = chart_config(true);
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let layout = compute_layout(black_box(data), Some(&config), &theme, &chart)
                    .expect("layout failed");
                black_box(layout.group_scale.is_some());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_grouped_layout
);
criterion_main!(benches);
