use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ghcn_anomaly::models::{AnnualSeries, StationYearRecord, TemperatureDataset, MONTHS_PER_YEAR};
use ghcn_anomaly::processors::{
    AnnualMerger, AnomalyAggregator, BaselineEstimator, MergeMode, MovingAverageSmoother,
};

/// Synthetic dataset: `station_count` stations reporting 1940-2020 with a
/// mild seasonal cycle and a slow warming trend.
fn create_test_dataset(station_count: usize) -> TemperatureDataset {
    let mut dataset = TemperatureDataset::new();

    for station_id in 1..=station_count {
        for year in 1940..=2020 {
            let mut temps = [None; MONTHS_PER_YEAR];
            for (month, slot) in temps.iter_mut().enumerate() {
                // Drop a few slots so the sparse paths get exercised.
                if (year + month as i32 + station_id as i32) % 17 == 0 {
                    continue;
                }
                let seasonal = (month as f32 / 12.0 * std::f32::consts::TAU).sin() * 10.0;
                let trend = (year - 1940) as f32 * 0.01;
                *slot = Some(10.0 + seasonal + trend + station_id as f32 * 0.1);
            }
            dataset.insert(StationYearRecord::new(station_id as u32, year, temps));
        }
    }

    dataset
}

fn bench_baseline_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline_estimation");

    for station_count in [10, 100, 500] {
        let dataset = create_test_dataset(station_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &dataset,
            |b, dataset| {
                b.iter(|| BaselineEstimator::new().compute(black_box(dataset)));
            },
        );
    }

    group.finish();
}

fn bench_anomaly_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("anomaly_aggregation");

    for station_count in [10, 100, 500] {
        let dataset = create_test_dataset(station_count);
        let baselines = BaselineEstimator::new().compute(&dataset);
        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &(dataset, baselines),
            |b, (dataset, baselines)| {
                b.iter(|| {
                    AnomalyAggregator::new().compute(black_box(dataset), black_box(baselines))
                });
            },
        );
    }

    group.finish();
}

fn bench_merge_and_smooth(c: &mut Criterion) {
    let dataset = create_test_dataset(100);
    let baselines = BaselineEstimator::new().compute(&dataset);
    let monthly = AnomalyAggregator::new().compute(&dataset, &baselines);

    c.bench_function("annual_merge", |b| {
        b.iter(|| AnnualMerger::new(MergeMode::Average).merge(black_box(&monthly)));
    });

    let annual: AnnualSeries = AnnualMerger::new(MergeMode::Average).merge(&monthly);
    let mut group = c.benchmark_group("moving_average");
    for width in [5, 11, 19] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| MovingAverageSmoother::new(width).smooth(black_box(&annual)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_baseline_estimation,
    bench_anomaly_aggregation,
    bench_merge_and_smooth
);
criterion_main!(benches);
