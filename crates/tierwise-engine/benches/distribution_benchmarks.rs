//! Benchmarks for the tierwise-engine distribution components.
//!
//! Run with: cargo bench -p tierwise-engine
//! Add `--features parallel` to include rayon evaluation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tierwise_engine::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn window(years: i32) -> DateRange {
    DateRange::from_ymd((2019, 1, 1), (2018 + years, 12, 31)).unwrap()
}

fn daily_productivity(window: &DateRange) -> Vec<ProductivityEntry> {
    (0..window.length_days())
        .map(|offset| {
            let amount = Decimal::from(50 + (offset * 37) % 150);
            ProductivityEntry::new(window.start() + offset, Some(amount))
        })
        .collect()
}

const BOUNDARIES: [Decimal; 3] = [dec!(24000), dec!(36000), dec!(48000)];
const FACTORS: [Decimal; 4] = [dec!(10), dec!(20), dec!(25), dec!(30)];

// =============================================================================
// DISTRIBUTION BENCHMARKS
// =============================================================================

fn bench_distribute_by_interval(c: &mut Criterion) {
    let window = window(1);
    let values = daily_productivity(&window);

    let mut group = c.benchmark_group("distribute_interval");
    group.throughput(Throughput::Elements(values.len() as u64));

    for interval in AccrualInterval::ALL {
        let decipher = AccrualPeriodDecipher::new(window, interval).unwrap();
        let distributor = BundleDistributor::new(&decipher);

        group.bench_with_input(
            BenchmarkId::from_parameter(interval),
            &values,
            |b, values| {
                b.iter(|| {
                    distributor.distribute(
                        black_box(values),
                        &BOUNDARIES,
                        &FACTORS,
                        &window,
                        false,
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_distribute_cumulative_years(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute_cumulative_monthly");
    group.sample_size(30);

    for years in [1, 3, 5] {
        let window = window(years);
        let values = daily_productivity(&window);
        let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Monthly).unwrap();

        let sequential = BundleDistributor::new(&decipher)
            .with_config(DistributionConfig::monthly_year_to_date().with_parallel(false))
            .unwrap();
        let configured = BundleDistributor::new(&decipher)
            .with_config(DistributionConfig::monthly_year_to_date().with_parallel_threshold(12))
            .unwrap();

        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", years), &values, |b, values| {
            b.iter(|| sequential.distribute(black_box(values), &BOUNDARIES, &FACTORS, &window, true))
        });

        group.bench_with_input(BenchmarkId::new("configured", years), &values, |b, values| {
            b.iter(|| configured.distribute(black_box(values), &BOUNDARIES, &FACTORS, &window, true))
        });
    }

    group.finish();
}

// =============================================================================
// AGGREGATION BENCHMARKS
// =============================================================================

fn bench_fill_and_aggregate(c: &mut Criterion) {
    let window = window(1);
    let values = daily_productivity(&window);
    let decipher = AccrualPeriodDecipher::new(window, AccrualInterval::Monthly).unwrap();
    let distributor = BundleDistributor::new(&decipher);

    let bundles: Vec<TierBundle> = (1..=12)
        .step_by(3)
        .map(|month| {
            let from = Date::from_ymd(2019, month, 1).unwrap();
            TierBundle::new(from, Some(from.end_of_month()))
                .with_tier(Tier::base(Decimal::from(month)))
                .with_tier(Tier::new(Some(dec!(24000)), Decimal::from(month * 2)))
        })
        .collect();

    let distributions = distributor.distribute_bundles(&values, &bundles, false).unwrap();

    c.bench_function("fill_distribution_gaps", |b| {
        b.iter(|| distributor.fill_distribution_gaps(black_box(distributions.clone()), false))
    });

    let filled = distributor
        .fill_distribution_gaps(distributions, false)
        .unwrap();

    c.bench_function("aggregate_distributions", |b| {
        b.iter(|| BundleDistribution::aggregate_distributions(black_box(&filled)))
    });
}

criterion_group!(
    distribution,
    bench_distribute_by_interval,
    bench_distribute_cumulative_years,
);

criterion_group!(aggregation, bench_fill_and_aggregate,);

criterion_main!(distribution, aggregation);
