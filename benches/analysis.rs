use amm_coa::analysis::report::build_dashboard;
use amm_coa::analysis::{Analysis, PoolBalances, RateOrientation, SwapTrial, TrialDump};
use amm_coa::dashboard::html::render;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

/// Generate a synthetic trial dump with growing swap sizes
fn generate_trial_dump(trial_count: usize) -> TrialDump {
    let mut price = 1.0 + fastrand::f64() / 10.0;
    let trials = (1..=trial_count)
        .map(|i| {
            let amount_specified = i as f64 * 10.0;
            let old_price = price;
            // Every swap moves the price up a little
            price *= 1.0 + fastrand::f64() / 100.0;
            SwapTrial {
                amount_specified,
                old_price,
                new_price: price,
                swap_received: amount_specified / price,
            }
        })
        .collect();

    TrialDump {
        balances: Some(PoolBalances {
            sweth: 5_000.0 + fastrand::f64() * 1_000.0,
            eth: 5_000.0 + fastrand::f64() * 1_000.0,
        }),
        trials,
    }
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    group.sample_size(20);

    for trial_count in [100, 1_000, 10_000] {
        let dump = generate_trial_dump(trial_count);
        group.throughput(criterion::Throughput::Elements(trial_count as u64));

        group.bench_with_input(BenchmarkId::new("derive", trial_count), &dump, |b, dump| {
            b.iter_batched(
                || dump.clone(),
                |dump| black_box(Analysis::derive(dump, RateOrientation::default())),
                BatchSize::SmallInput,
            );
        });

        let analysis = Analysis::derive(dump, RateOrientation::default());
        group.bench_with_input(
            BenchmarkId::new("render", trial_count),
            &analysis,
            |b, analysis| {
                b.iter(|| {
                    let dashboard = build_dashboard(black_box(analysis)).unwrap();
                    black_box(render(&dashboard).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
