use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use locked_weasel::{Evolver, WeaselConfig, algorithms::locked::LockedWeasel};

// =============================================================================
// Single generation
// =============================================================================

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for offspring in [10, 50, 200] {
        let config = WeaselConfig {
            offspring,
            ..WeaselConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(offspring), &config, |b, config| {
            b.iter_batched(
                || LockedWeasel::new(config, 42).unwrap(),
                |mut weasel| black_box(weasel.step()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Full run to the target
// =============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for rate in [0.04, 0.08, 0.2] {
        let config = WeaselConfig {
            mutation_rate: rate,
            ..WeaselConfig::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(rate), &config, |b, config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut weasel = LockedWeasel::new(config, seed).unwrap();
                black_box(weasel.run(None, |_| {}).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_full_run);
criterion_main!(benches);
