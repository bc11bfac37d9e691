use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ab_significance::analytics::{confidence_level, evaluate};
use ab_significance::{Experiment, Variant};

fn five_variant_experiment() -> Experiment {
    Experiment::from_variants(
        "bench",
        vec![
            Variant::new("Control").with_counts(100_000, 10_000),
            Variant::new("A").with_counts(100_000, 10_300),
            Variant::new("B").with_counts(99_500, 11_200),
            Variant::new("C").with_counts(100_200, 9_900),
            Variant::new("D").with_counts(100_000, 10_800),
        ],
    )
    .expect("valid experiment")
}

fn evaluate_benchmark(c: &mut Criterion) {
    let exp = five_variant_experiment();

    c.bench_function("evaluate_five_variants", |b| {
        b.iter(|| {
            let outcome = evaluate(black_box(&exp));
            black_box(outcome.winner.is_some());
        });
    });
}

fn confidence_benchmark(c: &mut Criterion) {
    c.bench_function("confidence_level_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut z = 0.0;
            while z < 4.0 {
                acc += confidence_level(black_box(z));
                z += 0.01;
            }
            black_box(acc);
        });
    });
}

criterion_group!(significance, evaluate_benchmark, confidence_benchmark);
criterion_main!(significance);
