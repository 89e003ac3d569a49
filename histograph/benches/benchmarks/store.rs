use criterion::{black_box, BatchSize, Criterion};
use histograph::MarkerStore;
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn add_marker(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add_marker");
    group.throughput(criterion::Throughput::Elements(1));

    // A day of second-resolution timestamps: lots of distinct markers
    group.bench_function("unix-seconds", |bencher| {
        let mut store: MarkerStore<i64> = MarkerStore::new();
        let mut second = 1_588_550_400_i64;
        bencher.iter(|| {
            second += 1;
            store.add_marker(black_box(second));
        });
    });

    // Few distinct markers: mostly multiplicity bumps
    group.bench_function("repeated", |bencher| {
        let mut store: MarkerStore<i64> = MarkerStore::new();
        let mut i = 0_i64;
        bencher.iter(|| {
            i += 1;
            store.add_marker(black_box(i % 8));
        });
    });

    group.bench_function("real", |bencher| {
        let mut rng = StdRng::seed_from_u64(1);
        bencher.iter_batched(
            || rng.gen_range(-1_000.0..1_000.0),
            |value: f64| {
                let mut store: MarkerStore<OrderedFloat<f64>> = MarkerStore::with_capacity(1);
                store.add_marker(value);
                store
            },
            BatchSize::SmallInput,
        );
    });
}

criterion::criterion_group!(benches, add_marker);
