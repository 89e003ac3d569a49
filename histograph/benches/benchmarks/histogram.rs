use criterion::{black_box, BenchmarkId, Criterion};
use histograph::{HistogramBuilder, MarkerStore};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[allow(clippy::unwrap_used)]
pub fn build_histogram(criterion: &mut Criterion) {
    env_logger::builder().is_test(false).try_init().unwrap();

    let mut group = criterion.benchmark_group("build_histogram");

    let day_start = 1_588_550_400_i64;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for distinct in [100, 10_000, 1_000_000] {
        let mut store: MarkerStore<i64> = MarkerStore::with_capacity(distinct);
        for _ in 0..distinct {
            store.add_marker_count(
                day_start + rng.gen_range(0..86_400 * 30),
                rng.gen_range(1..4),
            );
        }

        for resolution in [10_usize, 1_000] {
            let builder = HistogramBuilder::new(resolution).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("resolution-{resolution}"), distinct),
                &store,
                |bencher, store| bencher.iter(|| black_box(builder.build(store))),
            );
        }
    }

    let mut peak: MarkerStore<i64> = MarkerStore::new();
    peak.add_marker_count(day_start, 1_000_000);
    let builder = HistogramBuilder::new(1_000_usize).unwrap();
    group.bench_function("zero-width", |bencher| {
        bencher.iter(|| black_box(builder.build(&peak)))
    });
}

criterion::criterion_group!(benches, build_histogram);
