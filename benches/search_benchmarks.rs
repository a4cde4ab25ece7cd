use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dupebench::generate::Generator;
use dupebench::search::{ParallelSearch, Strategy};

// Fixed seed so every run times identical inputs.
const SEED: u64 = 0xD0BE;

// 1. Sequential scanner comparison at two input sizes
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for len in [1_000, 10_000] {
        let mut generator = Generator::new(Some(SEED));
        let values = generator.with_duplicate(len);

        for strategy in [Strategy::Full, Strategy::Triangular, Strategy::TriangularRev] {
            group.bench_with_input(
                BenchmarkId::new(strategy.label(), len),
                &values,
                |b, values| {
                    b.iter(|| black_box(strategy.run(values, 4).unwrap()));
                },
            );
        }
    }
    group.finish();
}

// 2. Parallel coordinator across starting fan-outs
fn bench_parallel_fanouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let mut generator = Generator::new(Some(SEED));
    let values = generator.with_duplicate(10_000);

    for fanout in [1, 2, 4, 8] {
        let search = ParallelSearch::new(fanout).unwrap();
        group.bench_with_input(BenchmarkId::new("fanout", fanout), &values, |b, values| {
            b.iter(|| black_box(search.find(values).unwrap()));
        });
    }
    group.finish();
}

// 3. Miss path: no duplicate, every strategy pays its full exhaustive cost
fn bench_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("miss");
    let mut generator = Generator::new(Some(SEED));
    let values = generator.without_duplicate(1_000);

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::new(strategy.label(), 1_000),
            &values,
            |b, values| {
                b.iter(|| black_box(strategy.run(values, 4).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel_fanouts, bench_miss);
criterion_main!(benches);
