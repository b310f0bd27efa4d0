//! Criterion benchmarks for per-line bearing change.
//! Focus sizes: rows in {1, 100, 10_000}, 50 vertices per row.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lineturn::{total_bearing_change, Line, LineCollection, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_walks(rows: usize, vertices: usize, seed: u64) -> LineCollection<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    LineCollection::from_lines((0..rows).map(|_| {
        let mut p = Point::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
        (0..vertices)
            .map(|_| {
                p += Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
                p
            })
            .collect::<Line>()
    }))
}

fn bench_bearing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bearing");
    for &rows in &[1usize, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("total_bearing_change", rows),
            &rows,
            |b, &rows| {
                b.iter_batched(
                    || random_walks(rows, 50, 43),
                    |lines| {
                        let _res = total_bearing_change(&lines);
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_bearing);
criterion_main!(benches);
