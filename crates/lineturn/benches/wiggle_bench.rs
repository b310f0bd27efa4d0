//! Criterion microbenches for the wiggly-line sampler.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lineturn::{wiggly_line, Point, WiggleCfg};

fn bench_wiggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("wiggle");
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(1_000.0, 250.0);
    for &n in &[100usize, 10_000] {
        let cfg = WiggleCfg::default().with_samples(n);
        group.bench_with_input(BenchmarkId::new("wiggly_line", n), &cfg, |b, &cfg| {
            b.iter(|| wiggly_line(p0, p1, cfg).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wiggle);
criterion_main!(benches);
