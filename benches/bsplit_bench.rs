use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pi_splitter::base::Base;

fn bench_compute_pi_1k(c: &mut Criterion) {
    c.bench_function("compute_pi(1_000, dec)", |b| {
        b.iter(|| pi_splitter::compute_pi(black_box(1_000)).unwrap());
    });
}

fn bench_compute_pi_10k(c: &mut Criterion) {
    c.bench_function("compute_pi(10_000, dec)", |b| {
        b.iter(|| pi_splitter::compute_pi(black_box(10_000)).unwrap());
    });
}

fn bench_compute_pi_hex_1k(c: &mut Criterion) {
    c.bench_function("compute_pi_base(1_000, hex)", |b| {
        b.iter(|| pi_splitter::compute_pi_base(black_box(1_000), Base::Hex).unwrap());
    });
}

fn bench_compute_pi_parallel_4_workers(c: &mut Criterion) {
    c.bench_function("compute_pi_parallel(10_000, dec, 4)", |b| {
        b.iter(|| pi_splitter::compute_pi_parallel(black_box(10_000), Base::Decimal, 4, None).unwrap());
    });
}

fn bench_plan_new(c: &mut Criterion) {
    c.bench_function("Plan::new(1_000_000, dec)", |b| {
        b.iter(|| pi_splitter::plan::Plan::new(black_box(1_000_000), Base::Decimal).unwrap());
    });
}

criterion_group!(
    benches,
    bench_compute_pi_1k,
    bench_compute_pi_10k,
    bench_compute_pi_hex_1k,
    bench_compute_pi_parallel_4_workers,
    bench_plan_new,
);
criterion_main!(benches);
