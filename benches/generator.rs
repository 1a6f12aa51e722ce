use criterion::{criterion_group, criterion_main, Criterion};
use gridgen::generate_solution_with_rng;
use rand::{rngs::StdRng, SeedableRng};

fn generate_order_9(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate order 9", |b| {
        b.iter(|| generate_solution_with_rng(9, &mut rng).unwrap())
    });
}

fn generate_order_4(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate order 4", |b| {
        b.iter(|| generate_solution_with_rng(4, &mut rng).unwrap())
    });
}

criterion_group!(benches, generate_order_9, generate_order_4);
criterion_main!(benches);
