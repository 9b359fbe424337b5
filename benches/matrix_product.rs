//! Benchmarks for the dense matrix product and transpose.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mathkit::Matrix;

fn filled(size: usize, seed: f64) -> Matrix<f64> {
    let data = (0..size * size).map(|i| (i as f64 * seed).sin()).collect();
    Matrix::from_vec(size, size, data).unwrap()
}

fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_product");

    for &size in &[4usize, 16, 64, 128] {
        let a = filled(size, 0.37);
        let b = filled(size, 1.91);

        group.bench_with_input(BenchmarkId::new("try_product", size), &size, |bench, _| {
            bench.iter(|| black_box(a.try_product(black_box(&b)).unwrap()))
        });
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_transpose");

    for &size in &[16usize, 128, 512] {
        let mut m = filled(size, 0.5);

        group.bench_with_input(BenchmarkId::new("transpose", size), &size, |bench, _| {
            bench.iter(|| {
                m.transpose();
                black_box(m.as_slice().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_product, bench_transpose);
criterion_main!(benches);
