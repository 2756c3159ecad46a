use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kornia_tensor::Tensor;
use kornia_tensor_ops::ops::{kron, l2_norm, mean};
use rand::Rng;

fn bench_l2_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("l2_norm");
    let mut rng = rand::rng();

    for size in [8, 128, 1024, 16384] {
        let a: Vec<f32> = (0..size).map(|_| rng.random::<f32>()).collect();
        let a_tensor = Tensor::<f32, 1>::from_shape_vec([size], a).unwrap();

        group.bench_function(format!("f32_size_{}", size), |bencher| {
            bencher.iter(|| black_box(l2_norm(&a_tensor)))
        });
    }

    group.finish();
}

fn bench_mean_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_narrow");
    let mut rng = rand::rng();

    for size in [32, 256, 1024] {
        let data: Vec<f64> = (0..size * size).map(|_| rng.random::<f64>()).collect();
        let t = Tensor::<f64, 2>::from_shape_vec([size, size], data).unwrap();

        group.bench_function(format!("f64_size_{}", size), |bencher| {
            bencher.iter(|| {
                let inner = t
                    .narrow(0, size / 4, size / 2)
                    .and_then(|v| v.narrow(1, size / 4, size / 2))
                    .unwrap();
                black_box(mean(&inner).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_kron(c: &mut Criterion) {
    let base = Tensor::<f32, 2>::from_shape_fn([8, 8], |[i, j]| ((i + j) % 2) as f32);
    let block = Tensor::<f32, 2>::from_shape_val([64, 64], 1.0);

    c.bench_function("kron_8x8_64x64", |bencher| {
        bencher.iter(|| black_box(kron(&base, &block)))
    });
}

criterion_group!(benches, bench_l2_norm, bench_mean_narrow, bench_kron);
criterion_main!(benches);
