use criterion::{criterion_group, criterion_main, Criterion};
use kornia_tensor::Tensor;
use std::hint::black_box;

fn benchmark_tensor_clone(c: &mut Criterion) {
    let tensor = Tensor::<f32, 2>::from_shape_val([100, 100], 1.0);

    c.bench_function("tensor clone", |b| {
        b.iter(|| {
            let _clone = black_box(&tensor).clone();
        })
    });
}

fn benchmark_element_wise_op(c: &mut Criterion) {
    let tensor1 = Tensor::<f32, 2>::from_shape_val([100, 100], 1.0);
    let tensor2 = Tensor::<f32, 2>::from_shape_val([100, 100], 2.0);

    c.bench_function("element_wise_op", |b| {
        b.iter(|| black_box(&tensor1).element_wise_op(black_box(&tensor2), |a, b| *a + *b))
    });
}

fn benchmark_add_broadcast(c: &mut Criterion) {
    let row = Tensor::<f32, 1>::from_shape_val([100], 1.0);
    let tensor = Tensor::<f32, 2>::from_shape_val([100, 100], 2.0);

    c.bench_function("add broadcast", |b| {
        b.iter(|| {
            let expanded = black_box(&row).expand([100, 100])?;
            kornia_tensor::add(&expanded, black_box(&tensor))
        })
    });
}

criterion_group!(
    benches,
    benchmark_tensor_clone,
    benchmark_element_wise_op,
    benchmark_add_broadcast
);
criterion_main!(benches);
