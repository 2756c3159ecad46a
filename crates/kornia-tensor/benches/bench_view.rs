use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kornia_tensor::Tensor;

fn sample_tensor() -> Tensor<u8, 3> {
    Tensor::from_shape_val([1080, 1080, 3], 0_u8)
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("View");

    group.bench_function("as_contiguous", |b| {
        b.iter_batched(
            sample_tensor,
            |tv| black_box(tv).permute_axes([2, 0, 1]).as_contiguous(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("expand_materialize", |b| {
        let eye = Tensor::<f32, 2>::from_shape_fn([3, 3], |[i, j]| if i == j { 1.0 } else { 0.0 });
        b.iter(|| {
            black_box(&eye)
                .expand([1024, 3, 3])
                .map(|batch| batch.to_standard_layout())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_view);
criterion_main!(benches);
