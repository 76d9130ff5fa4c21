use array_heap::heap::{build_heap_bottom_up, build_heap_top_down, sort};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::prelude::*;

fn random_input(len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let input = random_input(10_000);
    c.bench_function("build_heap_bottom_up", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |data| build_heap_bottom_up(data),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("build_heap_top_down", |b| {
        b.iter_batched_ref(
            || input.clone(),
            |data| build_heap_top_down(data),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("sort", |b| {
        b.iter_batched_ref(|| input.clone(), |data| sort(data), BatchSize::SmallInput)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
