use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use denoise::{DenoiseConfig, Execution, FilterKind, Grid, NoiseRemover};
use std::hint::black_box;

fn bench_grid(width: usize, height: usize) -> Grid<u8> {
    let samples = (0..width * height)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 7) as u8)
        .collect();
    Grid::new(width, height, samples).expect("valid bench grid")
}

fn remove_noise_benchmarks(c: &mut Criterion) {
    let grid = bench_grid(1024, 768);
    let mut group = c.benchmark_group("remove_noise_1024x768");

    for filter in [FilterKind::Mean, FilterKind::Median, FilterKind::Gaussian] {
        for execution in [Execution::Sequential, Execution::Parallel] {
            let remover = NoiseRemover::from_config(
                DenoiseConfig::default()
                    .with_filter(filter)
                    .with_execution(execution),
            );
            group.bench_with_input(
                BenchmarkId::new(filter.to_string(), execution),
                &grid,
                |b, grid| b.iter(|| black_box(remover.remove_noise(black_box(grid)))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, remove_noise_benchmarks);
criterion_main!(benches);
