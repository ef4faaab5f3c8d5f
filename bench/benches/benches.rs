use plasma_core::{
    DiamondSquare, Grid, RngSampler, SequenceSampler, ValueRange, clamp_map, utils::to_gray_bytes,
};
use plasma_storage::pgm;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZE: usize = 513;
const SEED: u64 = 2025;

fn bench_generate_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("DiamondSquare generate");
    for size in [129, 257, 513] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut grid = Grid::new(size).unwrap();
            let mut sampler = RngSampler::seeded(SEED);
            let mut engine = DiamondSquare::new(196);
            b.iter(|| engine.generate(&mut grid, &mut sampler))
        });
    }
    group.finish();
}

fn bench_thread_rng(c: &mut Criterion) {
    c.bench_function("DiamondSquare generate (thread rng)", |b| {
        let mut grid = Grid::new(SIZE).unwrap();
        let mut sampler = RngSampler::thread();
        let mut engine = DiamondSquare::new(196);
        b.iter(|| engine.generate(&mut grid, &mut sampler))
    });
}

// Subdivision alone, no sampling cost
fn bench_fractal_zero_range(c: &mut Criterion) {
    c.bench_function("DiamondSquare fractal (zero displacement)", |b| {
        let mut grid = Grid::new(SIZE).unwrap();
        b.iter(|| {
            let mut engine = DiamondSquare::new(0);
            engine.fractal(&mut grid, &mut SequenceSampler::constant(0))
        })
    });
}

fn bench_clamp(c: &mut Criterion) {
    c.bench_function("clamp_map", |b| {
        let mut grid = Grid::new(SIZE).unwrap();
        DiamondSquare::new(196)
            .with_output_range(ValueRange::new(i32::MIN, i32::MAX))
            .generate(&mut grid, &mut RngSampler::seeded(SEED));
        b.iter(|| {
            let mut g = grid.clone();
            clamp_map(&mut g, ValueRange::default())
        })
    });
}

fn bench_outputs(c: &mut Criterion) {
    let mut grid = Grid::new(SIZE).unwrap();
    DiamondSquare::new(196).generate(&mut grid, &mut RngSampler::seeded(SEED));

    c.bench_function("gray bytes", |b| b.iter(|| to_gray_bytes(black_box(&grid))));
    c.bench_function("PGM encode", |b| b.iter(|| pgm::encode(black_box(&grid))));
}

criterion_group!(
    plasma_benchmarks,
    bench_generate_sizes,
    bench_thread_rng,
    bench_fractal_zero_range,
    bench_clamp,
    bench_outputs
);
criterion_main!(plasma_benchmarks);
