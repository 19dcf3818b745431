//! Benchmarks for seeded Sudoku puzzle generation.
//!
//! Measures the complete generation pipeline (diagonal seeding, backtracking
//! completion, carving) at every difficulty.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while covering multiple
//! cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use hintoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for difficulty in Difficulty::ALL {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(difficulty, seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets = bench_generate
);
criterion_main!(benches);
