use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};

use advent::{PuzzleInput, Registry};

/// Benchmarks every registered solver whose real input is present in the data directory.
pub fn criterion_benchmark(c: &mut Criterion) {
    let data_dir = std::env::var_os("ADVENT_DATA_DIR")
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    let Ok(registry) = Registry::with_all_solvers() else {
        return;
    };
    for key in registry.keys() {
        let Ok(input) = PuzzleInput::load(&data_dir, &key.year, &key.puzzle, false) else {
            continue;
        };
        c.bench_function(&key.to_string(), |b| b.iter(|| registry.solve(key, &input)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
