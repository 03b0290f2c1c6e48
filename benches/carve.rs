//! Criterion benchmarks for maze generation.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use warren::generate::carve;
use warren::grid::{Grid, Position};
use warren::prng::Prng;

/// Benchmark carve() across board sizes, reusing the grid allocation the
/// way a regenerating session does.
fn bench_carve_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");

    for (w, h) in [(9u32, 7u32), (21, 15), (64, 64), (256, 256)] {
        let cells = (w as u64) * (h as u64);
        group.throughput(Throughput::Elements(cells));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &(w, h),
            |b, &(w, h)| {
                let mut grid = Grid::new(w, h);
                let mut seed = 42u64;
                b.iter(|| {
                    seed = seed.wrapping_add(1);
                    let mut rng = Prng::new(seed);
                    carve(&mut grid, Position::ORIGIN, &mut rng);
                    black_box(grid.walls_at(0, 0).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_carve_sizes);
criterion_main!(benches);
