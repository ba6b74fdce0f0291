//! Benchmarks for puzzle solving.
//!
//! This benchmark suite measures [`Solver`] end to end, covering both of
//! its phases.
//!
//! # Benchmarks
//!
//! - **`solve_propagation_heavy`**: Solves a puzzle where candidate
//!   propagation fixes most cells and search has little left to do.
//! - **`solve_search_heavy`**: Solves a puzzle where propagation stalls
//!   early, so backtracking search dominates the run time.
//!
//! # Test Data
//!
//! Both puzzles come from Project Euler problem 96: grid 1 for the
//! propagation-heavy case and grid 50 for the search-heavy one. Fixed
//! inputs and a deterministic solver make every run comparable.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{Criterion, PlottingBackend, criterion_group, criterion_main};
use nanpure_core::Grid;
use nanpure_solver::Solver;

const PROPAGATION_HEAVY: &str = "
    003020600
    900305001
    001806400
    008102900
    700000008
    006708200
    002609500
    800203009
    005010300
";

const SEARCH_HEAVY: &str = "
    300200000
    000107000
    706030500
    070009080
    900020004
    010800050
    009040301
    000702000
    000008006
";

fn bench_solve_propagation_heavy(c: &mut Criterion) {
    let grid: Grid = PROPAGATION_HEAVY.parse().unwrap();
    let solver = Solver::new();
    c.bench_function("solve_propagation_heavy", |b| {
        b.iter(|| solver.solve(hint::black_box(&grid)));
    });
}

fn bench_solve_search_heavy(c: &mut Criterion) {
    let grid: Grid = SEARCH_HEAVY.parse().unwrap();
    let solver = Solver::new();
    c.bench_function("solve_search_heavy", |b| {
        b.iter(|| solver.solve(hint::black_box(&grid)));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_solve_propagation_heavy,
        bench_solve_search_heavy
);
criterion_main!(benches);
