//! Batch solver for number-place (Sudoku) puzzle collections.
//!
//! Reads a collection file (see [`puzzle_file`] for the format), solves
//! every puzzle in it, prints each solution together with the sum of its
//! top-left three cells, and finishes with the total of those sums
//! across the collection.
//!
//! # Usage
//!
//! ```sh
//! nanpure puzzles.txt
//! ```
//!
//! Suppress the solved grids and print one line per puzzle:
//!
//! ```sh
//! nanpure --quiet puzzles.txt
//! ```
//!
//! Give up on any puzzle needing more than a fixed number of candidate
//! assignments:
//!
//! ```sh
//! nanpure --max-steps 1000000 puzzles.txt
//! ```
//!
//! Exit status is 0 when every puzzle solved, 1 when any did not, and 2
//! when the file could not be read or parsed.

use std::{fs, path::PathBuf, process, time::Instant};

use clap::Parser;
use nanpure_solver::{SolveOutcome, SolveStats, Solver};
use rayon::prelude::*;

use crate::puzzle_file::Puzzle;

mod puzzle_file;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle collection file to solve.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print one line per puzzle instead of the solved grids.
    #[arg(short, long)]
    quiet: bool,

    /// Abandon a puzzle after this many candidate assignments.
    #[arg(long, value_name = "COUNT")]
    max_steps: Option<u64>,

    /// Solve puzzles one at a time instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.file.display());
            process::exit(2);
        }
    };
    let puzzles = match puzzle_file::parse_collection(&text) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("cannot parse {}: {err}", args.file.display());
            process::exit(2);
        }
    };
    if puzzles.is_empty() {
        eprintln!("{} contains no puzzles", args.file.display());
        process::exit(2);
    }

    let solver = match args.max_steps {
        Some(limit) => Solver::with_max_steps(limit),
        None => Solver::new(),
    };

    let started = Instant::now();
    let results: Vec<(SolveOutcome, SolveStats)> = if args.sequential {
        puzzles
            .iter()
            .map(|puzzle| solver.solve_with_stats(&puzzle.grid))
            .collect()
    } else {
        puzzles
            .par_iter()
            .map(|puzzle| solver.solve_with_stats(&puzzle.grid))
            .collect()
    };
    let elapsed = started.elapsed();

    let mut solved_count = 0_usize;
    let mut total_sum = 0_u64;
    for (puzzle, (outcome, stats)) in puzzles.iter().zip(&results) {
        if report(puzzle, outcome, stats, args.quiet) {
            solved_count += 1;
        }
        if let SolveOutcome::Solved(grid) = outcome {
            total_sum += u64::from(grid.sum_of_top_left_three());
        }
    }

    log::info!(
        "solved {solved_count}/{} puzzles in {elapsed:.2?}",
        puzzles.len()
    );
    println!();
    println!("total of top-left sums: {total_sum}");

    if solved_count != puzzles.len() {
        process::exit(1);
    }
}

/// Prints one puzzle's result; returns whether it was solved.
fn report(puzzle: &Puzzle, outcome: &SolveOutcome, stats: &SolveStats, quiet: bool) -> bool {
    let label = &puzzle.label;
    match outcome {
        SolveOutcome::Solved(grid) => {
            let sum = grid.sum_of_top_left_three();
            if quiet {
                println!("{label}: {sum}");
            } else {
                println!("{label}");
                println!("{grid}");
                println!("sum of top-left three cells: {sum}");
                println!();
            }
            log::debug!(
                "{label}: {} by propagation, {} assignments, {} backtracks",
                stats.resolved_by_propagation,
                stats.assignments,
                stats.backtracks
            );
            true
        }
        SolveOutcome::Unsolvable => {
            println!("{label}: no solution");
            log::warn!(
                "{label}: search exhausted without a solution ({} assignments, {} backtracks)",
                stats.assignments,
                stats.backtracks
            );
            false
        }
        SolveOutcome::StepLimitReached => {
            println!("{label}: gave up after {} assignments", stats.assignments);
            log::warn!("{label}: step budget exhausted");
            false
        }
    }
}
