//! Example: counting and listing monotone paths through a grid with walls.
//!
//! Run with:
//! `cargo run --example grid_paths`

use algo_drills::problems::grid_paths::{GridPaths, Move};

fn main() {
    let grid = [
        [0u8, 0, 0, 1],
        [0, 1, 0, 0],
        [0, 0, 0, 0],
        [1, 0, 1, 0],
    ];

    let problem = match GridPaths::try_new(&grid) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            return;
        }
    };

    println!("Grid {}x{}", problem.rows(), problem.cols());
    println!("Path count: {}", problem.count());

    for path in problem.all_paths() {
        let moves: String = path
            .moves()
            .iter()
            .map(|m| match m {
                Move::Down => 'D',
                Move::Right => 'R',
            })
            .collect();
        println!("  {moves}");
    }
}
