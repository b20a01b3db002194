//! Example: N-Queens counts and a rendered board.
//!
//! Run with:
//! `cargo run --example n_queens --features parallel`

use algo_drills::problems::n_queens::{n_queens, n_queens_boards};

fn main() {
    for n in 1..=10 {
        println!("n = {n:2}: {} placements", n_queens(n));
    }

    if let Some(first) = n_queens_boards(8).first() {
        println!("\nFirst 8-queens solution:");
        for row in first.render() {
            println!("  {row}");
        }
    }
}
