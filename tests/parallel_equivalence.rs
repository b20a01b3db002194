#![cfg(feature = "parallel")]

use algo_drills::problems::n_queens::{n_queens, n_queens_boards, n_queens_sequential};

#[test]
fn parallel_n_queens_matches_sequential() {
    for n in 0..=11 {
        assert_eq!(n_queens(n), n_queens_sequential(n), "n={n}");
    }
}

#[test]
fn parallel_count_matches_enumeration() {
    for n in 1..=8 {
        assert_eq!(n_queens(n), n_queens_boards(n).len() as u64, "n={n}");
    }
}
