//! Classic algorithm drills
//!
//! A small library of independent, pure algorithms for well-known interview
//! problems. Every function is synchronous, allocation-bounded and
//! referentially transparent.
//!
//! ## Core idea
//! The dynamic programs share one shape: a frontier at layer 0, a step that
//! reads only the previous layer, and an answer read off the last layer.
//! 1. Model the recurrence as a layered DP with a bounded-width frontier.
//! 2. Implement the [`RollingDp`] trait for that recurrence.
//! 3. Let [`SweepEngine`] sweep it with two rolling buffers, or record the
//!    full table when you want to inspect it.
//!
//! ## Quick start
//! ```
//! use algo_drills::problems::{
//!     bishops::count_attacking_bishops, consecutive::longest_consecutive,
//!     decode_ways::num_decodings, edit_distance::edit_distance,
//!     grid_paths::count_paths, n_queens::n_queens, sieve::sieve,
//! };
//!
//! assert_eq!(count_paths(&[[0u8, 0, 1], [0, 0, 1], [1, 0, 0]]), 2);
//! assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
//! assert_eq!(num_decodings("2626"), 4);
//! assert_eq!(n_queens(8), 92);
//! assert_eq!(sieve(30).len(), 10);
//! assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
//! assert_eq!(count_attacking_bishops(5, &[(0, 0), (1, 2), (2, 2), (4, 0)]), 2);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains:
//! - Grid path counting with obstacles
//! - Edit (Levenshtein) distance
//! - Decode ways
//! - N-Queens
//! - Sieve of Eratosthenes and an unbounded prime stream
//! - Longest consecutive sequence
//! - Attacking bishops
//!
//! ## Features
//! - `parallel`: fan the N-Queens search out over rayon workers.
//! - `tracing`: emit spans around engine sweeps and searches.
//! - `heavy`: enable large stress tests.

pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::engine::SweepEngine;
pub use crate::error::AlgoError;
pub use crate::traits::RollingDp;
