//! Problem implementations.
//!
//! The rolling-array DPs implement [`RollingDp`](crate::traits::RollingDp)
//! and run through [`SweepEngine`](crate::engine::SweepEngine):
//! - [`grid_paths`]     : monotone path counting through a 0/1 obstacle grid.
//! - [`edit_distance`]  : Levenshtein distance, full matrix and edit script.
//! - [`decode_ways`]    : digit-string decodings under `a=1 .. z=26`.
//!
//! The rest are direct searches and counts:
//! - [`n_queens`]       : backtracking placement count and boards.
//! - [`sieve`]          : Sieve of Eratosthenes and an unbounded prime stream.
//! - [`consecutive`]    : longest run of consecutive integers.
//! - [`bishops`]        : attacking bishop pairs by diagonal.

pub mod bishops;
pub mod consecutive;
pub mod decode_ways;
pub mod edit_distance;
pub mod grid_paths;
pub mod n_queens;
pub mod sieve;
