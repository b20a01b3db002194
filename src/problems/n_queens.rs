//! N-Queens counting by row-by-row backtracking.
//!
//! One queen per row; the search keeps three occupancy tables so each
//! conflict check is O(1):
//! - columns,
//! - principal diagonals keyed by `row - col` (offset by `n - 1`),
//! - anti-diagonals keyed by `row + col`.
//!
//! Columns are tried in ascending order, so solutions come out in
//! lexicographic order of their column vectors.
//!
//! `n = 0` yields 0 placements. That is the convention this crate commits
//! to, even though a 0×0 board arguably has one empty placement.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Backtracking state for one board size.
#[derive(Clone, Debug)]
struct QueenSearch {
    n: usize,
    cols: Vec<bool>,
    diag: Vec<bool>,
    anti: Vec<bool>,
    placed: Vec<usize>,
}

impl QueenSearch {
    fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            cols: vec![false; n],
            diag: vec![false; diagonals],
            anti: vec![false; diagonals],
            placed: Vec::with_capacity(n),
        }
    }

    #[inline]
    fn keys(&self, row: usize, col: usize) -> (usize, usize) {
        (row + self.n - 1 - col, row + col)
    }

    #[inline]
    fn is_free(&self, row: usize, col: usize) -> bool {
        let (d, a) = self.keys(row, col);
        !(self.cols[col] || self.diag[d] || self.anti[a])
    }

    fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let (d, a) = self.keys(row, col);
        self.cols[col] = occupied;
        self.diag[d] = occupied;
        self.anti[a] = occupied;
        if occupied {
            self.placed.push(col);
        } else {
            self.placed.pop();
        }
    }

    /// Count completions from `row` onward, calling `on_solution` for each.
    fn solve<F: FnMut(&[usize])>(&mut self, row: usize, on_solution: &mut F) -> u64 {
        if row == self.n {
            on_solution(&self.placed);
            return 1;
        }
        let mut count = 0;
        for col in 0..self.n {
            if !self.is_free(row, col) {
                continue;
            }
            self.set(row, col, true);
            count += self.solve(row + 1, on_solution);
            self.set(row, col, false);
        }
        count
    }

    /// Count solutions whose first-row queen sits in `col`.
    fn count_from_first(n: usize, col: usize) -> u64 {
        let mut search = Self::new(n);
        search.set(0, col, true);
        search.solve(1, &mut |_: &[usize]| {})
    }
}

/// A full solution: `columns()[row]` is the column of the queen in `row`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Board rows with `Q` for a queen and `.` for an empty square.
    pub fn render(&self) -> Vec<String> {
        let n = self.columns.len();
        self.columns
            .iter()
            .map(|&c| (0..n).map(|j| if j == c { 'Q' } else { '.' }).collect())
            .collect()
    }

    /// True when no two queens share a row, column or diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.columns.len();
        self.columns.iter().all(|&c| c < n)
            && self.columns.iter().enumerate().all(|(r1, &c1)| {
                self.columns.iter().enumerate().skip(r1 + 1).all(|(r2, &c2)| {
                    c1 != c2 && r2 - r1 != c1.abs_diff(c2)
                })
            })
    }
}

/// Number of ways to place `n` non-attacking queens on an `n`×`n` board.
///
/// With the `parallel` feature, the first row is fanned out across rayon
/// workers; the result is identical to the sequential search.
///
/// ```
/// use algo_drills::problems::n_queens::n_queens;
///
/// assert_eq!(n_queens(4), 2);
/// assert_eq!(n_queens(8), 92);
/// ```
pub fn n_queens(n: usize) -> u64 {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("n_queens", n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if n == 0 {
        return 0;
    }
    count_first_row(n)
}

#[cfg(feature = "parallel")]
fn count_first_row(n: usize) -> u64 {
    (0..n)
        .into_par_iter()
        .map(|col| QueenSearch::count_from_first(n, col))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn count_first_row(n: usize) -> u64 {
    (0..n).map(|col| QueenSearch::count_from_first(n, col)).sum()
}

/// Single-threaded count, regardless of enabled features.
pub fn n_queens_sequential(n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    QueenSearch::new(n).solve(0, &mut |_: &[usize]| {})
}

/// Every solution for an `n`×`n` board, in lexicographic column order.
pub fn n_queens_boards(n: usize) -> Vec<Placement> {
    let mut solutions = Vec::new();
    if n == 0 {
        return solutions;
    }
    QueenSearch::new(n).solve(0, &mut |cols: &[usize]| {
        solutions.push(Placement {
            columns: cols.to_vec(),
        })
    });
    solutions
}
