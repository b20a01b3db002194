//! Levenshtein edit distance as a rolling DP.
//!
//! We treat layers as positions in `a` (0..=n), and the frontier at layer `i`
//! is the DP row `dist(a[0..i], b[0..j])` for every `j` in `0..=m`.
//!
//! Matching characters carry the diagonal predecessor unchanged; a mismatch
//! costs one plus the cheapest of delete (row above), insert (cell to the
//! left) and substitute (diagonal).

use crate::engine::SweepEngine;
use crate::traits::RollingDp;

/// Edit distance instance over two borrowed sequences.
#[derive(Debug)]
pub struct EditDistanceProblem<'a, T> {
    pub a: &'a [T],
    pub b: &'a [T],
}

impl<T> Clone for EditDistanceProblem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EditDistanceProblem<'_, T> {}

impl<'a, T: PartialEq> EditDistanceProblem<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self { a, b }
    }

    fn m(&self) -> usize {
        self.b.len()
    }
}

impl<T: PartialEq> RollingDp for EditDistanceProblem<'_, T> {
    type Frontier = Vec<usize>;
    type Output = usize;

    fn num_layers(&self) -> usize {
        // each step consumes one element of `a`
        self.a.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        // i = 0: turning ε into b[0..j] takes j insertions
        (0..=self.m()).collect()
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
        let ch = &self.a[layer];
        next[0] = layer + 1;
        for j in 1..=self.m() {
            next[j] = if *ch == self.b[j - 1] {
                prev[j - 1]
            } else {
                let delete = prev[j];
                let insert = next[j - 1];
                let substitute = prev[j - 1];
                1 + delete.min(insert).min(substitute)
            };
        }
    }

    fn extract(&self, frontier_t: &Self::Frontier) -> Self::Output {
        frontier_t[self.m()]
    }
}

/// One operation of an edit script turning `a` into `b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOp<T> {
    Keep(T),
    Substitute { from: T, to: T },
    Insert(T),
    Delete(T),
}

impl<T> EditOp<T> {
    /// Cost of the operation: 0 for `Keep`, 1 otherwise.
    pub fn cost(&self) -> usize {
        match self {
            EditOp::Keep(_) => 0,
            _ => 1,
        }
    }
}

/// Full (n+1)×(m+1) edit distance table.
///
/// Only needed for inspection and script reconstruction; the distance itself
/// is computed in O(m) space by [`edit_distance`].
#[derive(Clone, Debug)]
pub struct EditMatrix<'a, T> {
    a: &'a [T],
    b: &'a [T],
    rows: Vec<Vec<usize>>,
}

impl<'a, T: PartialEq + Clone> EditMatrix<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let (_, rows) = SweepEngine::new(EditDistanceProblem::new(a, b)).run_with_table();
        Self { a, b, rows }
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn distance(&self) -> usize {
        self.rows[self.a.len()][self.b.len()]
    }

    /// Reconstruct one minimal edit script by walking back from `(n, m)`.
    ///
    /// Ties prefer keep, then substitute, then delete, then insert.
    pub fn script(&self) -> Vec<EditOp<T>> {
        let dp = &self.rows;
        let mut i = self.a.len();
        let mut j = self.b.len();
        let mut rev_ops = Vec::with_capacity(i.max(j));

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] && dp[i][j] == dp[i - 1][j - 1] {
                rev_ops.push(EditOp::Keep(self.a[i - 1].clone()));
                i -= 1;
                j -= 1;
            } else if i > 0 && j > 0 && dp[i][j] == dp[i - 1][j - 1] + 1 {
                rev_ops.push(EditOp::Substitute {
                    from: self.a[i - 1].clone(),
                    to: self.b[j - 1].clone(),
                });
                i -= 1;
                j -= 1;
            } else if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
                rev_ops.push(EditOp::Delete(self.a[i - 1].clone()));
                i -= 1;
            } else {
                rev_ops.push(EditOp::Insert(self.b[j - 1].clone()));
                j -= 1;
            }
        }

        rev_ops.reverse();
        rev_ops
    }
}

/// Minimum number of single-element inserts, deletes and substitutions
/// turning `a` into `b`.
///
/// O(n·m) time, O(m) space.
///
/// ```
/// use algo_drills::problems::edit_distance::edit_distance;
///
/// assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    SweepEngine::new(EditDistanceProblem::new(a, b)).run()
}

/// [`edit_distance`] over Unicode scalar values.
pub fn edit_distance_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Full DP table for `a` → `b`.
pub fn edit_matrix<'a, T: PartialEq + Clone>(a: &'a [T], b: &'a [T]) -> EditMatrix<'a, T> {
    EditMatrix::new(a, b)
}
