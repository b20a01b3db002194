//! Monotone path counting through a 0/1 obstacle grid.
//!
//! Starting at the top-left cell, how many right/down paths reach the
//! bottom-right cell without stepping on a wall (`1`)?
//!
//! Layers are grid rows. The frontier at layer `i` holds, for every column
//! `j`, the number of paths reaching cell `(i-1, j)`; layer 0 is a virtual row
//! above the grid carrying a single path into column 0.
//!
//! Cells other than `0` are treated as walls, and cells missing from a short
//! row are walls too, so the count is total even on malformed input. Use
//! [`GridPaths::try_new`] to reject such grids instead.

use crate::engine::SweepEngine;
use crate::error::AlgoError;
use crate::traits::RollingDp;

/// Path-counting instance over a borrowed grid.
#[derive(Debug)]
pub struct GridPaths<'a, R> {
    grid: &'a [R],
    cols: usize,
}

impl<R> Clone for GridPaths<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for GridPaths<'_, R> {}

impl<'a, R: AsRef<[u8]>> GridPaths<'a, R> {
    /// Wrap a grid without validation. The column count is taken from the
    /// first row.
    pub fn new(grid: &'a [R]) -> Self {
        let cols = grid.first().map_or(0, |row| row.as_ref().len());
        Self { grid, cols }
    }

    /// Wrap a grid after checking it is rectangular and holds only 0/1.
    pub fn try_new(grid: &'a [R]) -> Result<Self, AlgoError> {
        let this = Self::new(grid);
        for (row, cells) in grid.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != this.cols {
                return Err(AlgoError::RaggedGrid {
                    row,
                    expected: this.cols,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(AlgoError::InvalidCell { row, col, value });
            }
        }
        Ok(this)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn is_open(&self, row: usize, col: usize) -> bool {
        self.grid
            .get(row)
            .and_then(|cells| cells.as_ref().get(col))
            .is_some_and(|&v| v == 0)
    }

    /// Number of monotone paths from top-left to bottom-right.
    pub fn count(&self) -> u128 {
        SweepEngine::new(*self).run()
    }

    /// Enumerate every concrete path, exploring down before right.
    ///
    /// Exponential in the worst case; meant for small diagnostic grids.
    pub fn all_paths(&self) -> Vec<GridPath> {
        let mut paths = Vec::new();
        if self.rows() == 0 || self.cols == 0 {
            return paths;
        }
        let mut current = Vec::with_capacity(self.rows() + self.cols);
        self.walk(0, 0, &mut current, &mut paths);
        paths
    }

    fn walk(
        &self,
        row: usize,
        col: usize,
        current: &mut Vec<(usize, usize)>,
        paths: &mut Vec<GridPath>,
    ) {
        if row >= self.rows() || col >= self.cols || !self.is_open(row, col) {
            return;
        }
        current.push((row, col));
        if row == self.rows() - 1 && col == self.cols - 1 {
            paths.push(GridPath {
                cells: current.clone(),
            });
        } else {
            self.walk(row + 1, col, current, paths);
            self.walk(row, col + 1, current, paths);
        }
        current.pop();
    }
}

impl<R: AsRef<[u8]>> RollingDp for GridPaths<'_, R> {
    type Frontier = Vec<u128>;
    type Output = u128;

    fn num_layers(&self) -> usize {
        self.rows()
    }

    fn init_frontier(&self) -> Self::Frontier {
        let mut dp = vec![0u128; self.cols];
        if let Some(first) = dp.first_mut() {
            *first = 1;
        }
        dp
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
        for j in 0..self.cols {
            next[j] = if !self.is_open(layer, j) {
                0
            } else if j == 0 {
                // column 0 is only reachable from above
                prev[0]
            } else {
                prev[j].saturating_add(next[j - 1])
            };
        }
    }

    fn extract(&self, frontier_t: &Self::Frontier) -> Self::Output {
        if self.rows() == 0 {
            return 0;
        }
        frontier_t.last().copied().unwrap_or(0)
    }
}

/// Single step of a monotone path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Down,
    Right,
}

/// A concrete path as the ordered list of visited `(row, col)` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<(usize, usize)>,
}

impl GridPath {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// The moves between consecutive cells.
    pub fn moves(&self) -> Vec<Move> {
        self.cells
            .windows(2)
            .map(|w| if w[1].0 > w[0].0 { Move::Down } else { Move::Right })
            .collect()
    }
}

/// Count right/down paths from the top-left to the bottom-right cell.
///
/// Returns 0 for an empty grid. Runs in O(rows·cols) time and O(cols) space.
///
/// ```
/// use algo_drills::problems::grid_paths::count_paths;
///
/// let grid = [[0u8, 0, 1], [0, 0, 1], [1, 0, 0]];
/// assert_eq!(count_paths(&grid), 2);
/// ```
pub fn count_paths<R: AsRef<[u8]>>(grid: &[R]) -> u128 {
    GridPaths::new(grid).count()
}

/// Every path from top-left to bottom-right, down-moves explored first.
pub fn all_paths<R: AsRef<[u8]>>(grid: &[R]) -> Vec<GridPath> {
    GridPaths::new(grid).all_paths()
}
