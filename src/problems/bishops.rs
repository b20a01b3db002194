//! Counting attacking bishop pairs on an M×M board.
//!
//! Two bishops attack each other when they share a principal diagonal
//! (constant `row - col`) or an anti-diagonal (constant `row + col`).
//! Attacks pass through intervening pieces, so a diagonal holding `k`
//! bishops contributes C(k, 2) pairs. Two distinct cells never share both
//! diagonals, so the two families are summed without correction.

use rustc_hash::FxHashMap;

use crate::error::AlgoError;
use crate::utils::pairs;

/// A bishop position as `(row, col)`.
pub type Square = (i64, i64);

/// The two diagonal families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Diagonal {
    /// Cells sharing `row - col`.
    Principal,
    /// Cells sharing `row + col`.
    Anti,
}

impl Diagonal {
    /// Diagonal index of `square`, widened so any `i64` coordinates fit.
    pub fn key(self, (row, col): Square) -> i128 {
        let (row, col) = (i128::from(row), i128::from(col));
        match self {
            Diagonal::Principal => row - col,
            Diagonal::Anti => row + col,
        }
    }
}

/// Bishops that share one diagonal, with the pairs they form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagonalGroup {
    pub family: Diagonal,
    pub key: i128,
    pub bishops: Vec<Square>,
    pub pairs: u64,
}

/// Breakdown of attacking pairs by diagonal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BishopReport {
    pub total: u64,
    pub principal_pairs: u64,
    pub anti_pairs: u64,
    /// Diagonals with at least two bishops, sorted by family then key.
    pub diagonals: Vec<DiagonalGroup>,
}

fn family_pairs(family: Diagonal, bishops: &[Square]) -> u64 {
    let mut counts: FxHashMap<i128, u64> = FxHashMap::default();
    for &square in bishops {
        *counts.entry(family.key(square)).or_insert(0) += 1;
    }
    counts.values().map(|&k| pairs(k)).sum()
}

/// Number of unordered bishop pairs that share a diagonal.
///
/// Returns 0 for fewer than two bishops. The board size does not affect the
/// count; see [`try_count_attacking_bishops`] for bounds checking.
///
/// ```
/// use algo_drills::problems::bishops::count_attacking_bishops;
///
/// let bishops = [(0, 0), (1, 2), (2, 2), (4, 0)];
/// assert_eq!(count_attacking_bishops(5, &bishops), 2);
/// ```
pub fn count_attacking_bishops(_board_size: usize, bishops: &[Square]) -> u64 {
    if bishops.len() <= 1 {
        return 0;
    }
    family_pairs(Diagonal::Principal, bishops) + family_pairs(Diagonal::Anti, bishops)
}

/// [`count_attacking_bishops`] after checking every bishop lies on the board.
pub fn try_count_attacking_bishops(board_size: usize, bishops: &[Square]) -> Result<u64, AlgoError> {
    let size = i64::try_from(board_size).unwrap_or(i64::MAX);
    let on_board = |v: i64| (0..size).contains(&v);
    if let Some((index, &(row, col))) = bishops
        .iter()
        .enumerate()
        .find(|(_, (row, col))| !on_board(*row) || !on_board(*col))
    {
        return Err(AlgoError::BishopOutOfBounds {
            index,
            row,
            col,
            size: board_size,
        });
    }
    Ok(count_attacking_bishops(board_size, bishops))
}

/// Per-diagonal breakdown of the attacking pairs.
pub fn bishop_report(_board_size: usize, bishops: &[Square]) -> BishopReport {
    if bishops.len() <= 1 {
        return BishopReport::default();
    }
    let mut report = BishopReport::default();
    for family in [Diagonal::Principal, Diagonal::Anti] {
        let mut groups: FxHashMap<i128, Vec<Square>> = FxHashMap::default();
        for &square in bishops {
            groups.entry(family.key(square)).or_default().push(square);
        }
        let mut shared: Vec<DiagonalGroup> = groups
            .into_iter()
            .filter(|(_, members)| members.len() >= 2)
            .map(|(key, members)| DiagonalGroup {
                family,
                key,
                pairs: pairs(members.len() as u64),
                bishops: members,
            })
            .collect();
        shared.sort_by_key(|g| g.key);

        let family_total: u64 = shared.iter().map(|g| g.pairs).sum();
        match family {
            Diagonal::Principal => report.principal_pairs = family_total,
            Diagonal::Anti => report.anti_pairs = family_total,
        }
        report.diagonals.extend(shared);
    }
    report.total = report.principal_pairs + report.anti_pairs;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let bishops = [(0, 0), (1, 2), (2, 2), (4, 0)];
        assert_eq!(count_attacking_bishops(5, &bishops), 2);

        let report = bishop_report(5, &bishops);
        assert_eq!(report.total, 2);
        assert_eq!(report.principal_pairs, 1);
        assert_eq!(report.anti_pairs, 1);
        assert_eq!(
            report.diagonals,
            vec![
                DiagonalGroup {
                    family: Diagonal::Principal,
                    key: 0,
                    bishops: vec![(0, 0), (2, 2)],
                    pairs: 1,
                },
                DiagonalGroup {
                    family: Diagonal::Anti,
                    key: 4,
                    bishops: vec![(2, 2), (4, 0)],
                    pairs: 1,
                },
            ]
        );
    }

    #[test]
    fn few_bishops_never_attack() {
        assert_eq!(count_attacking_bishops(8, &[]), 0);
        assert_eq!(count_attacking_bishops(8, &[(3, 3)]), 0);
        assert_eq!(bishop_report(8, &[(3, 3)]), BishopReport::default());
    }

    #[test]
    fn full_diagonal_counts_all_pairs() {
        let bishops = [(0, 0), (1, 1), (2, 2), (3, 3)];
        assert_eq!(count_attacking_bishops(4, &bishops), 6);
        let anti = [(0, 3), (1, 2), (2, 1), (3, 0)];
        assert_eq!(count_attacking_bishops(4, &anti), 6);
    }

    #[test]
    fn duplicates_count_as_sharing_both_diagonals() {
        assert_eq!(count_attacking_bishops(3, &[(1, 1), (1, 1)]), 2);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert_eq!(count_attacking_bishops(8, &[(i64::MAX, -1), (0, 0)]), 0);
        assert_eq!(count_attacking_bishops(8, &[(i64::MAX, i64::MAX), (0, 0)]), 1);
        assert_eq!(count_attacking_bishops(8, &[(i64::MIN, i64::MAX), (0, -1)]), 1);

        let report = bishop_report(8, &[(i64::MIN, i64::MIN), (i64::MAX, i64::MAX)]);
        assert_eq!(report.total, 1);
        assert_eq!(report.principal_pairs, 1);
        assert_eq!(report.diagonals[0].key, 0);
    }

    #[test]
    fn bounds_are_validated() {
        assert_eq!(try_count_attacking_bishops(5, &[(0, 0), (4, 4)]), Ok(1));
        assert_eq!(
            try_count_attacking_bishops(5, &[(0, 0), (5, 1)]),
            Err(AlgoError::BishopOutOfBounds {
                index: 1,
                row: 5,
                col: 1,
                size: 5
            })
        );
        assert!(try_count_attacking_bishops(5, &[(0, -1)]).is_err());
    }
}
