//! Error type for the validating entry points.
//!
//! The primary functions are total and never fail; these errors are only
//! produced by the `try_*` constructors that check preconditions up front.

use thiserror::Error;

/// Precondition violations detected by validating entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// A grid row does not have the same length as the first row.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A grid cell holds something other than 0 (open) or 1 (wall).
    #[error("grid cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// A digit string contains a non-digit character.
    #[error("character {found:?} at index {index} is not a decimal digit")]
    InvalidDigit { index: usize, found: char },

    /// A bishop lies outside the `size`×`size` board.
    #[error("bishop {index} at ({row}, {col}) is outside the {size}x{size} board")]
    BishopOutOfBounds {
        index: usize,
        row: i64,
        col: i64,
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::AlgoError;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AlgoError::RaggedGrid {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "grid row 2 has 1 cells, expected 3");

        let err = AlgoError::InvalidDigit {
            index: 4,
            found: 'x',
        };
        assert_eq!(
            err.to_string(),
            "character 'x' at index 4 is not a decimal digit"
        );

        let err = AlgoError::BishopOutOfBounds {
            index: 0,
            row: 5,
            col: -1,
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "bishop 0 at (5, -1) is outside the 5x5 board"
        );
    }
}
