//! Errors raised when a piece is constructed with an illegal placement.

use crate::Color;
use thiserror::Error;

/// Errors that can occur when constructing a piece.
///
/// These are the only failures in the crate; movement and capture queries
/// are total over valid pieces.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PieceError {
    #[error("row and column must be in [0, 7], got ({row}, {column})")]
    InvalidPosition { row: i8, column: i8 },

    #[error("{}", pawn_rank_message(.color))]
    InvalidPawnRank { color: Color, row: i8 },
}

fn pawn_rank_message(color: &Color) -> &'static str {
    match color {
        Color::White => "row for white pawns must be >=1",
        Color::Black => "row for black pawns must be <=6",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_message_names_the_coordinates() {
        let err = PieceError::InvalidPosition { row: 9, column: 3 };
        assert_eq!(
            err.to_string(),
            "row and column must be in [0, 7], got (9, 3)"
        );
    }

    #[test]
    fn pawn_rank_messages() {
        let white = PieceError::InvalidPawnRank {
            color: Color::White,
            row: 0,
        };
        let black = PieceError::InvalidPawnRank {
            color: Color::Black,
            row: 7,
        };
        assert_eq!(white.to_string(), "row for white pawns must be >=1");
        assert_eq!(black.to_string(), "row for black pawns must be <=6");
    }
}
