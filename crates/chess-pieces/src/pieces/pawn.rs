//! Pawn geometry.
//!
//! Pawns are the only pieces whose movement depends on color, whose first
//! advance may cover two squares, and whose capture shape differs from
//! their movement shape.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pawn {
    placement: Placement,
}

impl Pawn {
    /// Builds a pawn, rejecting a White pawn on row 0 or a Black pawn on row 7.
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        let placement = Placement::new(row, column, color)?;
        let on_own_back_rank = match color {
            Color::White => row < 1,
            Color::Black => row > 6,
        };
        if on_own_back_rank {
            tracing::debug!(row, column, %color, "rejected pawn on its own back rank");
            return Err(PieceError::InvalidPawnRank { color, row });
        }
        Ok(Pawn { placement })
    }

    /// Rows gained toward the opponent by moving to `row`. Negative means backwards.
    fn advance_to(&self, row: i8) -> i16 {
        let offset = self.placement.offset_to(row, self.column());
        offset.rows * i16::from(self.color().pawn_direction())
    }

    fn on_start_row(&self) -> bool {
        self.row() == self.color().pawn_start_row()
    }
}

impl ChessPiece for Pawn {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        if column != self.column() {
            return false;
        }
        let max_advance = if self.on_start_row() { 2 } else { 1 };
        (1..=max_advance).contains(&self.advance_to(row))
    }

    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        if self.color() == other.color() {
            return false;
        }
        let sideways = self.placement.offset_to(other.row(), other.column());
        self.advance_to(other.row()) == 1 && sideways.column_distance() == 1
    }
}
