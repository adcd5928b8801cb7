//! King geometry: one square in any of the eight directions.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct King {
    placement: Placement,
}

impl King {
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        Ok(King {
            placement: Placement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for King {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        let offset = self.placement.offset_to(row, column);
        !offset.is_zero() && offset.row_distance() <= 1 && offset.column_distance() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pawn;

    #[test]
    fn moves_one_square() {
        let king = King::new(0, 4, Color::White).unwrap();
        assert!(king.can_move(0, 5));
        assert!(king.can_move(0, 3));
        assert!(king.can_move(1, 4));
        assert!(king.can_move(1, 5));
        assert!(king.can_move(1, 3));
        assert!(!king.can_move(2, 4));
        assert!(!king.can_move(0, 6));
    }

    #[test]
    fn stays_put_is_not_a_move() {
        let king = King::new(4, 4, Color::White).unwrap();
        assert!(!king.can_move(4, 4));
    }

    #[test]
    fn kills_adjacent_opposite_color() {
        let king = King::new(0, 4, Color::White).unwrap();
        assert!(king.can_kill(&Pawn::new(1, 4, Color::Black).unwrap()));
        assert!(!king.can_kill(&Pawn::new(1, 4, Color::White).unwrap()));
        assert!(!king.can_kill(&Pawn::new(2, 4, Color::Black).unwrap()));
    }
}
