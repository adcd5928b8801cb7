//! Rook geometry: any distance along a row or a column.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rook {
    placement: Placement,
}

impl Rook {
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        Ok(Rook {
            placement: Placement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Rook {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        self.placement.offset_to(row, column).is_straight()
    }
}
