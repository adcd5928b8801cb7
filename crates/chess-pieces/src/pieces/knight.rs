//! Knight geometry: the L-shaped jump.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Knight {
    placement: Placement,
}

impl Knight {
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        Ok(Knight {
            placement: Placement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Knight {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        let offset = self.placement.offset_to(row, column);
        // {1, 2} and {2, 1} are the only distance pairs whose product is 2
        !offset.is_zero() && offset.row_distance() * offset.column_distance() == 2
    }
}
