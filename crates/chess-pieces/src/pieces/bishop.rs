//! Bishop geometry: any distance along a diagonal.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bishop {
    placement: Placement,
}

impl Bishop {
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        Ok(Bishop {
            placement: Placement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Bishop {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        self.placement.offset_to(row, column).is_diagonal()
    }
}
