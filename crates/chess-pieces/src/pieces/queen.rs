//! Queen geometry: rook and bishop combined.

use super::{ChessPiece, Placement};
use crate::{Color, PieceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Queen {
    placement: Placement,
}

impl Queen {
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        Ok(Queen {
            placement: Placement::new(row, column, color)?,
        })
    }
}

impl ChessPiece for Queen {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        let offset = self.placement.offset_to(row, column);
        offset.is_straight() || offset.is_diagonal()
    }
}
