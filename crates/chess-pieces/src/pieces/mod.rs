//! The piece contract and its six implementations.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

pub use bishop::Bishop;
pub use king::King;
pub use knight::Knight;
pub use pawn::Pawn;
pub use queen::Queen;
pub use rook::Rook;

use crate::{Color, Coordinate, Offset, PieceError, PieceKind};
use std::fmt;

/// Where a piece stands and which side it belongs to.
///
/// Every piece embeds one of these. It is fixed at construction; a move is
/// modelled by building a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    position: Coordinate,
    color: Color,
}

impl Placement {
    /// Validates `(row, column)` and pairs it with `color`.
    pub fn new(row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        let position = Coordinate::new(row, column).map_err(|err| {
            tracing::debug!(row, column, %color, "rejected piece placement");
            err
        })?;
        Ok(Placement { position, color })
    }

    #[inline]
    pub const fn position(self) -> Coordinate {
        self.position
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Displacement from this placement to `(row, column)`.
    #[inline]
    pub const fn offset_to(self, row: i8, column: i8) -> Offset {
        self.position.offset_to(row, column)
    }
}

/// Behaviour shared by every chess piece.
///
/// Implementors supply their placement and their movement geometry. Capture
/// defaults to "can move there and the colors differ", which holds for every
/// piece except the pawn.
pub trait ChessPiece {
    fn placement(&self) -> Placement;

    /// Returns true if the piece could move to `(row, column)`.
    ///
    /// Intermediate squares are never considered, and the piece's own
    /// square is never a legal target.
    fn can_move(&self, row: i8, column: i8) -> bool;

    /// Returns true if the piece could capture `other` from where it stands.
    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        self.color() != other.color() && self.can_move(other.row(), other.column())
    }

    fn position(&self) -> Coordinate {
        self.placement().position()
    }

    fn row(&self) -> i8 {
        self.position().row()
    }

    fn column(&self) -> i8 {
        self.position().column()
    }

    fn color(&self) -> Color {
        self.placement().color()
    }
}

/// Any one of the six chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PieceRecord", into = "PieceRecord")
)]
pub enum Piece {
    Pawn(Pawn),
    Knight(Knight),
    Bishop(Bishop),
    Rook(Rook),
    Queen(Queen),
    King(King),
}

impl Piece {
    /// Builds a piece of the given kind.
    ///
    /// Fails with [`PieceError::InvalidPosition`] if the row or column is
    /// outside 0-7, and with [`PieceError::InvalidPawnRank`] for a pawn on
    /// its own back rank.
    pub fn new(kind: PieceKind, row: i8, column: i8, color: Color) -> Result<Self, PieceError> {
        let piece = match kind {
            PieceKind::Pawn => Piece::Pawn(Pawn::new(row, column, color)?),
            PieceKind::Knight => Piece::Knight(Knight::new(row, column, color)?),
            PieceKind::Bishop => Piece::Bishop(Bishop::new(row, column, color)?),
            PieceKind::Rook => Piece::Rook(Rook::new(row, column, color)?),
            PieceKind::Queen => Piece::Queen(Queen::new(row, column, color)?),
            PieceKind::King => Piece::King(King::new(row, column, color)?),
        };
        Ok(piece)
    }

    /// Builds a piece at an already validated coordinate.
    pub fn at(kind: PieceKind, position: Coordinate, color: Color) -> Result<Self, PieceError> {
        Self::new(kind, position.row(), position.column(), color)
    }

    pub const fn kind(&self) -> PieceKind {
        match self {
            Piece::Pawn(_) => PieceKind::Pawn,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::King(_) => PieceKind::King,
        }
    }

    /// FEN letter, uppercase for White.
    pub fn symbol(&self) -> char {
        self.kind().symbol(self.color())
    }

    /// Every square this piece could move to, in row-major order from a1.
    pub fn targets(&self) -> impl Iterator<Item = Coordinate> {
        let piece = *self;
        Coordinate::all().filter(move |sq| piece.can_move(sq.row(), sq.column()))
    }

    fn as_dyn(&self) -> &dyn ChessPiece {
        match self {
            Piece::Pawn(p) => p,
            Piece::Knight(p) => p,
            Piece::Bishop(p) => p,
            Piece::Rook(p) => p,
            Piece::Queen(p) => p,
            Piece::King(p) => p,
        }
    }
}

impl ChessPiece for Piece {
    fn placement(&self) -> Placement {
        self.as_dyn().placement()
    }

    fn can_move(&self, row: i8, column: i8) -> bool {
        self.as_dyn().can_move(row, column)
    }

    fn can_kill(&self, other: &dyn ChessPiece) -> bool {
        self.as_dyn().can_kill(other)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color(), self.kind(), self.position())
    }
}

impl From<Pawn> for Piece {
    fn from(p: Pawn) -> Self {
        Piece::Pawn(p)
    }
}

impl From<Knight> for Piece {
    fn from(p: Knight) -> Self {
        Piece::Knight(p)
    }
}

impl From<Bishop> for Piece {
    fn from(p: Bishop) -> Self {
        Piece::Bishop(p)
    }
}

impl From<Rook> for Piece {
    fn from(p: Rook) -> Self {
        Piece::Rook(p)
    }
}

impl From<Queen> for Piece {
    fn from(p: Queen) -> Self {
        Piece::Queen(p)
    }
}

impl From<King> for Piece {
    fn from(p: King) -> Self {
        Piece::King(p)
    }
}

/// Flat wire form of a [`Piece`]; deserialization re-runs validation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PieceRecord {
    kind: PieceKind,
    color: Color,
    row: i8,
    column: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<PieceRecord> for Piece {
    type Error = PieceError;

    fn try_from(r: PieceRecord) -> Result<Self, Self::Error> {
        Piece::new(r.kind, r.row, r.column, r.color)
    }
}

#[cfg(feature = "serde")]
impl From<Piece> for PieceRecord {
    fn from(p: Piece) -> Self {
        PieceRecord {
            kind: p.kind(),
            color: p.color(),
            row: p.row(),
            column: p.column(),
        }
    }
}
