//! Board coordinates.

use crate::PieceError;
use std::fmt;

/// A square on the board, addressed by row and column, each in 0-7.
///
/// Row 0 is White's back rank and column 0 is the a-file, so in algebraic
/// notation `(0, 0)` is `a1` and `(7, 7)` is `h8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    row: i8,
    column: i8,
}

impl Coordinate {
    /// Number of rows and columns on the board.
    pub const SIZE: i8 = 8;

    /// Creates a coordinate, rejecting rows or columns outside 0-7.
    pub const fn new(row: i8, column: i8) -> Result<Self, PieceError> {
        if Self::in_bounds(row, column) {
            Ok(Coordinate { row, column })
        } else {
            Err(PieceError::InvalidPosition { row, column })
        }
    }

    /// Returns true if `(row, column)` names a square on the board.
    #[inline]
    pub const fn in_bounds(row: i8, column: i8) -> bool {
        row >= 0 && row < Self::SIZE && column >= 0 && column < Self::SIZE
    }

    /// Parses a coordinate from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Coordinate {
            row: (rank - b'1') as i8,
            column: (file - b'a') as i8,
        })
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Returns the displacement from this square to `(row, column)`.
    ///
    /// The target is not required to be on the board.
    #[inline]
    pub const fn offset_to(self, row: i8, column: i8) -> Offset {
        Offset {
            rows: row as i16 - self.row as i16,
            columns: column as i16 - self.column as i16,
        }
    }

    /// Returns the algebraic notation for this coordinate.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.column as u8) as char,
            (b'1' + self.row as u8) as char
        )
    }

    /// Iterates over all 64 squares in row-major order, starting at a1.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |column| Coordinate { row, column }))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", self.to_algebraic())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    row: i8,
    column: i8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = PieceError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.column)
    }
}

/// Signed displacement between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub rows: i16,
    pub columns: i16,
}

impl Offset {
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.rows == 0 && self.columns == 0
    }

    /// Absolute row distance.
    #[inline]
    pub const fn row_distance(self) -> i16 {
        self.rows.abs()
    }

    /// Absolute column distance.
    #[inline]
    pub const fn column_distance(self) -> i16 {
        self.columns.abs()
    }

    /// True for a non-zero move along a diagonal.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_zero() && self.row_distance() == self.column_distance()
    }

    /// True for a non-zero move along a row or a column.
    #[inline]
    pub const fn is_straight(self) -> bool {
        (self.rows == 0) != (self.columns == 0)
    }
}
