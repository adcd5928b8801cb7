//! Movement and capture rules for the six chess pieces.
//!
//! Every query is answered from a single piece's point of view: there is no
//! board, so nothing ever blocks a slide and nothing tracks whose turn it is.
//!
//! - [`Color`], [`PieceKind`] and [`Coordinate`] describe a piece
//! - [`Pawn`], [`Knight`], [`Bishop`], [`Rook`], [`Queen`] and [`King`] each
//!   implement [`ChessPiece`] with their own geometry
//! - [`Piece`] is the closed sum over the six, built with [`Piece::new`]
//!
//! # Example
//!
//! ```
//! use chess_pieces::{ChessPiece, Color, Piece, PieceKind};
//!
//! let queen = Piece::new(PieceKind::Queen, 0, 3, Color::White).unwrap();
//! assert!(queen.can_move(2, 5));
//! assert!(!queen.can_move(2, 4));
//!
//! let pawn = Piece::new(PieceKind::Pawn, 1, 3, Color::Black).unwrap();
//! assert!(queen.can_kill(&pawn));
//! ```

mod color;
mod coordinate;
mod error;
mod kind;
mod pieces;

pub use color::Color;
pub use coordinate::{Coordinate, Offset};
pub use error::PieceError;
pub use kind::PieceKind;
pub use pieces::{Bishop, ChessPiece, King, Knight, Pawn, Piece, Placement, Queen, Rook};
