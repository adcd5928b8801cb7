//! Piece descriptions and the questions that can be asked about them.

use chess_pieces::{ChessPiece, Color, Coordinate, Piece, PieceError, PieceKind};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors from turning user input into pieces and squares.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown piece kind: {0}")]
    UnknownKind(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("invalid square: {0} (expected a1-h8)")]
    InvalidSquare(String),

    #[error(transparent)]
    Piece(#[from] PieceError),
}

/// Parses a piece kind from its name ("knight") or FEN letter ("n").
pub fn parse_kind(s: &str) -> Result<PieceKind, QueryError> {
    let mut chars = s.chars();
    let from_letter = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_symbol(c).map(|(kind, _)| kind),
        _ => None,
    };
    from_letter
        .or_else(|| PieceKind::from_name(s))
        .ok_or_else(|| QueryError::UnknownKind(s.to_string()))
}

pub fn parse_color(s: &str) -> Result<Color, QueryError> {
    Color::from_name(s).ok_or_else(|| QueryError::UnknownColor(s.to_string()))
}

pub fn parse_square(s: &str) -> Result<Coordinate, QueryError> {
    Coordinate::from_algebraic(s).ok_or_else(|| QueryError::InvalidSquare(s.to_string()))
}

fn algebraic<'de, D>(deserializer: D) -> Result<Coordinate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_square(&s).map_err(serde::de::Error::custom)
}

/// A piece as written by a user: kind, color and an algebraic square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub color: Color,
    #[serde(deserialize_with = "algebraic")]
    pub at: Coordinate,
}

impl PieceSpec {
    pub fn to_piece(self) -> Result<Piece, QueryError> {
        Ok(Piece::at(self.kind, self.at, self.color)?)
    }
}

/// One question about a piece.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "ask", rename_all = "snake_case")]
pub enum Question {
    CanMove {
        piece: PieceSpec,
        #[serde(deserialize_with = "algebraic")]
        to: Coordinate,
    },
    CanKill {
        piece: PieceSpec,
        other: PieceSpec,
    },
    Targets {
        piece: PieceSpec,
    },
}

/// The answer to a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Verdict(bool),
    Squares(Vec<String>),
}

impl Question {
    pub fn answer(&self) -> Result<Answer, QueryError> {
        let answer = match self {
            Question::CanMove { piece, to } => {
                Answer::Verdict(piece.to_piece()?.can_move(to.row(), to.column()))
            }
            Question::CanKill { piece, other } => {
                Answer::Verdict(piece.to_piece()?.can_kill(&other.to_piece()?))
            }
            Question::Targets { piece } => Answer::Squares(
                piece
                    .to_piece()?
                    .targets()
                    .map(Coordinate::to_algebraic)
                    .collect(),
            ),
        };
        Ok(answer)
    }
}

impl std::fmt::Display for PieceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.at)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Question::CanMove { piece, to } => write!(f, "can {piece} move to {to}?"),
            Question::CanKill { piece, other } => write!(f, "can {piece} capture {other}?"),
            Question::Targets { piece } => write!(f, "where can {piece} move?"),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Verdict(v) => write!(f, "{v}"),
            Answer::Squares(squares) => write!(f, "{}", squares.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: PieceKind, color: Color, at: &str) -> PieceSpec {
        PieceSpec {
            kind,
            color,
            at: parse_square(at).unwrap(),
        }
    }

    #[test]
    fn parse_kind_accepts_names_and_letters() {
        assert_eq!(parse_kind("queen"), Ok(PieceKind::Queen));
        assert_eq!(parse_kind("N"), Ok(PieceKind::Knight));
        assert_eq!(parse_kind("k"), Ok(PieceKind::King));
        assert_eq!(
            parse_kind("wizard"),
            Err(QueryError::UnknownKind("wizard".to_string()))
        );
    }

    #[test]
    fn parse_color_and_square() {
        assert_eq!(parse_color("black"), Ok(Color::Black));
        assert!(parse_color("green").is_err());
        assert_eq!(parse_square("d1").unwrap().column(), 3);
        assert_eq!(
            parse_square("z9"),
            Err(QueryError::InvalidSquare("z9".to_string()))
        );
    }

    #[test]
    fn can_move_question() {
        let q = Question::CanMove {
            piece: spec(PieceKind::Queen, Color::White, "d1"),
            to: parse_square("f3").unwrap(),
        };
        assert_eq!(q.answer(), Ok(Answer::Verdict(true)));
        assert_eq!(q.to_string(), "can White Queen on d1 move to f3?");
    }

    #[test]
    fn can_kill_question() {
        let q = Question::CanKill {
            piece: spec(PieceKind::Pawn, Color::White, "b3"),
            other: spec(PieceKind::Pawn, Color::Black, "c4"),
        };
        assert_eq!(q.answer(), Ok(Answer::Verdict(true)));
    }

    #[test]
    fn targets_question() {
        let q = Question::Targets {
            piece: spec(PieceKind::Pawn, Color::White, "e2"),
        };
        assert_eq!(
            q.answer(),
            Ok(Answer::Squares(vec!["e3".to_string(), "e4".to_string()]))
        );
        assert_eq!(q.answer().unwrap().to_string(), "e3 e4");
    }

    #[test]
    fn invalid_pawn_is_reported() {
        let q = Question::Targets {
            piece: spec(PieceKind::Pawn, Color::White, "e1"),
        };
        let err = q.answer().unwrap_err();
        assert_eq!(err.to_string(), "row for white pawns must be >=1");
    }
}
