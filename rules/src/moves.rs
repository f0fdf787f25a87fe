//! Move descriptors and their notation forms
//!
//! A [`Move`] is produced by one of two parsers: [`san`] for human algebraic
//! input, [`long`] for machine-generated coordinate notation. The board
//! consumes a `Move` and answers with a [`MoveResult`] carrying the canonical
//! long-notation encoding of what was actually played.

pub mod long;
pub mod san;

use crate::types::{Color, Coord, File, Piece, Rank};

use std::fmt;

/// A single move request
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Fully specified move, sourced from the external engine
    Exact {
        color: Color,
        src: Coord,
        dst: Coord,
        promote: Option<Piece>,
    },
    /// Algebraic move; the start square stays unresolved until the board
    /// runs candidate resolution
    Normal {
        color: Color,
        piece: Piece,
        dst: Coord,
        is_capture: bool,
        src_file: Option<File>,
        src_rank: Option<Rank>,
        promote: Option<Piece>,
    },
    CastleKingside(Color),
    CastleQueenside(Color),
}

impl Move {
    pub const fn color(&self) -> Color {
        match *self {
            Move::Exact { color, .. } => color,
            Move::Normal { color, .. } => color,
            Move::CastleKingside(color) => color,
            Move::CastleQueenside(color) => color,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Move::Exact {
                src, dst, promote, ..
            } => {
                write!(f, "{}{}", src, dst)?;
                if let Some(c) = promote.and_then(|p| p.san_char()) {
                    write!(f, "{}", c.to_ascii_lowercase())?;
                }
                Ok(())
            }
            Move::Normal {
                piece,
                dst,
                is_capture,
                src_file,
                src_rank,
                promote,
                ..
            } => {
                if let Some(c) = piece.san_char() {
                    write!(f, "{}", c)?;
                }
                if let Some(file) = src_file {
                    write!(f, "{}", file.as_char())?;
                }
                if let Some(rank) = src_rank {
                    write!(f, "{}", rank.as_char())?;
                }
                if is_capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", dst)?;
                if let Some(c) = promote.and_then(|p| p.san_char()) {
                    write!(f, "={}", c)?;
                }
                Ok(())
            }
            Move::CastleKingside(_) => write!(f, "0-0"),
            Move::CastleQueenside(_) => write!(f, "0-0-0"),
        }
    }
}

/// Outcome of a successfully applied move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveResult {
    /// Canonical long-notation encoding, appended by the caller to the move
    /// history it replays to the external engine
    pub long: long::Move,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display() {
        let qh5 = Move::Normal {
            color: Color::White,
            piece: Piece::Queen,
            dst: Coord::from_str("h5").unwrap(),
            is_capture: false,
            src_file: None,
            src_rank: None,
            promote: None,
        };
        assert_eq!(qh5.to_string(), "Qh5");
        let exd5 = Move::Normal {
            color: Color::White,
            piece: Piece::Pawn,
            dst: Coord::from_str("d5").unwrap(),
            is_capture: true,
            src_file: Some(File::E),
            src_rank: None,
            promote: None,
        };
        assert_eq!(exd5.to_string(), "exd5");
        let promote = Move::Exact {
            color: Color::White,
            src: Coord::from_str("a7").unwrap(),
            dst: Coord::from_str("a8").unwrap(),
            promote: Some(Piece::Queen),
        };
        assert_eq!(promote.to_string(), "a7a8q");
        assert_eq!(Move::CastleQueenside(Color::Black).to_string(), "0-0-0");
    }
}
