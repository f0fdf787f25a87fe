//! Long (coordinate) notation, the engine-facing move encoding
//!
//! Exactly 4 or 5 characters: start square, destination square, optional
//! promotion letter (`e2e4`, `a7a8q`). This grammar is only fed
//! machine-generated strings from the trusted engine process, so a parse
//! failure here is a fatal internal error, not something to re-prompt for.

use crate::types::{Color, Coord, CoordParseError, Piece};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing long notation; fatal, since the source is trusted
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Long notation is always 4 or 5 characters
    #[error("unexpected long notation length")]
    BadLength,
    /// Bad start square
    #[error("bad start square: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination square: {0}")]
    BadDst(CoordParseError),
    /// Bad promotion letter
    #[error("bad promotion char {0:?}")]
    BadPromote(char),
}

/// Parsed move in long notation
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub src: Coord,
    pub dst: Coord,
    pub promote: Option<Piece>,
}

impl Move {
    pub const fn new(src: Coord, dst: Coord, promote: Option<Piece>) -> Move {
        Move { src, dst, promote }
    }

    /// Lifts the parsed notation into a board-level [`Move`](super::Move)
    /// for the player `color`
    pub const fn into_move(self, color: Color) -> super::Move {
        super::Move::Exact {
            color,
            src: self.src,
            dst: self.dst,
            promote: self.promote,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)?;
        if let Some(c) = self.promote.and_then(|p| p.san_char()) {
            write!(f, "{}", c.to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !s.is_ascii() || !matches!(s.len(), 4 | 5) {
            return Err(ParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(ParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(ParseError::BadDst)?;
        let promote = if s.len() == 5 {
            let c = s.as_bytes()[4] as char;
            Some(Piece::from_san_char(c).ok_or(ParseError::BadPromote(c))?)
        } else {
            None
        };
        Ok(Move { src, dst, promote })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_parse() {
        let e2 = Coord::from_parts(File::E, Rank::R2);
        let e4 = Coord::from_parts(File::E, Rank::R4);
        assert_eq!(Move::from_str("e2e4"), Ok(Move::new(e2, e4, None)));
        let a7 = Coord::from_parts(File::A, Rank::R7);
        let a8 = Coord::from_parts(File::A, Rank::R8);
        assert_eq!(
            Move::from_str("a7a8q"),
            Ok(Move::new(a7, a8, Some(Piece::Queen)))
        );
        // promotion letters are accepted in either case
        assert_eq!(
            Move::from_str("a7a8N"),
            Ok(Move::new(a7, a8, Some(Piece::Knight)))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Move::from_str(""), Err(ParseError::BadLength));
        assert_eq!(Move::from_str("e2e"), Err(ParseError::BadLength));
        assert_eq!(Move::from_str("e2e4e5"), Err(ParseError::BadLength));
        assert_eq!(
            Move::from_str("i2e4"),
            Err(ParseError::BadSrc(CoordParseError::BadFile('i')))
        );
        assert_eq!(
            Move::from_str("e2e9"),
            Err(ParseError::BadDst(CoordParseError::BadRank('9')))
        );
        assert_eq!(Move::from_str("a7a8x"), Err(ParseError::BadPromote('x')));
    }

    #[test]
    fn test_round_trip() {
        for s in ["e2e4", "g8f6", "a7a8q", "h2h1n"] {
            assert_eq!(Move::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_into_move() {
        let mv = Move::from_str("e7e8r").unwrap().into_move(Color::Black);
        assert_eq!(
            mv,
            super::super::Move::Exact {
                color: Color::Black,
                src: Coord::from_parts(File::E, Rank::R7),
                dst: Coord::from_parts(File::E, Rank::R8),
                promote: Some(Piece::Rook),
            }
        );
    }
}
