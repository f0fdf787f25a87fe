//! Algebraic notation parsing
//!
//! Dispatches on the first character: a lowercase file letter starts a pawn
//! move, `0`/`O` starts a castle, anything else must be a piece letter.
//! Every failure is recoverable: the caller re-prompts the player with the
//! error's message and the offending text.

use super::Move;
use crate::types::{Color, Coord, CoordParseError, File, Piece, Rank};

use std::str::{self, FromStr};

use thiserror::Error;

/// Error parsing algebraic notation; malformed user text, safe to re-prompt
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Empty input
    #[error("enter a move")]
    EmptyString,
    /// Castle notation other than the two accepted forms
    #[error("use 0-0 or 0-0-0 to castle")]
    BadCastle,
    /// First character is neither a file letter nor a piece letter
    #[error("{0:?} is not a piece")]
    UnknownPiece(char),
    /// A square failed to parse
    #[error("bad square: {0}")]
    BadCoord(#[from] CoordParseError),
    /// Promotion letter does not name a piece
    #[error("{0:?} is not a promotion piece")]
    BadPromotion(char),
    /// Disambiguation character is neither a rank nor a file
    #[error("cannot read {0:?} as a rank or file")]
    BadDisambiguation(char),
    /// Anything else that does not fit the grammar
    #[error("syntax error")]
    Syntax,
}

/// Parses one algebraic move for the player `color`
pub fn parse(color: Color, notation: &str) -> Result<Move, ParseError> {
    if !notation.is_ascii() {
        return Err(ParseError::Syntax);
    }
    match notation.as_bytes().first() {
        None => Err(ParseError::EmptyString),
        Some(b'a'..=b'h') => parse_pawn(color, notation.as_bytes()),
        Some(b'0' | b'O' | b'o') => parse_castle(color, notation),
        Some(_) => parse_piece(color, notation.as_bytes()),
    }
}

fn parse_castle(color: Color, notation: &str) -> Result<Move, ParseError> {
    match notation {
        "0-0" | "O-O" | "o-o" => Ok(Move::CastleKingside(color)),
        "0-0-0" | "O-O-O" | "o-o-o" => Ok(Move::CastleQueenside(color)),
        _ => Err(ParseError::BadCastle),
    }
}

/// Strips a trailing `=X` promotion suffix, if present
fn split_promotion(bytes: &[u8]) -> Result<(Option<Piece>, &[u8]), ParseError> {
    if bytes.len() >= 2 && bytes[bytes.len() - 2] == b'=' {
        let c = bytes[bytes.len() - 1] as char;
        let piece = Piece::from_san_char(c).ok_or(ParseError::BadPromotion(c))?;
        return Ok((Some(piece), &bytes[..bytes.len() - 2]));
    }
    Ok((None, bytes))
}

fn coord(bytes: &[u8]) -> Result<Coord, ParseError> {
    let s = str::from_utf8(bytes).map_err(|_| ParseError::Syntax)?;
    Ok(Coord::from_str(s)?)
}

fn parse_pawn(color: Color, bytes: &[u8]) -> Result<Move, ParseError> {
    let (promote, bytes) = split_promotion(bytes)?;
    let (dst, is_capture, src_file) = match bytes {
        [_, _] => (coord(bytes)?, false, None),
        [file, b'x', rest @ ..] if rest.len() == 2 => {
            // dispatch already guaranteed a file letter up front
            (coord(rest)?, true, File::from_char(*file as char))
        }
        _ => return Err(ParseError::Syntax),
    };
    Ok(Move::Normal {
        color,
        piece: Piece::Pawn,
        dst,
        is_capture,
        src_file,
        src_rank: None,
        promote,
    })
}

fn parse_piece(color: Color, bytes: &[u8]) -> Result<Move, ParseError> {
    let first = bytes[0] as char;
    let piece = Piece::from_san_char(first).ok_or(ParseError::UnknownPiece(first))?;
    let rest = &bytes[1..];
    if rest.len() < 2 {
        return Err(ParseError::Syntax);
    }

    // the last two characters are always the destination
    let (rest, dst_bytes) = rest.split_at(rest.len() - 2);
    let dst = coord(dst_bytes)?;

    let (is_capture, rest) = match rest.split_last() {
        Some((b'x', head)) => (true, head),
        _ => (false, rest),
    };

    // whatever is left is disambiguation
    let (src_file, src_rank) = match *rest {
        [] => (None, None),
        [c] => match Rank::from_char(c as char) {
            Some(rank) => (None, Some(rank)),
            None => match File::from_char(c as char) {
                Some(file) => (Some(file), None),
                None => return Err(ParseError::BadDisambiguation(c as char)),
            },
        },
        [_, _] => {
            let src = coord(rest)?;
            (Some(src.file()), Some(src.rank()))
        }
        _ => return Err(ParseError::Syntax),
    };

    Ok(Move::Normal {
        color,
        piece,
        dst,
        is_capture,
        src_file,
        src_rank,
        promote: None,
    })
}
