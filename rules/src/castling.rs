//! Static castling specifications
//!
//! Four fixed specs cover both players times both wings. They are consulted
//! by the board when validating an explicit castle move, and when inferring a
//! castle from a long-notation king move of more than one column.

use crate::types::{Color, Coord, File, Rank};

/// The wing the king castles to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    King,
    Queen,
}

/// Fixed squares involved in one castling move
#[derive(Debug, PartialEq, Eq)]
pub struct CastleSpec {
    pub king_src: Coord,
    pub rook_src: Coord,
    pub king_dst: Coord,
    pub rook_dst: Coord,
    /// Squares between king and rook which must be empty
    pub pass: &'static [Coord],
    /// King start, traversal and destination squares, none of which may be
    /// attacked by the opposing side
    pub king_path: &'static [Coord],
}

const fn sq(file: File, rank: Rank) -> Coord {
    Coord::from_parts(file, rank)
}

static WHITE_KINGSIDE: CastleSpec = CastleSpec {
    king_src: sq(File::E, Rank::R1),
    rook_src: sq(File::H, Rank::R1),
    king_dst: sq(File::G, Rank::R1),
    rook_dst: sq(File::F, Rank::R1),
    pass: &[sq(File::F, Rank::R1), sq(File::G, Rank::R1)],
    king_path: &[sq(File::E, Rank::R1), sq(File::F, Rank::R1), sq(File::G, Rank::R1)],
};

static WHITE_QUEENSIDE: CastleSpec = CastleSpec {
    king_src: sq(File::E, Rank::R1),
    rook_src: sq(File::A, Rank::R1),
    king_dst: sq(File::C, Rank::R1),
    rook_dst: sq(File::D, Rank::R1),
    pass: &[sq(File::B, Rank::R1), sq(File::C, Rank::R1), sq(File::D, Rank::R1)],
    king_path: &[sq(File::E, Rank::R1), sq(File::D, Rank::R1), sq(File::C, Rank::R1)],
};

static BLACK_KINGSIDE: CastleSpec = CastleSpec {
    king_src: sq(File::E, Rank::R8),
    rook_src: sq(File::H, Rank::R8),
    king_dst: sq(File::G, Rank::R8),
    rook_dst: sq(File::F, Rank::R8),
    pass: &[sq(File::F, Rank::R8), sq(File::G, Rank::R8)],
    king_path: &[sq(File::E, Rank::R8), sq(File::F, Rank::R8), sq(File::G, Rank::R8)],
};

static BLACK_QUEENSIDE: CastleSpec = CastleSpec {
    king_src: sq(File::E, Rank::R8),
    rook_src: sq(File::A, Rank::R8),
    king_dst: sq(File::C, Rank::R8),
    rook_dst: sq(File::D, Rank::R8),
    pass: &[sq(File::B, Rank::R8), sq(File::C, Rank::R8), sq(File::D, Rank::R8)],
    king_path: &[sq(File::E, Rank::R8), sq(File::D, Rank::R8), sq(File::C, Rank::R8)],
};

static ALL: [&CastleSpec; 4] = [
    &WHITE_KINGSIDE,
    &WHITE_QUEENSIDE,
    &BLACK_KINGSIDE,
    &BLACK_QUEENSIDE,
];

pub fn spec(color: Color, side: Side) -> &'static CastleSpec {
    match (color, side) {
        (Color::White, Side::King) => &WHITE_KINGSIDE,
        (Color::White, Side::Queen) => &WHITE_QUEENSIDE,
        (Color::Black, Side::King) => &BLACK_KINGSIDE,
        (Color::Black, Side::Queen) => &BLACK_QUEENSIDE,
    }
}

/// The spec matching a king move given in long notation, if there is one
pub fn spec_for_king_move(king_src: Coord, king_dst: Coord) -> Option<&'static CastleSpec> {
    ALL.iter()
        .copied()
        .find(|s| s.king_src == king_src && s.king_dst == king_dst)
}
