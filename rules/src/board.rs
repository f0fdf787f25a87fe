//! Board state and move legality
//!
//! The board owns the 8x8 grid and nothing else; move history, captured-piece
//! lists and the move counter belong to the game-loop driver and are passed
//! in. Applying a move follows a commit/revert protocol: the grid is
//! snapshotted by value, the move is applied, and if the mover's own king is
//! then attacked the snapshot is restored before the error surfaces. That
//! single test uniformly enforces "never leave your king in check", including
//! for discovered checks; castling is covered by its own path-safety check
//! instead.

use crate::castling::{self, CastleSpec, Side};
use crate::geometry;
use crate::moves::{long, Move, MoveResult};
use crate::types::{Cell, Color, Coord, Piece, PieceInstance};

use std::fmt;

use thiserror::Error;

/// A move which parsed but is forbidden by the rules; safe to re-prompt
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("{0} is occupied")]
    SquareOccupied(Coord),
    #[error("nothing to capture on {0}")]
    NothingToCapture(Coord),
    #[error("must promote on the last rank")]
    MustPromote,
    #[error("only a pawn on the last rank may promote")]
    BadPromotion,
    #[error("cannot promote to a pawn or a king")]
    BadPromotionTarget,
    #[error("no piece on {0}")]
    NoPieceAt(Coord),
    #[error("no {0:?} to move")]
    NoPieceFound(Piece),
    #[error("{0} is not a legal move")]
    NoLegalMove(Move),
    #[error("multiple pieces match {0}, use e.g. {1}")]
    Ambiguous(Move, String),
    #[error("move puts or leaves king in check")]
    LeavesKingInCheck,
    #[error("king out of position to castle")]
    CastleKingOutOfPosition,
    #[error("king has already moved")]
    CastleKingMoved,
    #[error("rook out of position to castle")]
    CastleRookOutOfPosition,
    #[error("rook has already moved")]
    CastleRookMoved,
    #[error("castle path is blocked")]
    CastlePathBlocked,
    #[error("king would move through or into check")]
    CastleThroughCheck,
}

/// Captured pieces per capturing player, in capture order
///
/// Owned by the game-loop driver and mutated by [`Board::make_move`] as a
/// side effect of an accepted capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    white: Vec<PieceInstance>,
    black: Vec<PieceInstance>,
}

impl Captures {
    pub fn new() -> Captures {
        Captures::default()
    }

    pub fn by(&self, color: Color) -> &[PieceInstance] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Total point value captured by `color`, read by the score display
    pub fn points(&self, color: Color) -> u32 {
        self.by(color).iter().map(|p| p.kind.value()).sum()
    }

    fn push(&mut self, color: Color, piece: PieceInstance) {
        match color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// The 8x8 board and the legality engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; 8]; 8],
}

impl Board {
    /// Standard opening position
    pub fn initial() -> Board {
        const BACK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut grid = [[Cell::Empty; 8]; 8];
        for (col, &kind) in BACK.iter().enumerate() {
            grid[0][col] = Cell::Piece(PieceInstance::new(kind, Color::Black));
            grid[1][col] = Cell::Piece(PieceInstance::new(Piece::Pawn, Color::Black));
            grid[6][col] = Cell::Piece(PieceInstance::new(Piece::Pawn, Color::White));
            grid[7][col] = Cell::Piece(PieceInstance::new(kind, Color::White));
        }
        Board { grid }
    }

    pub fn get(&self, at: Coord) -> Cell {
        self.grid[at.row()][at.col()]
    }

    fn set(&mut self, at: Coord, cell: Cell) {
        self.grid[at.row()][at.col()] = cell;
    }

    /// Validates and applies one move; on rejection the grid is untouched
    ///
    /// `move_number` counts half-moves from 0 and drives the en-passant
    /// window. Captured pieces are appended to `captures` for the mover.
    pub fn make_move(
        &mut self,
        mv: &Move,
        captures: &mut Captures,
        move_number: u32,
    ) -> Result<MoveResult, IllegalMove> {
        let (src, dst, promote) = match *mv {
            Move::Exact {
                color,
                src,
                dst,
                promote,
            } => self.make_exact(color, src, dst, promote, captures, move_number)?,
            Move::CastleKingside(color) => {
                self.make_castle(color, castling::spec(color, Side::King))?
            }
            Move::CastleQueenside(color) => {
                self.make_castle(color, castling::spec(color, Side::Queen))?
            }
            Move::Normal { .. } => self.make_normal(mv, captures, move_number)?,
        };
        Ok(MoveResult {
            long: long::Move::new(src, dst, promote),
        })
    }

    /// Is `color`'s king currently attacked?
    pub fn is_in_check(&self, color: Color) -> bool {
        self.does_player_target(color.inv(), &[self.king_coord(color)])
    }

    /// Squares holding `color`'s pieces which no other piece of the same
    /// color defends. Purely informational; used for the hint display.
    pub fn weak_coords(&self, color: Color) -> Vec<Coord> {
        Coord::iter()
            .filter(|&at| self.get(at).color() == Some(color))
            .filter(|&at| !self.does_player_target(color, &[at]))
            .collect()
    }

    fn make_exact(
        &mut self,
        color: Color,
        src: Coord,
        dst: Coord,
        promote: Option<Piece>,
        captures: &mut Captures,
        move_number: u32,
    ) -> Result<(Coord, Coord, Option<Piece>), IllegalMove> {
        // a king displaced by more than one column can only be castling
        let col_shift = (src.col() as isize - dst.col() as isize).abs();
        if self.get(src).kind() == Some(Piece::King) && col_shift > 1 {
            let spec = castling::spec_for_king_move(src, dst)
                .unwrap_or_else(|| panic!("no castle matches king move {}{}", src, dst));
            self.make_castle(color, spec)?;
        } else {
            self.commit(color, src, dst, promote, captures, move_number)?;
        }
        Ok((src, dst, promote))
    }

    fn make_castle(
        &mut self,
        color: Color,
        spec: &CastleSpec,
    ) -> Result<(Coord, Coord, Option<Piece>), IllegalMove> {
        self.validate_castle(color, spec)?;
        // king and rook move atomically; the path-safety check above already
        // subsumes the post-commit check test
        let king = self.get(spec.king_src);
        let rook = self.get(spec.rook_src);
        self.set(spec.king_dst, king);
        self.set(spec.king_src, Cell::Empty);
        self.set(spec.rook_dst, rook);
        self.set(spec.rook_src, Cell::Empty);
        Ok((spec.king_src, spec.king_dst, None))
    }

    fn validate_castle(&self, color: Color, spec: &CastleSpec) -> Result<(), IllegalMove> {
        let king = match self.get(spec.king_src) {
            Cell::Piece(p) if p.kind == Piece::King && p.color == color => p,
            _ => return Err(IllegalMove::CastleKingOutOfPosition),
        };
        if king.has_moved {
            return Err(IllegalMove::CastleKingMoved);
        }
        let rook = match self.get(spec.rook_src) {
            Cell::Piece(p) if p.kind == Piece::Rook && p.color == color => p,
            _ => return Err(IllegalMove::CastleRookOutOfPosition),
        };
        if rook.has_moved {
            return Err(IllegalMove::CastleRookMoved);
        }
        if !self.unobstructed(spec.pass) {
            return Err(IllegalMove::CastlePathBlocked);
        }
        if self.does_player_target(color.inv(), spec.king_path) {
            return Err(IllegalMove::CastleThroughCheck);
        }
        Ok(())
    }

    fn make_normal(
        &mut self,
        mv: &Move,
        captures: &mut Captures,
        move_number: u32,
    ) -> Result<(Coord, Coord, Option<Piece>), IllegalMove> {
        let &Move::Normal {
            color,
            piece,
            dst,
            is_capture,
            promote,
            ..
        } = mv
        else {
            unreachable!("make_normal expects a normal move");
        };
        if self.get(dst).color() == Some(color) {
            return Err(IllegalMove::SquareOccupied(dst));
        }
        if is_capture && self.get(dst).is_empty() {
            // a capture onto an empty square is only ever en passant
            let is_ep = piece == Piece::Pawn
                && self.enpassant_victim(color, dst, move_number).is_some();
            if !is_ep {
                return Err(IllegalMove::NothingToCapture(dst));
            }
        }
        if !is_capture && self.get(dst).is_occupied() {
            return Err(IllegalMove::SquareOccupied(dst));
        }
        if piece == Piece::Pawn
            && promote.is_none()
            && dst.row() == geometry::promotion_row(color)
        {
            return Err(IllegalMove::MustPromote);
        }
        if let Some(target) = promote {
            if piece != Piece::Pawn || dst.row() != geometry::promotion_row(color) {
                return Err(IllegalMove::BadPromotion);
            }
            if matches!(target, Piece::Pawn | Piece::King) {
                return Err(IllegalMove::BadPromotionTarget);
            }
        }
        // the move is legal if some matching piece can make it; find that piece
        let src = self.resolve_src(mv)?;
        self.commit(color, src, dst, promote, captures, move_number)?;
        Ok((src, dst, promote))
    }

    /// Finds the one piece the move applies to, or reports none/ambiguity
    fn resolve_src(&self, mv: &Move) -> Result<Coord, IllegalMove> {
        let &Move::Normal {
            color,
            piece,
            dst,
            is_capture,
            src_file,
            src_rank,
            ..
        } = mv
        else {
            unreachable!("resolve_src expects a normal move");
        };
        let mut candidates = Vec::new();
        for at in Coord::iter() {
            let Cell::Piece(p) = self.get(at) else { continue };
            if p.color != color || p.kind != piece {
                continue;
            }
            if src_file.is_some_and(|f| f != at.file()) {
                continue;
            }
            if src_rank.is_some_and(|r| r != at.rank()) {
                continue;
            }
            candidates.push(at);
        }
        if candidates.is_empty() {
            return Err(IllegalMove::NoPieceFound(piece));
        }

        let legal: Vec<Coord> = candidates
            .into_iter()
            .filter(|&at| self.pattern_legal(color, at, dst, is_capture))
            .collect();
        match *legal.as_slice() {
            [] => Err(IllegalMove::NoLegalMove(*mv)),
            [only] => Ok(only),
            [first, ..] => {
                let letter = piece.san_char().unwrap_or('P');
                Err(IllegalMove::Ambiguous(
                    *mv,
                    format!("{}{}{}", letter, first, dst),
                ))
            }
        }
    }

    /// Applies a move whose start square is already known, enforcing the
    /// king-safety invariant by snapshot and revert
    fn commit(
        &mut self,
        color: Color,
        src: Coord,
        dst: Coord,
        promote: Option<Piece>,
        captures: &mut Captures,
        move_number: u32,
    ) -> Result<(), IllegalMove> {
        let Cell::Piece(piece) = self.get(src) else {
            return Err(IllegalMove::NoPieceAt(src));
        };
        let snapshot = self.grid;

        let mut victim = None;
        if let Cell::Piece(v) = self.get(dst) {
            victim = Some(v);
        } else if piece.kind == Piece::Pawn {
            if let Some(at) = self.enpassant_victim(color, dst, move_number) {
                if let Cell::Piece(v) = self.get(at) {
                    victim = Some(v);
                }
                self.set(at, Cell::Empty);
            }
        }

        let mut moved = piece;
        moved.has_moved = true;
        if piece.kind == Piece::Pawn && (src.row() as isize - dst.row() as isize).abs() == 2 {
            moved.ep_move = Some(move_number);
        }
        let placed = match promote {
            // promotion replaces the pawn with a fresh instance
            Some(kind) => PieceInstance::new(kind, color),
            None => moved,
        };
        self.set(dst, Cell::Piece(placed));
        self.set(src, Cell::Empty);

        if self.is_in_check(color) {
            self.grid = snapshot;
            return Err(IllegalMove::LeavesKingInCheck);
        }
        if let Some(v) = victim {
            captures.push(color, v);
        }
        Ok(())
    }

    /// Pattern legality from `src` to `dst`, including obstruction for the
    /// sliding pieces but ignoring everything about the destination square
    fn pattern_legal(&self, color: Color, src: Coord, dst: Coord, is_capture: bool) -> bool {
        if src == dst {
            return false;
        }
        let Cell::Piece(p) = self.get(src) else {
            return false;
        };
        let (dr, dc) = (
            dst.row() as isize - src.row() as isize,
            dst.col() as isize - src.col() as isize,
        );
        match p.kind {
            Piece::King => dr.abs() <= 1 && dc.abs() <= 1,
            Piece::Knight => matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2)),
            Piece::Rook => self.straight_clear(src, dst),
            Piece::Bishop => self.diag_clear(src, dst),
            Piece::Queen => self.straight_clear(src, dst) || self.diag_clear(src, dst),
            Piece::Pawn => {
                if is_capture {
                    dr == geometry::pawn_forward_row_delta(color) && dc.abs() == 1
                } else {
                    let max = if p.has_moved { 1 } else { 2 };
                    dc == 0
                        && dr.signum() == geometry::pawn_forward_row_delta(color)
                        && dr.abs() <= max
                }
            }
        }
    }

    fn straight_clear(&self, src: Coord, dst: Coord) -> bool {
        match geometry::straight_path(src, dst) {
            Ok(path) => self.unobstructed(&path),
            Err(_) => false,
        }
    }

    fn diag_clear(&self, src: Coord, dst: Coord) -> bool {
        match geometry::diag_path(src, dst) {
            Ok(path) => self.unobstructed(&path),
            Err(_) => false,
        }
    }

    fn unobstructed(&self, path: &[Coord]) -> bool {
        path.iter().all(|&at| self.get(at).is_empty())
    }

    /// The pawn captured en passant by `color` moving onto the empty square
    /// `dst`, if the strict one-move window is open
    fn enpassant_victim(&self, color: Color, dst: Coord, move_number: u32) -> Option<Coord> {
        if dst.row() != geometry::ep_dst_row(color) {
            return None;
        }
        let victim_row = (dst.row() as isize - geometry::pawn_forward_row_delta(color)) as usize;
        let at = Coord::from_row_col(victim_row, dst.col());
        match self.get(at) {
            Cell::Piece(p)
                if p.kind == Piece::Pawn
                    && p.color == color.inv()
                    // the double step must have happened on the immediately
                    // preceding move, not just any earlier one
                    && move_number > 0
                    && p.ep_move == Some(move_number - 1) =>
            {
                Some(at)
            }
            _ => None,
        }
    }

    /// Does any piece of `color` pattern-legally reach any of `targets`?
    /// Pawns count with their capture pattern. Backs check detection,
    /// castle-path safety and the weak-squares query.
    fn does_player_target(&self, color: Color, targets: &[Coord]) -> bool {
        Coord::iter().any(|from| {
            match self.get(from) {
                Cell::Piece(p) if p.color == color => targets
                    .iter()
                    .any(|&t| self.pattern_legal(color, from, t, true)),
                _ => false,
            }
        })
    }

    fn king_coord(&self, color: Color) -> Coord {
        Coord::iter()
            .find(|&at| {
                matches!(self.get(at), Cell::Piece(p) if p.kind == Piece::King && p.color == color)
            })
            .unwrap_or_else(|| panic!("no king of color {:?}", color))
    }

    #[cfg(test)]
    pub(crate) fn empty_board() -> Board {
        Board {
            grid: [[Cell::Empty; 8]; 8],
        }
    }

    #[cfg(test)]
    pub(crate) fn put(&mut self, at: Coord, kind: Piece, color: Color) {
        self.set(at, Cell::Piece(PieceInstance::new(kind, color)));
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in &self.grid {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
