use crate::types::{Color, Coord};

use arrayvec::ArrayVec;
use thiserror::Error;

/// Open squares strictly between two aligned squares; at most 6 on an 8x8 board
pub type Path = ArrayVec<Coord, 6>;

/// Path requested between squares that are not aligned the requested way
///
/// Callers are expected to filter alignment beforehand; an escaped
/// `GeometryError` indicates a programming error, not bad user input.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("{0} and {1} do not share a rank or file")]
    NotStraight(Coord, Coord),
    #[error("{0} and {1} are not on a diagonal")]
    NotDiagonal(Coord, Coord),
}

/// Squares strictly between `a` and `b` along a shared rank or file
pub fn straight_path(a: Coord, b: Coord) -> Result<Path, GeometryError> {
    let mut path = Path::new();
    if a.row() == b.row() {
        let (lo, hi) = (a.col().min(b.col()), a.col().max(b.col()));
        for col in lo + 1..hi {
            path.push(Coord::from_row_col(a.row(), col));
        }
    } else if a.col() == b.col() {
        let (lo, hi) = (a.row().min(b.row()), a.row().max(b.row()));
        for row in lo + 1..hi {
            path.push(Coord::from_row_col(row, a.col()));
        }
    } else {
        return Err(GeometryError::NotStraight(a, b));
    }
    Ok(path)
}

/// Squares strictly between `a` and `b` along a shared diagonal
pub fn diag_path(a: Coord, b: Coord) -> Result<Path, GeometryError> {
    let (dr, dc) = (
        b.row() as isize - a.row() as isize,
        b.col() as isize - a.col() as isize,
    );
    if dr.abs() != dc.abs() {
        return Err(GeometryError::NotDiagonal(a, b));
    }
    let mut path = Path::new();
    for step in 1..dr.abs() {
        let row = a.row() as isize + step * dr.signum();
        let col = a.col() as isize + step * dc.signum();
        path.push(Coord::from_row_col(row as usize, col as usize));
    }
    Ok(path)
}

/// Row delta of one forward pawn step; white pawns move toward row 0
pub const fn pawn_forward_row_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row a pawn of color `c` lands on when capturing en passant
pub const fn ep_dst_row(c: Color) -> usize {
    match c {
        Color::White => 2,
        Color::Black => 5,
    }
}

/// Final row for pawns of color `c`, where promotion is mandatory
pub const fn promotion_row(c: Color) -> usize {
    match c {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    #[test]
    fn test_straight_path() {
        // enumeration follows storage order: top row first, left column first
        let path = straight_path(sq("a1"), sq("a4")).unwrap();
        assert_eq!(path.as_slice(), &[sq("a3"), sq("a2")]);
        // direction must not matter
        assert_eq!(straight_path(sq("a4"), sq("a1")).unwrap(), path);
        let path = straight_path(sq("b5"), sq("e5")).unwrap();
        assert_eq!(path.as_slice(), &[sq("c5"), sq("d5")]);
        assert!(straight_path(sq("c3"), sq("c4")).unwrap().is_empty());
        assert_eq!(
            straight_path(sq("a1"), sq("b2")),
            Err(GeometryError::NotStraight(sq("a1"), sq("b2")))
        );
    }

    #[test]
    fn test_diag_path() {
        let path = diag_path(sq("a1"), sq("d4")).unwrap();
        assert_eq!(path.as_slice(), &[sq("b2"), sq("c3")]);
        let path = diag_path(sq("h1"), sq("e4")).unwrap();
        assert_eq!(path.as_slice(), &[sq("g2"), sq("f3")]);
        assert_eq!(diag_path(sq("d4"), sq("a1")).unwrap().len(), 2);
        assert!(diag_path(sq("e4"), sq("f5")).unwrap().is_empty());
        assert_eq!(
            diag_path(sq("a1"), sq("a4")),
            Err(GeometryError::NotDiagonal(sq("a1"), sq("a4")))
        );
    }

    #[test]
    fn test_endpoints_excluded() {
        for path in [
            straight_path(sq("e1"), sq("e8")).unwrap(),
            diag_path(sq("a1"), sq("h8")).unwrap(),
        ] {
            assert_eq!(path.len(), 6);
            assert!(!path.contains(&sq("a1")));
            assert!(!path.contains(&sq("e1")));
        }
    }
}
