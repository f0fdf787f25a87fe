use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a [`Coord`] from square notation
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    /// File letter outside `a`..`h`
    #[error("file {0:?} is out of bounds")]
    BadFile(char),
    /// Rank digit outside `1`..`8`
    #[error("rank {0:?} is out of bounds")]
    BadRank(char),
    /// Square notation is always two characters
    #[error("invalid string length")]
    BadLength,
}

/// A file (column) of the board, `A` being column 0
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn from_index(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => panic!("file index must be between 0 and 7"),
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(Self::from_index)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// A rank of the board, stored top to bottom: `R8` is row 0
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R8 = 0,
    R7 = 1,
    R6 = 2,
    R5 = 3,
    R4 = 4,
    R3 = 5,
    R2 = 6,
    R1 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const fn from_index(val: usize) -> Self {
        match val {
            0 => Rank::R8,
            1 => Rank::R7,
            2 => Rank::R6,
            3 => Rank::R5,
            4 => Rank::R4,
            5 => Rank::R3,
            6 => Rank::R2,
            7 => Rank::R1,
            _ => panic!("rank index must be between 0 and 7"),
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(Self::from_index)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            // The row axis is inverted: rank 8 is stored as row 0.
            '1'..='8' => Some(Self::from_index((u32::from('8') - u32::from(c)) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'8' - *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// A square of the board, packed as `row * 8 + col`
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord(((rank as u8) << 3) | file as u8)
    }

    pub const fn from_row_col(row: usize, col: usize) -> Coord {
        assert!(row < 8 && col < 8, "coord must fit on the 8x8 board");
        Coord(((row as u8) << 3) | col as u8)
    }

    pub const fn file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    pub const fn rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Row index, 0 at the top (rank 8)
    pub const fn row(&self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Column index, 0 on the left (file `a`)
    pub const fn col(&self) -> usize {
        (self.0 & 7) as usize
    }

    /// All squares in row-major order, the board's scan order
    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Coord({})", self)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(CoordParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let (file_ch, rank_ch) = (bytes[0] as char, bytes[1] as char);
        Ok(Coord::from_parts(
            File::from_char(file_ch).ok_or(CoordParseError::BadFile(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CoordParseError::BadRank(rank_ch))?,
        ))
    }
}

/// The side a piece belongs to; `White` is player 1 and moves toward row 0
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind; movement patterns are keyed off this, never off an instance
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// Conventional point value, read by the score display
    pub const fn value(&self) -> u32 {
        match *self {
            Piece::Pawn => 1,
            Piece::Knight => 3,
            Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 100,
        }
    }

    /// Algebraic notation letter; pawns have none
    pub const fn san_char(&self) -> Option<char> {
        match *self {
            Piece::Pawn => None,
            Piece::Knight => Some('N'),
            Piece::Bishop => Some('B'),
            Piece::Rook => Some('R'),
            Piece::Queen => Some('Q'),
            Piece::King => Some('K'),
        }
    }

    /// Inverse of [`Piece::san_char`], case-insensitive
    pub fn from_san_char(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }
}

/// One piece standing on the board, with its per-instance move flags
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceInstance {
    pub kind: Piece,
    pub color: Color,
    /// Set once the piece makes its first move; gates double pushes and castling
    pub has_moved: bool,
    /// Move number at which this pawn advanced two squares, if it ever did
    pub ep_move: Option<u32>,
}

impl PieceInstance {
    pub const fn new(kind: Piece, color: Color) -> PieceInstance {
        PieceInstance {
            kind,
            color,
            has_moved: false,
            ep_move: None,
        }
    }
}

/// Contents of one square: an explicit empty variant, never a nullable piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceInstance),
}

impl Cell {
    pub const fn is_empty(&self) -> bool {
        matches!(*self, Cell::Empty)
    }

    pub const fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub const fn color(&self) -> Option<Color> {
        match *self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p.color),
        }
    }

    pub const fn kind(&self) -> Option<Piece> {
        match *self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p.kind),
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Cell::Empty => '.',
            Cell::Piece(p) => {
                let c = match p.kind {
                    Piece::Pawn => 'P',
                    Piece::Knight => 'N',
                    Piece::Bishop => 'B',
                    Piece::Rook => 'R',
                    Piece::Queen => 'Q',
                    Piece::King => 'K',
                };
                match p.color {
                    Color::White => c,
                    Color::Black => c.to_ascii_lowercase(),
                }
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
        }
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
        }
        assert_eq!(Rank::from_char('8'), Some(Rank::R8));
        assert_eq!(Rank::R8.index(), 0);
        assert_eq!(Rank::from_char('1'), Some(Rank::R1));
        assert_eq!(Rank::R1.index(), 7);
    }

    #[test]
    fn test_coord_parts() {
        for rank in Rank::iter() {
            for file in File::iter() {
                let coord = Coord::from_parts(file, rank);
                assert_eq!(coord.file(), file);
                assert_eq!(coord.rank(), rank);
                assert_eq!(coord, Coord::from_row_col(rank.index(), file.index()));
            }
        }
    }

    #[test]
    fn test_coord_codec_round_trip() {
        // notation -> coord -> notation must be the identity for a1..h8
        for file in b'a'..=b'h' {
            for rank in b'1'..=b'8' {
                let s: String = [file as char, rank as char].iter().collect();
                let coord = Coord::from_str(&s).unwrap();
                assert_eq!(coord.to_string(), s);
            }
        }
        assert_eq!(Coord::from_str("a8"), Ok(Coord::from_row_col(0, 0)));
        assert_eq!(Coord::from_str("a1"), Ok(Coord::from_row_col(7, 0)));
        assert_eq!(Coord::from_str("h1"), Ok(Coord::from_row_col(7, 7)));
        assert_eq!(Coord::from_str("i4"), Err(CoordParseError::BadFile('i')));
        assert_eq!(Coord::from_str("h9"), Err(CoordParseError::BadRank('9')));
        assert_eq!(Coord::from_str("h"), Err(CoordParseError::BadLength));
    }

    #[test]
    fn test_piece_letters() {
        assert_eq!(Piece::from_san_char('N'), Some(Piece::Knight));
        assert_eq!(Piece::from_san_char('q'), Some(Piece::Queen));
        assert_eq!(Piece::from_san_char('Z'), None);
        for piece in [
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            assert_eq!(Piece::from_san_char(piece.san_char().unwrap()), Some(piece));
        }
        assert_eq!(Piece::Pawn.san_char(), None);
    }

    #[test]
    fn test_cell() {
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::Empty.as_char(), '.');
        let cell = Cell::Piece(PieceInstance::new(Piece::Knight, Color::Black));
        assert!(cell.is_occupied());
        assert_eq!(cell.color(), Some(Color::Black));
        assert_eq!(cell.kind(), Some(Piece::Knight));
        assert_eq!(cell.as_char(), 'n');
    }
}
