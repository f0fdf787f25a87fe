//! # termchess rules engine
//!
//! The chess-rules core of termchess: the board state model, algebraic and
//! long-notation move resolution, and move legality checking (piece movement
//! geometry, check detection, castling, en passant, promotion, disambiguation).
//!
//! Rendering, input handling and the external engine process that supplies
//! move suggestions and evaluations are collaborators of this crate, not part
//! of it. The game-loop driver:
//!
//! - parses the player's text with [`moves::san::parse`], or an engine
//!   suggestion with [`moves::long::Move`]'s `FromStr`,
//! - applies the move with [`Board::make_move`], and
//! - appends the returned [`MoveResult`]'s long notation to its move history,
//!   which it replays to the engine process to keep positions in sync.
//!
//! The board is single-threaded and synchronous. A rejected move never leaves
//! a partial mutation behind: the grid is snapshotted before a commit and
//! restored whenever the mover's own king would end up in check.

pub mod board;
pub mod castling;
pub mod moves;

pub use termchess_base::{geometry, types};

pub use board::{Board, Captures, IllegalMove};
pub use moves::{Move, MoveResult};
pub use types::{Cell, Color, Coord, File, Piece, PieceInstance, Rank};
