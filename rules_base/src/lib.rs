//! # Base types for termchess
//!
//! Value types shared by the termchess rules engine and its frontends: squares,
//! pieces, cells, and the straight/diagonal path geometry between squares.
//!
//! Normally you don't want to use this crate directly. Use `termchess_rules`
//! instead.

pub mod geometry;
pub mod types;
