//! **npuzzle-core** — sliding tile puzzle board model.
//!
//! This crate provides the value types shared across the *npuzzle*
//! workspace: the [`Board`] configuration (8-puzzle, 15-puzzle, or any
//! square size with one blank), the [`Move`] labels describing blank
//! slides, validation errors, the classic solvability parity check, and
//! random scrambling.

pub mod board;
pub mod error;
pub mod moves;

pub use board::Board;
pub use error::BoardError;
pub use moves::Move;
