//! Core domain types for the letter grid
//!
//! This module contains the board, position and path types with zero external
//! dependencies. Everything here is plain data plus pure helpers.

mod board;
mod path;

pub use board::{Board, BoardError, Cell};
pub use path::{Path, Position};
