//! Word Finder
//!
//! A timed word-search game on a grid of letters. Words are spelled by chaining
//! adjacent cells (diagonals included) without reusing a cell.
//!
//! # Quick Start
//!
//! ```rust
//! use wordfind::core::Board;
//! use wordfind::dictionary::Dictionary;
//! use wordfind::finder::find_all;
//! use wordfind::tracer::trace;
//!
//! let board = Board::parse("ca/ts").unwrap();
//!
//! // Trace a single word
//! let path = trace(&board, "cat").unwrap();
//! println!("{path}");
//!
//! // Find every dictionary word on the board
//! let dictionary = Dictionary::new(["cat", "cats", "dog"]);
//! assert_eq!(find_all(&board, &dictionary), vec!["cat", "cats"]);
//! ```

// Core domain types
pub mod core;

// Path tracing and whole-board search
pub mod finder;
pub mod tracer;

// Word lists
pub mod dictionary;

// Board generation and settings
pub mod config;
pub mod sampler;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
