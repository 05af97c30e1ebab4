//! Kalah-Rust: a time-boxed minimax engine for Kalah.
//!
//! This crate decides one move for an externally supplied Kalah position:
//! iterative-deepening minimax with alpha-beta pruning under a wall-clock
//! deadline, driven through a one-line referee protocol.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search limits, and evaluation weights
//! - [`position`] - Core game logic (board state, sowing, captures, sweeps)
//! - [`eval`] - Heuristic scoring of non-terminal positions
//! - [`search`] - Iterative-deepening minimax with alpha-beta pruning
//! - [`protocol`] - State-line decoding and the one-shot decision driver
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use kalah_rust::position::{apply_move, Position};
//! use kalah_rust::search::Searcher;
//!
//! // Decide a move for the opening position with a 50 ms budget.
//! let pos = Position::new();
//! let mut searcher = Searcher::new(Instant::now() + Duration::from_millis(50));
//! let chosen = searcher.search(&pos).best_move.unwrap();
//!
//! // Sow it; seeds only ever move between pits and stores.
//! let (next, _extra_turn) = apply_move(&pos, chosen);
//! assert_eq!(next.seed_total(), 48);
//! ```

pub mod constants;
pub mod eval;
pub mod position;
pub mod protocol;
pub mod search;
