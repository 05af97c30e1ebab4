//! Constants for board geometry, search limits, and evaluation weights.
//!
//! This module contains all the configuration constants for the Kalah
//! engine. The board stores each player's pits in that player's own sowing
//! order, so the pit "opposite" pit `i` is the opponent's pit with the same
//! index.

// =============================================================================
// Board Geometry
// =============================================================================

/// Pits per side, not counting the stores.
pub const PITS: usize = 6;

/// Seeds in every pit when a game starts.
pub const SEEDS_PER_PIT: u32 = 4;

/// Landing slots in one lap of the sowing track: the mover's pits, the
/// mover's store, then the opponent's pits. The opponent's store is not on
/// the track.
pub const TRACK: usize = 2 * PITS + 1;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default wall-clock budget per decision, in milliseconds.
pub const MOVE_BUDGET_MS: u64 = 900;

/// Iterative-deepening ceiling.
pub const MAX_DEPTH: u32 = 15;

/// Base magnitude for finished games. Any terminal value outranks every
/// reachable heuristic value.
pub const TERMINAL_SCORE: f64 = 10_000.0;

/// Probability of switching to a later root move that ties the current
/// best, so repeated games do not replay identical lines.
pub const TIE_BREAK_PROB: f64 = 0.1;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the store differential.
pub const STORE_WEIGHT: f64 = 2.0;

/// Weight of each seed still sitting on a row, positive for the side to
/// move and negative for the opponent.
pub const SEED_WEIGHT: f64 = 0.5;

/// Weight of each seed threatened by a capture, in either direction.
pub const CAPTURE_WEIGHT: f64 = 1.5;

/// Bonus for each pit whose count would drop the last seed exactly into
/// the own store, earning an extra turn.
pub const EXTRA_TURN_BONUS: f64 = 3.0;
