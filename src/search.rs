//! Iterative-deepening minimax with alpha-beta pruning.
//!
//! The searcher restarts a full minimax for each depth from 1 up to the
//! ceiling and keeps the move chosen by the deepest iteration that ran.
//! The wall-clock deadline is sampled at the top of the deepening loop and
//! on entry to every node; once it passes, new nodes settle to their
//! heuristic value immediately, so the in-flight iteration unwinds in
//! moments and the previous answer stands.
//!
//! Extra turns bend the tree shape: a child reached by a turn-retaining
//! move keeps its parent's maximizing role instead of flipping it, and
//! leaf values are always taken from the perspective of the leaf's own
//! active player.

use std::time::Instant;

use crate::constants::{MAX_DEPTH, TERMINAL_SCORE, TIE_BREAK_PROB};
use crate::eval::score;
use crate::position::{apply_move, is_terminal, legal_moves, Pit, Position};

/// Outcome of one [`Searcher::search`] call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen move, or `None` when the side to move has no legal move.
    pub best_move: Option<Pit>,
    /// Value of the chosen move at the deepest completed iteration.
    pub value: f64,
    /// Deepest iteration that ran before the deadline.
    pub depth: u32,
    /// Nodes visited over the searcher's lifetime.
    pub nodes: u64,
}

/// Move searcher with an explicit wall-clock deadline.
///
/// The deadline, depth ceiling, and tie-break randomness are all injected
/// at construction, so a seeded searcher with a generous deadline replays
/// a search exactly.
pub struct Searcher {
    deadline: Instant,
    max_depth: u32,
    rng: fastrand::Rng,
    nodes: u64,
}

impl Searcher {
    /// Searcher with the default depth ceiling and fresh randomness.
    pub fn new(deadline: Instant) -> Self {
        Self::with_limits(deadline, MAX_DEPTH, fastrand::Rng::new())
    }

    /// Searcher with injected randomness, for reproducible move choice.
    pub fn with_rng(deadline: Instant, rng: fastrand::Rng) -> Self {
        Self::with_limits(deadline, MAX_DEPTH, rng)
    }

    /// Searcher with full control over the deadline, ceiling, and RNG.
    pub fn with_limits(deadline: Instant, max_depth: u32, rng: fastrand::Rng) -> Self {
        Searcher {
            deadline,
            max_depth,
            rng,
            nodes: 0,
        }
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Pick a move for `pos` within the deadline.
    ///
    /// The first deepening iteration always runs, so the caller gets a
    /// usable (possibly shallow) answer even when the deadline has already
    /// passed. `best_move` is `None` only when there is no legal move.
    pub fn search(&mut self, pos: &Position) -> SearchResult {
        let moves = legal_moves(pos);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                value: 0.0,
                depth: 0,
                nodes: self.nodes,
            };
        }

        let mut best = moves[0];
        let mut best_value = f64::NEG_INFINITY;
        let mut completed = 0;

        for depth in 1..=self.max_depth {
            if depth > 1 && self.out_of_time() {
                break;
            }

            // Each iteration re-searches every root move with a full
            // window and overwrites the shallower choice on completion.
            let mut depth_best = moves[0];
            let mut depth_value = f64::NEG_INFINITY;
            for &pit in &moves {
                let (child, retained) = apply_move(pos, pit);
                let value =
                    self.minimax(&child, depth - 1, f64::NEG_INFINITY, f64::INFINITY, retained);
                if value > depth_value
                    || (value == depth_value && self.rng.f64() < TIE_BREAK_PROB)
                {
                    depth_value = value;
                    depth_best = pit;
                }
            }

            best = depth_best;
            best_value = depth_value;
            completed = depth;
        }

        SearchResult {
            best_move: Some(best),
            value: best_value,
            depth: completed,
            nodes: self.nodes,
        }
    }

    fn minimax(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        // A finished game outranks the time and depth cutoffs.
        if is_terminal(pos) {
            return terminal_value(pos);
        }
        if depth == 0 || self.out_of_time() {
            return score(pos);
        }
        let moves = legal_moves(pos);
        if moves.is_empty() {
            return score(pos);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for pit in moves {
            let (child, retained) = apply_move(pos, pit);
            // A retained turn keeps the same side sowing, so the child
            // keeps the parent's role instead of flipping it.
            let child_maximizing = if retained { maximizing } else { !maximizing };
            let value = self.minimax(&child, depth - 1, alpha, beta, child_maximizing);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score a finished game for the node's active player: the store margin
/// pushed beyond every heuristic magnitude. A draw lands on the losing
/// side of the ledge.
pub fn terminal_value(pos: &Position) -> f64 {
    let mover = pos.to_move;
    let diff = f64::from(pos.store(mover)) - f64::from(pos.store(mover.opponent()));
    if diff > 0.0 {
        TERMINAL_SCORE + diff
    } else {
        -TERMINAL_SCORE + diff
    }
}
