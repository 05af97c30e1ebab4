//! Kalah position representation and move execution.
//!
//! This module provides the core game logic for Kalah, including:
//! - Board state as two rows of pits plus one store per side
//! - Seed sowing along the circular track
//! - Capture, extra-turn, and sweep handling
//! - Terminal detection, legal-move enumeration, and the pie-rule condition
//!
//! Each row is stored in its owner's sowing order, so the pit "opposite"
//! `pits[s][k]` is `pits[1 - s][k]` with the same index. Positions are plain
//! values: deriving a successor always goes through a clone, and a state is
//! never mutated once another state has been built from it.

use std::fmt;

use crate::constants::*;

/// A move, identified by the 1-based index of the pit being sown.
pub type Pit = usize;

/// One of the two players. South is side 0 and moves first; North is
/// side 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    South,
    North,
}

impl Side {
    /// Row index of this side in [`Position::pits`] and
    /// [`Position::stores`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => 1,
        }
    }

    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::South => write!(f, "south"),
            Side::North => write!(f, "north"),
        }
    }
}

/// A Kalah position (board state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Seed counts per row, indexed by [`Side::index`]; pit `i` (1-based)
    /// lives at `pits[side][i - 1]`.
    pub pits: [[u32; PITS]; 2],
    /// Captured seeds per side, indexed by [`Side::index`].
    pub stores: [u32; 2],
    /// Move counter; advances exactly when North hands the turn back to
    /// South, once per completed round.
    pub round: u32,
    /// The side whose turn it is.
    pub to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard opening: every pit holds [`SEEDS_PER_PIT`], both
    /// stores are empty, round 1, South to move.
    pub fn new() -> Self {
        Position {
            pits: [[SEEDS_PER_PIT; PITS]; 2],
            stores: [0; 2],
            round: 1,
            to_move: Side::South,
        }
    }

    /// Seed count of `side`'s store.
    #[inline]
    pub fn store(&self, side: Side) -> u32 {
        self.stores[side.index()]
    }

    /// The row of pits owned by `side`.
    #[inline]
    pub fn row(&self, side: Side) -> &[u32; PITS] {
        &self.pits[side.index()]
    }

    /// Total seeds across every pit and both stores. Sowing conserves
    /// this sum.
    pub fn seed_total(&self) -> u32 {
        self.pits.iter().flatten().sum::<u32>() + self.stores.iter().sum::<u32>()
    }
}

impl fmt::Display for Position {
    /// Renders North's pits right to left, so seeds flow counter-clockwise
    /// on screen just as they do around the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "north [{:>3}]", self.stores[1])?;
        for i in (0..PITS).rev() {
            write!(f, " {:>2}", self.pits[1][i])?;
        }
        writeln!(f)?;
        write!(f, "south      ")?;
        for i in 0..PITS {
            write!(f, " {:>2}", self.pits[0][i])?;
        }
        writeln!(f, " [{:>3}]", self.stores[0])?;
        write!(f, "round {}, {} to move", self.round, self.to_move)
    }
}

/// Apply one sowing move, returning the successor position and whether the
/// mover retained the turn.
///
/// The last seed landing in the mover's store earns an extra turn. The
/// last seed landing in an empty pit on the mover's own row, with seeds in
/// the opposite pit, captures both into the mover's store. A move that
/// leaves the mover's row empty sweeps the opponent's remaining seeds into
/// the *opponent's* store.
///
/// `pit` must be a 1-based index on the board; sowing an empty pit is not
/// rejected and behaves as a pass. [`legal_moves`] never yields one.
pub fn apply_move(pos: &Position, pit: Pit) -> (Position, bool) {
    let mut next = pos.clone();
    let retained = sow(&mut next, pit);
    (next, retained)
}

/// Sow in place. Returns true when the mover keeps the turn.
fn sow(pos: &mut Position, pit: Pit) -> bool {
    debug_assert!((1..=PITS).contains(&pit), "pit index {pit} out of range");

    let mover = pos.to_move.index();
    let opp = 1 - mover;

    let mut seeds = pos.pits[mover][pit - 1];
    pos.pits[mover][pit - 1] = 0;

    // One landing slot per seed along the track: slot t < PITS is the
    // mover's pit t, slot PITS is the mover's store, and the rest are the
    // opponent's pits. The opponent's store has no slot.
    let mut t = pit - 1;
    let mut retained = false;
    while seeds > 0 {
        t = (t + 1) % TRACK;
        seeds -= 1;
        let last = seeds == 0;
        if t < PITS {
            if last && pos.pits[mover][t] == 0 && pos.pits[opp][t] > 0 {
                // Capture: the landing seed and the opposite pit both go to
                // the mover's store; the landing pit stays empty.
                pos.stores[mover] += pos.pits[opp][t] + 1;
                pos.pits[opp][t] = 0;
            } else {
                pos.pits[mover][t] += 1;
            }
        } else if t == PITS {
            pos.stores[mover] += 1;
            if last {
                retained = true;
            }
        } else {
            pos.pits[opp][t - PITS - 1] += 1;
        }
    }

    // A move that empties the mover's row sweeps the opponent's row into
    // the opponent's own store. This happens on every such move, not only
    // when it ends the game.
    if pos.pits[mover].iter().all(|&s| s == 0) {
        let swept: u32 = pos.pits[opp].iter().sum();
        pos.stores[opp] += swept;
        pos.pits[opp] = [0; PITS];
    }

    if !retained {
        if pos.to_move == Side::North {
            pos.round += 1;
        }
        pos.to_move = pos.to_move.opponent();
    }
    retained
}

/// True when either row is out of seeds, regardless of the other row or
/// the stores. The game is over.
pub fn is_terminal(pos: &Position) -> bool {
    pos.pits[0].iter().all(|&s| s == 0) || pos.pits[1].iter().all(|&s| s == 0)
}

/// Pits the side to move may sow, as ascending 1-based indices. An empty
/// result means no move is available; it is never an error.
pub fn legal_moves(pos: &Position) -> Vec<Pit> {
    let row = &pos.pits[pos.to_move.index()];
    (1..=PITS).filter(|&pit| row[pit - 1] > 0).collect()
}

/// True when the position calls for the opening pie token instead of a
/// searched move: North, deciding on round 2, may swap sides rather than
/// sow. The driver emits the token; the rules never apply a swap.
pub fn pie_rule_applies(pos: &Position) -> bool {
    pos.to_move == Side::North && pos.round == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(south: [u32; PITS], north: [u32; PITS], stores: [u32; 2], to_move: Side) -> Position {
        Position {
            pits: [south, north],
            stores,
            round: 1,
            to_move,
        }
    }

    #[test]
    fn test_opening_position() {
        let pos = Position::new();
        assert_eq!(pos.pits, [[4; PITS]; 2]);
        assert_eq!(pos.stores, [0, 0]);
        assert_eq!(pos.round, 1);
        assert_eq!(pos.to_move, Side::South);
        assert_eq!(pos.seed_total(), 48);
    }

    #[test]
    fn test_sow_into_store_earns_extra_turn() {
        let pos = Position::new();
        let (next, retained) = apply_move(&pos, 3);
        assert!(retained, "last seed in own store should retain the turn");
        assert_eq!(next.pits[0], [4, 4, 0, 5, 5, 5]);
        assert_eq!(next.pits[1], [4; PITS]);
        assert_eq!(next.stores, [1, 0]);
        assert_eq!(next.to_move, Side::South, "extra turn keeps South active");
        assert_eq!(next.round, 1);
        assert_eq!(next.seed_total(), 48);
    }

    #[test]
    fn test_plain_sow_flips_turn() {
        let pos = Position::new();
        let (next, retained) = apply_move(&pos, 1);
        assert!(!retained);
        assert_eq!(next.pits[0], [0, 5, 5, 5, 5, 4]);
        assert_eq!(next.stores, [0, 0]);
        assert_eq!(next.to_move, Side::North);
        assert_eq!(next.round, 1, "South's completion never advances the round");
    }

    #[test]
    fn test_capture_takes_opposite_pit() {
        let pos = setup([1, 0, 3, 0, 0, 0], [4; PITS], [0, 0], Side::South);
        let (next, retained) = apply_move(&pos, 1);
        assert!(!retained);
        assert_eq!(next.pits[0][1], 0, "landing pit stays empty after a capture");
        assert_eq!(next.pits[1][1], 0, "opposite pit is emptied");
        assert_eq!(next.stores[0], 5, "store gains the opposite pit plus the landing seed");
        assert_eq!(next.to_move, Side::North);
        assert_eq!(next.seed_total(), pos.seed_total());
    }

    #[test]
    fn test_no_capture_when_opposite_pit_is_empty() {
        let pos = setup([1, 0, 3, 0, 0, 0], [4, 0, 4, 4, 4, 4], [0, 0], Side::South);
        let (next, _) = apply_move(&pos, 1);
        assert_eq!(next.pits[0][1], 1, "landing seed stays in the pit");
        assert_eq!(next.stores[0], 0);
    }

    #[test]
    fn test_wraparound_landing_can_capture() {
        // Thirteen seeds from pit 1 lap the whole track and drop the last
        // seed back into the (now empty) source pit.
        let pos = setup([13, 1, 0, 0, 0, 0], [2, 4, 4, 4, 4, 4], [0, 0], Side::South);
        let (next, retained) = apply_move(&pos, 1);
        assert!(!retained);
        assert_eq!(next.pits[0], [0, 2, 1, 1, 1, 1]);
        assert_eq!(next.pits[1], [0, 5, 5, 5, 5, 5]);
        assert_eq!(next.stores[0], 5, "one store seed from the lap plus a 4-seed capture");
        assert_eq!(next.seed_total(), pos.seed_total());
    }

    #[test]
    fn test_sweep_credits_the_swept_rows_owner() {
        let pos = setup([0, 0, 0, 0, 0, 1], [4; PITS], [10, 0], Side::South);
        let (next, retained) = apply_move(&pos, 6);
        assert!(retained, "the single seed lands in the store");
        assert_eq!(next.pits[0], [0; PITS]);
        assert_eq!(next.pits[1], [0; PITS]);
        assert_eq!(next.stores[0], 11);
        assert_eq!(next.stores[1], 24, "North's own store collects North's swept row");
        assert!(is_terminal(&next));
        assert_eq!(next.seed_total(), pos.seed_total());
    }

    #[test]
    fn test_round_advances_only_on_norths_completed_move() {
        let pos = Position::new();
        let (after_south, _) = apply_move(&pos, 1);
        assert_eq!(after_south.round, 1);
        assert_eq!(after_south.to_move, Side::North);

        let (after_north, _) = apply_move(&after_south, 1);
        assert_eq!(after_north.round, 2, "round completes when North hands back the turn");
        assert_eq!(after_north.to_move, Side::South);

        // A turn-retaining North move leaves the counter alone.
        let mut held = Position::new();
        held.to_move = Side::North;
        held.round = 5;
        let (kept, retained) = apply_move(&held, 3);
        assert!(retained);
        assert_eq!(kept.round, 5);
        assert_eq!(kept.to_move, Side::North);
    }

    #[test]
    fn test_empty_pit_sow_acts_as_pass() {
        let pos = setup([0, 4, 4, 4, 4, 4], [4; PITS], [0, 0], Side::South);
        let (next, retained) = apply_move(&pos, 1);
        assert!(!retained);
        assert_eq!(next.pits, pos.pits, "no seeds move");
        assert_eq!(next.stores, pos.stores);
        assert_eq!(next.to_move, Side::North);
    }

    #[test]
    fn test_legal_moves_skips_empty_pits() {
        let pos = setup([0, 3, 0, 1, 0, 2], [4; PITS], [0, 0], Side::South);
        assert_eq!(legal_moves(&pos), vec![2, 4, 6]);

        let north_turn = setup([4; PITS], [0, 0, 0, 0, 0, 7], [0, 0], Side::North);
        assert_eq!(legal_moves(&north_turn), vec![6]);
    }

    #[test]
    fn test_terminal_when_either_row_is_empty() {
        let south_out = setup([0; PITS], [4; PITS], [20, 4], Side::North);
        assert!(is_terminal(&south_out));

        let north_out = setup([4; PITS], [0; PITS], [0, 24], Side::South);
        assert!(is_terminal(&north_out));

        assert!(!is_terminal(&Position::new()));
    }

    #[test]
    fn test_no_legal_moves_on_an_emptied_row() {
        let pos = setup([0; PITS], [4; PITS], [20, 4], Side::South);
        assert!(legal_moves(&pos).is_empty());
    }

    #[test]
    fn test_pie_rule_condition() {
        let mut pos = Position::new();
        assert!(!pie_rule_applies(&pos), "South never holds the pie option");

        pos.to_move = Side::North;
        assert!(!pie_rule_applies(&pos), "round 1 is North's normal first sow");

        pos.round = 2;
        assert!(pie_rule_applies(&pos));

        pos.round = 3;
        assert!(!pie_rule_applies(&pos));
    }

    #[test]
    fn test_side_accessors() {
        let pos = setup([1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1], [7, 9], Side::South);
        assert_eq!(pos.store(Side::North), 9);
        assert_eq!(pos.row(Side::South), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(Side::South.opponent(), Side::North);
        assert_eq!(Side::North.opponent(), Side::South);
    }
}
