//! Heuristic evaluation of non-terminal positions.
//!
//! The score is always taken from the perspective of the side to move:
//! positive favors whoever the state says is active, not any fixed root
//! player. Four weighted components contribute:
//! - the store differential
//! - seeds still in hand on either row
//! - capture threats, credited per sowing pit that could land the capture
//! - pits that are one exact sow away from an extra turn

use crate::constants::{CAPTURE_WEIGHT, EXTRA_TURN_BONUS, PITS, SEED_WEIGHT, STORE_WEIGHT};
use crate::position::Position;

/// True when sowing `count` seeds from pit `from` drops the last seed
/// exactly on pit `target` of the same row (both 0-based). A zero count
/// "reaches" the next pit over; the threat terms below count it like any
/// other reach.
#[inline]
fn lands_on(count: u32, from: usize, target: usize) -> bool {
    i64::from(count) == target as i64 - from as i64 + 1
}

/// Score `pos` for the side to move.
///
/// Pure and idempotent: no caching, no mutation, the same position always
/// scores the same value.
pub fn score(pos: &Position) -> f64 {
    let p = pos.to_move.index();
    let o = 1 - p;
    let own = &pos.pits[p];
    let theirs = &pos.pits[o];

    let mut score = (f64::from(pos.stores[p]) - f64::from(pos.stores[o])) * STORE_WEIGHT;

    let own_seeds: u32 = own.iter().sum();
    let their_seeds: u32 = theirs.iter().sum();
    score += f64::from(own_seeds) * SEED_WEIGHT;
    score -= f64::from(their_seeds) * SEED_WEIGHT;

    for i in 0..PITS {
        // Seeds capturable by landing the last seed on the empty own pit i.
        if own[i] == 0 && theirs[i] > 0 {
            for j in 0..PITS {
                if lands_on(own[j], j, i) {
                    score += f64::from(theirs[i]) * CAPTURE_WEIGHT;
                }
            }
        }
        // Seeds the opponent could capture out of the own pit i.
        if own[i] > 0 && theirs[i] == 0 {
            for j in 0..PITS {
                if lands_on(theirs[j], j, i) {
                    score -= f64::from(own[i]) * CAPTURE_WEIGHT;
                }
            }
        }
    }

    for i in 0..PITS {
        if own[i] as usize == PITS - i {
            score += EXTRA_TURN_BONUS;
        }
    }

    score
}
