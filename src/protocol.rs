//! State-line decoding and the one-shot decision driver.
//!
//! The engine answers a referee that hands it one position per process
//! invocation, as a single whitespace-separated line on stdin:
//!
//! ```text
//! <label> <N> <south pits 1..N> <north pits 1..N> <south store> <north store> <round> <player>
//! ```
//!
//! The label is opaque, `N` must match the compiled board, and `player`
//! is 1 for South or 2 for North. The reply on stdout is a bare 1-based
//! pit index, the literal [`PIE`] when the pie rule lets North swap sides
//! instead of sowing, or [`NO_MOVE`] when the active player has nothing
//! to sow.
//!
//! All input validation lives here; the rules engine trusts its callers.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{bail, ensure, Context, Result};

use crate::constants::PITS;
use crate::position::{pie_rule_applies, Position, Side};
use crate::search::Searcher;

/// Reply claiming the pie-rule swap instead of a move.
pub const PIE: &str = "PIE";

/// Reply when the active player has no legal move.
pub const NO_MOVE: &str = "-1";

fn parse_field(tokens: &[&str], idx: usize, what: &str) -> Result<u32> {
    let tok = tokens
        .get(idx)
        .with_context(|| format!("state line is missing the {what}"))?;
    tok.parse()
        .with_context(|| format!("bad {what} {tok:?}"))
}

/// Decode and validate one state line.
///
/// This is the exclusive shape check: exact token count, unsigned fields,
/// a pit count matching the build, a player indicator of 1 or 2. Anything
/// else is an error naming the offending field.
pub fn parse_state(line: &str) -> Result<Position> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(!tokens.is_empty(), "empty state line");

    // tokens[0] is the referee's label; its text is not interpreted.
    let n: usize = tokens
        .get(1)
        .context("state line is missing the pit count")?
        .parse()
        .with_context(|| format!("bad pit count {:?}", tokens[1]))?;
    ensure!(
        n == PITS,
        "unsupported pit count {n}, this build plays {PITS}-pit boards"
    );

    let expected = 2 + 2 * PITS + 4;
    ensure!(
        tokens.len() == expected,
        "expected {expected} tokens, got {}",
        tokens.len()
    );

    let mut pits = [[0u32; PITS]; 2];
    for side in 0..2 {
        for i in 0..PITS {
            pits[side][i] = parse_field(&tokens, 2 + side * PITS + i, "seed count")?;
        }
    }
    let stores = [
        parse_field(&tokens, 2 + 2 * PITS, "south store")?,
        parse_field(&tokens, 2 + 2 * PITS + 1, "north store")?,
    ];
    let round = parse_field(&tokens, 2 + 2 * PITS + 2, "round counter")?;
    let to_move = match parse_field(&tokens, 2 + 2 * PITS + 3, "player indicator")? {
        1 => Side::South,
        2 => Side::North,
        other => bail!("player indicator must be 1 or 2, got {other}"),
    };

    Ok(Position {
        pits,
        stores,
        round,
        to_move,
    })
}

/// Compute the reply for one state line.
///
/// The pie condition is checked before any search: when it holds, the
/// swap token goes out and the budget is never spent.
pub fn respond(line: &str, budget: Duration, seed: Option<u64>) -> Result<String> {
    let pos = parse_state(line)?;
    if pie_rule_applies(&pos) {
        return Ok(PIE.to_string());
    }

    let rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let mut searcher = Searcher::with_rng(Instant::now() + budget, rng);
    Ok(match searcher.search(&pos).best_move {
        Some(pit) => pit.to_string(),
        None => NO_MOVE.to_string(),
    })
}

/// Read one state line from stdin, print the reply, and return. One
/// decision per process; nothing but the reply is written to stdout.
pub fn run(budget: Duration, seed: Option<u64>) -> Result<()> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading the state line from stdin")?;
    let reply = respond(line.trim(), budget, seed)?;
    println!("{reply}");
    Ok(())
}
