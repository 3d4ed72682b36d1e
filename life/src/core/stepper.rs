//! Generation stepper.
//!
//! Only live cells and their neighbours can change state: a dead cell with no
//! live neighbour cannot reach the birth count. Each generation therefore
//! evaluates the union of the live cells' Moore neighbourhoods, deciding each
//! candidate once through a generation-scoped cache.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::board::Board;
use super::rule::next_state;

/// Per-generation counters reported by [`step_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Distinct cells evaluated.
    pub candidates: usize,
    /// Candidate encounters answered by the cache instead of re-evaluated.
    pub cache_hits: usize,
    /// Dead cells that became alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Live cells that stayed alive.
    pub survivors: usize,
}

/// Compute the next generation of `board`.
pub fn step(board: &Board) -> Board {
    step_with_stats(board).0
}

/// Compute the next generation of `board` and report how it was reached.
///
/// Aliveness is always read from `board`; the result is built in a fresh
/// board so no lookup can observe next-generation state.
pub fn step_with_stats(board: &Board) -> (Board, StepStats) {
    let mut evaluated: HashMap<_, bool> = HashMap::with_capacity(board.len() * 9);
    let mut next = Vec::with_capacity(board.len());
    let mut stats = StepStats::default();

    for &cell in board {
        for candidate in cell.with_neighbors() {
            let slot = match evaluated.entry(candidate) {
                Entry::Occupied(_) => {
                    stats.cache_hits += 1;
                    continue;
                }
                Entry::Vacant(slot) => slot,
            };

            let alive_now = board.is_alive(candidate);
            let alive_next = next_state(candidate, alive_now, board);
            slot.insert(alive_next);
            stats.candidates += 1;

            match (alive_now, alive_next) {
                (true, true) => stats.survivors += 1,
                (true, false) => stats.deaths += 1,
                (false, true) => stats.births += 1,
                (false, false) => {}
            }
            if alive_next {
                next.push(candidate);
            }
        }
    }

    (next.into_iter().collect(), stats)
}

/// Apply [`step`] `generations` times in sequence.
pub fn advance(board: Board, generations: u32) -> Board {
    (0..generations).fold(board, |current, _| step(&current))
}
