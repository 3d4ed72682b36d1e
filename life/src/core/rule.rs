//! B3/S23 transition rule over the Moore neighbourhood.

use super::board::Board;
use super::coord::Coord;

/// Number of live cells among the 8 neighbours of `c`, in `0..=8`.
pub fn count_live_neighbors(c: Coord, board: &Board) -> u8 {
    c.neighbors().filter(|&n| board.is_alive(n)).count() as u8
}

/// Next state of a cell given its current state and live neighbour count.
pub fn apply_rule(is_alive: bool, live_neighbors: u8) -> bool {
    matches!((is_alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// Whether `c` is alive in the generation after `board`.
pub fn next_state(c: Coord, is_alive: bool, board: &Board) -> bool {
    apply_rule(is_alive, count_live_neighbors(c, board))
}
