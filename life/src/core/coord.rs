//! Grid coordinates and the Moore neighbourhood.
//!
//! This is the only place grid topology is defined: an unbounded plane of
//! `i64` cells where each cell has exactly 8 neighbours.

use std::fmt;

/// Offsets of the 8 cells at Chebyshev distance 1, in `(dx, dy)` order.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the unbounded grid.
///
/// `Hash` is derived, so both fields are fed to the hasher in sequence and
/// `(a, b)` and `(b, a)` hash differently. `Ord` is lexicographic by `(x, y)`,
/// which is the output order of a sorted board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`. Wraps at the `i64` boundary.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The 8 Moore neighbours of this cell (excluding the cell itself).
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        MOORE_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// This cell followed by its 8 neighbours: every cell whose next state
    /// can depend on this one being alive.
    pub fn with_neighbors(self) -> impl Iterator<Item = Coord> {
        std::iter::once(self).chain(self.neighbors())
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i64, i64) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
