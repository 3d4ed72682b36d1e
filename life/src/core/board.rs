//! Sparse board: the set of live cells.

use std::collections::HashSet;
use std::collections::hash_set;

use super::coord::Coord;

/// The live cells of one generation.
///
/// Absence means dead; no dead marker is ever stored. A board is never
/// mutated after construction, each generation produces a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: HashSet<Coord>,
}

/// Inclusive bounding box of a non-empty board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from `(x, y)` pairs. Duplicates collapse.
    pub fn from_cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        cells.into_iter().map(Into::into).collect()
    }

    pub fn is_alive(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Live cells ordered by `(x, y)`.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// A copy of this board shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Smallest box containing every live cell, or `None` for an empty board.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.cells.iter();
        let first = *cells.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for c in cells {
            bounds.min.x = bounds.min.x.min(c.x);
            bounds.min.y = bounds.min.y.min(c.y);
            bounds.max.x = bounds.max.x.max(c.x);
            bounds.max.y = bounds.max.y.max(c.y);
        }
        Some(bounds)
    }
}

impl FromIterator<Coord> for Board {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Board {
    type Item = Coord;
    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let board = Board::from_cells([(0, 0), (1, 1), (0, 0)]);
        assert_eq!(board.len(), 2);
        assert!(board.is_alive(Coord::new(0, 0)));
        assert!(board.is_alive(Coord::new(1, 1)));
        assert!(!board.is_alive(Coord::new(1, 0)));
    }

    #[test]
    fn sorted_orders_by_x_then_y() {
        let board = Board::from_cells([(2, 0), (-1, 4), (-1, -4), (0, 0)]);
        let got: Vec<(i64, i64)> = board.sorted().into_iter().map(Into::into).collect();
        assert_eq!(got, vec![(-1, -4), (-1, 4), (0, 0), (2, 0)]);
    }

    #[test]
    fn translate_shifts_every_cell() {
        let board = Board::from_cells([(0, 0), (1, 2)]);
        assert_eq!(
            board.translate(-3, 10),
            Board::from_cells([(-3, 10), (-2, 12)])
        );
    }

    #[test]
    fn bounds_of_empty_board_is_none() {
        assert_eq!(Board::new().bounds(), None);
    }

    #[test]
    fn bounds_cover_all_cells() {
        let board = Board::from_cells([(3, -1), (-2, 4), (0, 0)]);
        assert_eq!(
            board.bounds(),
            Some(Bounds {
                min: Coord::new(-2, -1),
                max: Coord::new(3, 4),
            })
        );
    }
}
