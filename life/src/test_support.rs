//! Test-only helpers for constructing boards from well-known patterns.

use crate::core::Board;

/// Build a board from literal `(x, y)` pairs.
pub fn cells(pairs: &[(i64, i64)]) -> Board {
    Board::from_cells(pairs.iter().copied())
}

/// 2x2 still life anchored at the origin.
pub fn block() -> Board {
    cells(&[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Horizontal period-2 oscillator: `(0,0) (1,0) (2,0)`.
pub fn blinker() -> Board {
    cells(&[(0, 0), (1, 0), (2, 0)])
}

/// Glider travelling towards `+x, +y` by one cell every 4 generations.
///
/// ```text
/// .O.
/// ..O
/// OOO
/// ```
pub fn glider() -> Board {
    cells(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// Render a board in Life 1.06 text with the default header.
pub fn life106(board: &Board) -> String {
    let mut out = String::from("#Life 1.06\n");
    for c in board.sorted() {
        out.push_str(&format!("{} {}\n", c.x, c.y));
    }
    out
}
