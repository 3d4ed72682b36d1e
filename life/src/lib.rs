//! Sparse Conway's Game of Life (B3/S23) on an unbounded grid.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (board, neighbour counting, rule,
//!   generation stepper). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting edges (Life 1.06 text, config file).
//!
//! [`simulate`] coordinates the two to implement `life run`.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
