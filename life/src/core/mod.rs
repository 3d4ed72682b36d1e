//! Deterministic, pure simulation logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! boards and return deterministic outputs suitable for tests.

pub mod board;
pub mod coord;
pub mod rule;
pub mod stepper;

pub use board::{Board, Bounds};
pub use coord::Coord;
pub use stepper::{StepStats, advance, step, step_with_stats};
