//! Domain model types for the dispatch problem.
//!
//! Provides the immutable problem data: grid cells with Manhattan distance,
//! trips with fixed time windows, and the problem container that owns the
//! trip list and scoring constants.

mod cell;
mod problem;
mod trip;

pub use cell::Cell;
pub use problem::Problem;
pub use trip::Trip;
