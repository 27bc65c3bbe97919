//! Mutable solution state.
//!
//! - [`Solution`] — Per-vehicle routes with incrementally maintained energies

mod solution;

pub use solution::Solution;
