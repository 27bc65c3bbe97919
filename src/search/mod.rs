//! Randomized move generation for the annealing search.
//!
//! - [`Move`] — Reversible record of one applied mutation
//! - [`MoveGenerator`] — Samples and eagerly applies a candidate mutation

mod generator;
mod moves;

pub use generator::MoveGenerator;
pub use moves::Move;
