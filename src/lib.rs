//! # fleet-anneal
//!
//! Assigns a fleet of vehicles to time-windowed point-to-point trips on a
//! grid, maximizing on-time bonuses plus trip length credit, via randomized
//! local search (simulated annealing) under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Immutable problem data (Cell, Trip, Problem)
//! - [`evaluation`] — Route reward simulation (RouteEvaluator)
//! - [`state`] — Mutable solution state with cached energies (Solution)
//! - [`search`] — Reversible move generation (Move, MoveGenerator)
//! - [`anneal`] — The annealing loop and two-phase solve
//! - [`io`] — Plain-text problem parsing and assignment output

pub mod anneal;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod search;
pub mod state;
