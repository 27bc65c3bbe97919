//! Simulated annealing solver.
//!
//! A single-solution trajectory search: each iteration mutates the current
//! assignment in place, then either keeps the mutation or reverts it under
//! the Metropolis criterion with an exponentially decaying temperature.
//! Termination is purely wall-clock.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod solve;

pub use config::AnnealConfig;
pub use runner::{AnnealOutcome, AnnealRunner};
pub use solve::{solve, SolveReport};
