//! Route reward evaluation.
//!
//! - [`RouteEvaluator`] — Simulates one vehicle's route and accumulates reward

mod evaluator;

pub use evaluator::RouteEvaluator;
