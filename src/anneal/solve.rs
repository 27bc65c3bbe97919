//! Two-phase solve composition.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::{AnnealConfig, AnnealRunner};
use crate::models::Problem;
use crate::state::Solution;

/// Summary of a completed solve, suitable for logging or JSON emission.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Fleet size.
    pub num_vehicles: usize,
    /// Number of trips in the instance.
    pub num_trips: usize,
    /// Theoretical reward ceiling.
    pub upper_bound: i64,
    /// Best energy after the unrestricted search phase.
    pub search_energy: i64,
    /// Iterations executed by the search phase.
    pub search_iterations: u64,
    /// Final energy after the shift-only polishing phase.
    pub energy: i64,
    /// Iterations executed by the polishing phase.
    pub polish_iterations: u64,
    /// `energy / upper_bound`; 1.0 means every trip earned length + bonus.
    pub quality: f64,
}

/// Runs the full two-phase anneal and returns the best assignment found.
///
/// Phase one searches with shifts and relocations from a random start under
/// `pre_limit`; phase two polishes the phase-one result with shift-only
/// moves under `post_limit`. Both phases draw from the same generator
/// stream — the polish continues where the search left off, without
/// re-seeding.
///
/// # Examples
///
/// ```
/// use fleet_anneal::anneal::solve;
/// use fleet_anneal::models::{Cell, Problem, Trip};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use std::time::Duration;
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let limit = Duration::from_millis(10);
/// let (best, report) = solve(&problem, limit, limit, &mut rng);
/// assert_eq!(best.total_energy(), 5);
/// assert_eq!(report.quality, 1.0);
/// ```
pub fn solve<R: Rng>(
    problem: &Problem,
    pre_limit: Duration,
    post_limit: Duration,
    rng: &mut R,
) -> (Solution, SolveReport) {
    let initial = Solution::init_random(problem, rng);

    let search = AnnealRunner::new(problem, AnnealConfig::general(problem, pre_limit))
        .run(initial, rng);
    let search_energy = search.best.total_energy();
    info!(
        energy = search_energy,
        iterations = search.iterations,
        "search phase finished"
    );

    let polish = AnnealRunner::new(problem, AnnealConfig::polish(post_limit))
        .run(search.best, rng);
    let energy = polish.best.total_energy();
    info!(
        energy,
        iterations = polish.iterations,
        "polish phase finished"
    );

    let upper_bound = problem.upper_bound();
    let report = SolveReport {
        num_vehicles: problem.num_vehicles(),
        num_trips: problem.num_trips(),
        upper_bound,
        search_energy,
        search_iterations: search.iterations,
        energy,
        polish_iterations: polish.iterations,
        quality: if upper_bound > 0 {
            energy as f64 / upper_bound as f64
        } else {
            1.0
        },
    };

    (polish.best, report)
}
