//! The annealing loop.

use std::time::Instant;

use rand::Rng;

use super::AnnealConfig;
use crate::models::Problem;
use crate::search::MoveGenerator;
use crate::state::Solution;

/// Number of iterations between deadline checks and temperature updates.
///
/// Sampling the clock and evaluating the decay power every iteration would
/// dominate the loop; the schedule only needs millisecond resolution.
const SCHEDULE_MASK: u64 = 0xFFF;

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Best solution seen during the run.
    pub best: Solution,
    /// Number of loop iterations executed (including skipped invalid moves).
    pub iterations: u64,
}

/// Runs one simulated annealing pass over a [`Solution`].
///
/// Owns nothing mutable itself: the current solution is threaded through
/// the run, mutated in place by the move generator, and reverted on
/// rejection. The best-seen solution is an independent snapshot, deep-copied
/// only when the current solution strictly improves on it.
///
/// # Examples
///
/// ```
/// use fleet_anneal::anneal::{AnnealConfig, AnnealRunner};
/// use fleet_anneal::models::{Cell, Problem, Trip};
/// use fleet_anneal::state::Solution;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use std::time::Duration;
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
/// let config = AnnealConfig::general(&problem, Duration::from_millis(20));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let initial = Solution::init_random(&problem, &mut rng);
/// let outcome = AnnealRunner::new(&problem, config).run(initial, &mut rng);
/// assert_eq!(outcome.best.total_energy(), 5);
/// ```
pub struct AnnealRunner<'a> {
    problem: &'a Problem,
    config: AnnealConfig,
}

impl<'a> AnnealRunner<'a> {
    /// Creates a runner for the given problem and configuration.
    pub fn new(problem: &'a Problem, config: AnnealConfig) -> Self {
        Self { problem, config }
    }

    /// Anneals from `initial` until the deadline (or the iteration cap).
    pub fn run<R: Rng>(&self, initial: Solution, rng: &mut R) -> AnnealOutcome {
        let generator = MoveGenerator::new(self.config.shifts_only());

        let mut curr = initial;
        let mut best = curr.clone();

        let start = Instant::now();
        let time_limit = self.config.time_limit();
        let max_t = self.config.max_temperature();
        let min_t = self.config.min_temperature();
        let mut temperature = max_t;

        let mut iteration: u64 = 0;
        loop {
            if iteration & SCHEDULE_MASK == 0 {
                let elapsed = start.elapsed();
                if elapsed >= time_limit {
                    break;
                }
                // With an iteration cap the schedule decays over iterations,
                // keeping capped runs independent of wall-clock jitter.
                let progress = match self.config.max_iterations() {
                    Some(cap) if cap > 0 => iteration as f64 / cap as f64,
                    _ => elapsed.as_secs_f64() / time_limit.as_secs_f64(),
                };
                temperature = max_t * (min_t / max_t).powf(progress);
            }
            if let Some(cap) = self.config.max_iterations() {
                if iteration >= cap {
                    break;
                }
            }
            iteration += 1;

            let mv = generator.generate(self.problem, &mut curr, rng);
            debug_assert_eq!(curr.total_energy(), curr.calc_energy(self.problem));

            if !mv.is_valid() {
                continue;
            }

            if accepts(mv.delta(), temperature, rng) {
                if curr.total_energy() > best.total_energy() {
                    best = curr.clone();
                }
            } else {
                mv.revert(&mut curr);
            }
        }

        debug_assert_eq!(best.total_energy(), best.calc_energy(self.problem));
        AnnealOutcome { best, iterations: iteration }
    }
}

/// Metropolis acceptance: improving moves always pass, non-improving moves
/// pass with probability `exp(delta / temperature)`.
///
/// A zero delta lands in the probabilistic branch where `exp(0) = 1`
/// dominates every draw from `[0, 1)`, so sideways moves are always kept.
pub(crate) fn accepts<R: Rng>(delta: i64, temperature: f64, rng: &mut R) -> bool {
    delta > 0 || rng.random_range(0.0..1.0) < (delta as f64 / temperature).exp()
}
