//! Solution representation with cached energies.
//!
//! Routes are stored as `Vec<Vec<usize>>` (trip id sequences, one per
//! vehicle) alongside a cached per-vehicle energy and the cached total.
//! Move application splices the route vectors in place and refreshes only
//! the touched caches, so a trial move costs O(route length) instead of a
//! full re-evaluation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::RouteEvaluator;
use crate::models::Problem;

/// A complete assignment of trips to vehicles.
///
/// Every trip id appears in exactly one route. The cached energies equal a
/// from-scratch recompute between moves; they are only out of sync inside a
/// move's apply/revert body.
///
/// Cloning produces an independent deep snapshot, which is how the solver
/// keeps its best-seen solution.
///
/// # Examples
///
/// ```
/// use fleet_anneal::models::{Cell, Problem, Trip};
/// use fleet_anneal::state::Solution;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let solution = Solution::init_random(&problem, &mut rng);
/// assert_eq!(solution.total_energy(), solution.calc_energy(&problem));
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Vec<usize>>,
    energies: Vec<i64>,
    total_energy: i64,
}

impl Solution {
    /// Creates a random initial assignment.
    ///
    /// Shuffles the trip ids into a random permutation, then appends each
    /// trip to a uniformly chosen vehicle. Every trip is scheduled exactly
    /// once; the per-vehicle order is the permutation order.
    pub fn init_random<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        let num_vehicles = problem.num_vehicles();

        let mut trip_ids: Vec<usize> = (0..problem.num_trips()).collect();
        trip_ids.shuffle(rng);

        let mut routes = vec![Vec::new(); num_vehicles];
        for id in trip_ids {
            let vehicle = rng.random_range(0..num_vehicles);
            routes[vehicle].push(id);
        }

        let mut solution = Self {
            routes,
            energies: vec![0; num_vehicles],
            total_energy: 0,
        };
        solution.recompute_all(problem);
        solution
    }

    /// Returns the routes as trip id sequences, indexed by vehicle.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Cached energy of one vehicle's route.
    pub fn vehicle_energy(&self, vehicle: usize) -> i64 {
        self.energies[vehicle]
    }

    /// Cached total energy across all vehicles.
    pub fn total_energy(&self) -> i64 {
        self.total_energy
    }

    /// Recomputes and caches one vehicle's energy, returning the new value.
    pub fn update_energy(&mut self, problem: &Problem, vehicle: usize) -> i64 {
        let energy = RouteEvaluator::new(problem).route_energy(&self.routes[vehicle]);
        self.energies[vehicle] = energy;
        energy
    }

    /// Recomputes every vehicle's energy and the total from scratch.
    pub fn recompute_all(&mut self, problem: &Problem) {
        let evaluator = RouteEvaluator::new(problem);
        let mut total = 0;
        for (route, energy) in self.routes.iter().zip(self.energies.iter_mut()) {
            *energy = evaluator.route_energy(route);
            total += *energy;
        }
        self.total_energy = total;
    }

    /// From-scratch total energy, ignoring the caches.
    ///
    /// Verification helper; the search loop never calls this.
    pub fn calc_energy(&self, problem: &Problem) -> i64 {
        let evaluator = RouteEvaluator::new(problem);
        self.routes.iter().map(|r| evaluator.route_energy(r)).sum()
    }

    pub(crate) fn routes_mut(&mut self) -> &mut Vec<Vec<usize>> {
        &mut self.routes
    }

    pub(crate) fn set_vehicle_energy(&mut self, vehicle: usize, energy: i64) {
        self.energies[vehicle] = energy;
    }

    pub(crate) fn add_total_energy(&mut self, delta: i64) {
        self.total_energy += delta;
    }
}
