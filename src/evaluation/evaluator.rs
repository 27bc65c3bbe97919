//! Route evaluator that simulates vehicle timing and accumulates reward.

use crate::models::{Cell, Problem};

/// Evaluates the reward of a single vehicle's route.
///
/// The vehicle starts at the depot cell (0, 0) at time 0 and serves its
/// trips in route order. For each trip it drives to the pickup cell, waits
/// if it arrives before the trip's earliest start, then drives to the
/// drop-off. Per trip the reward is:
///
/// - the problem's bonus, if the trip starts exactly at its earliest start;
/// - plus the trip's length, if it starts no later than its latest start.
///
/// The two conditions are evaluated independently, so a trip earns 0,
/// bonus, length, or bonus + length.
///
/// # Examples
///
/// ```
/// use fleet_anneal::evaluation::RouteEvaluator;
/// use fleet_anneal::models::{Cell, Problem, Trip};
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
///
/// let evaluator = RouteEvaluator::new(&problem);
/// // Departs the depot at time 0, starts on time: bonus 2 + length 3.
/// assert_eq!(evaluator.route_energy(&[0]), 5);
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a Problem,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given problem.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Total reward of a route given as a sequence of trip ids.
    pub fn route_energy(&self, trip_ids: &[usize]) -> i64 {
        let trips = self.problem.trips();
        let bonus = self.problem.bonus() as i64;

        let mut pos = Cell::new(0, 0);
        let mut time = 0;
        let mut total = 0i64;

        for &id in trip_ids {
            let trip = &trips[id];
            let arrival = time + pos.distance_to(trip.source());
            let start = arrival.max(trip.earliest_start());

            if start == trip.earliest_start() {
                total += bonus;
            }
            if start <= trip.latest_start() {
                total += trip.length() as i64;
            }

            time = start + trip.length();
            pos = trip.target();
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Trip};

    fn problem_with(bonus: i32, trips: Vec<Trip>) -> Problem {
        Problem::new(10, 10, 1, bonus, 100, trips)
    }

    #[test]
    fn test_empty_route() {
        let problem = problem_with(2, vec![]);
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[]), 0);
    }

    #[test]
    fn test_on_time_start_earns_bonus_and_length() {
        // Scenario: source at depot, window starts at 0 — both rewards.
        let problem = problem_with(2, vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)]);
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[0]), 5);
        assert_eq!(problem.upper_bound(), 5);
    }

    #[test]
    fn test_waiting_still_earns_bonus() {
        // Arrival at 2, earliest start 5: vehicle waits, start == earliest.
        let problem = problem_with(3, vec![Trip::new(Cell::new(1, 1), Cell::new(1, 4), 5, 20)]);
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[0]), 3 + 3);
    }

    #[test]
    fn test_late_start_earns_length_only() {
        // Arrival at 4 after earliest start 0, but still within latest start.
        let problem = problem_with(2, vec![Trip::new(Cell::new(2, 2), Cell::new(2, 5), 0, 20)]);
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[0]), 3);
    }

    #[test]
    fn test_too_late_earns_nothing() {
        // Arrival at 4, latest finish 5 with length 3 gives latest start 2.
        let problem = problem_with(2, vec![Trip::new(Cell::new(2, 2), Cell::new(2, 5), 0, 5)]);
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[0]), 0);
    }

    #[test]
    fn test_start_at_latest_start_earns_length() {
        // Boundary: start exactly at latest_start still earns the length.
        let problem = problem_with(2, vec![Trip::new(Cell::new(0, 2), Cell::new(0, 5), 0, 5)]);
        let evaluator = RouteEvaluator::new(&problem);
        // Arrival 2 == latest_start (5 - 3); earliest_start is 0 so no bonus.
        assert_eq!(evaluator.route_energy(&[0]), 3);
    }

    #[test]
    fn test_reward_is_one_of_four_values() {
        let trip = Trip::new(Cell::new(0, 1), Cell::new(0, 4), 1, 6);
        let problem = problem_with(2, vec![trip]);
        let evaluator = RouteEvaluator::new(&problem);
        let energy = evaluator.route_energy(&[0]);
        let length = trip.length() as i64;
        let bonus = problem.bonus() as i64;
        assert!([0, bonus, length, bonus + length].contains(&energy));
    }

    #[test]
    fn test_chained_trips_advance_time_and_position() {
        // First trip ends at (0, 3) at time 3; second picks up at (0, 3)
        // with earliest start 3, so it also starts on time.
        let problem = problem_with(
            2,
            vec![
                Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5),
                Trip::new(Cell::new(0, 3), Cell::new(0, 6), 3, 8),
            ],
        );
        let evaluator = RouteEvaluator::new(&problem);
        assert_eq!(evaluator.route_energy(&[0, 1]), 5 + 5);
    }

    #[test]
    fn test_route_order_matters() {
        let problem = problem_with(
            2,
            vec![
                Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5),
                Trip::new(Cell::new(0, 3), Cell::new(0, 6), 3, 8),
            ],
        );
        let evaluator = RouteEvaluator::new(&problem);
        // Served in reverse the first trip starts late and the second never
        // makes its window.
        assert!(evaluator.route_energy(&[1, 0]) < evaluator.route_energy(&[0, 1]));
    }
}
