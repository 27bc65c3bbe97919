//! Problem container.

use super::Trip;

/// An immutable dispatch problem instance.
///
/// Owns the ordered trip list (the index of a trip in the list is its id,
/// stable for the life of the problem), the grid shape, the fleet size, and
/// the on-time bonus constant.
///
/// # Examples
///
/// ```
/// use fleet_anneal::models::{Cell, Problem, Trip};
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
/// assert_eq!(problem.num_trips(), 1);
/// assert_eq!(problem.upper_bound(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    rows: i32,
    cols: i32,
    num_vehicles: usize,
    bonus: i32,
    num_steps: i32,
    trips: Vec<Trip>,
}

impl Problem {
    /// Creates a problem instance.
    pub fn new(
        rows: i32,
        cols: i32,
        num_vehicles: usize,
        bonus: i32,
        num_steps: i32,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            rows,
            cols,
            num_vehicles,
            bonus,
            num_steps,
            trips,
        }
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of vehicles in the fleet.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Reward for starting a trip exactly at its earliest start.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Advisory simulation horizon from the input; not used by the cost model.
    pub fn num_steps(&self) -> i32 {
        self.num_steps
    }

    /// All trips, ordered by id.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Number of trips.
    pub fn num_trips(&self) -> usize {
        self.trips.len()
    }

    /// Theoretical reward ceiling: every trip earns its length plus the bonus.
    ///
    /// Loose bound used only for reporting solution quality; no reachable
    /// solution can exceed it.
    pub fn upper_bound(&self) -> i64 {
        self.trips
            .iter()
            .map(|t| t.length() as i64 + self.bonus as i64)
            .sum()
    }
}
