//! Trip type.

use super::Cell;

/// A requested point-to-point trip with a fixed time window.
///
/// A trip earns the on-time bonus if it starts exactly at `earliest_start`,
/// and earns its length as credit if it starts no later than `latest_start`.
/// The latest start is derived from the latest finish given on input:
/// `latest_start = latest_finish - length`.
///
/// # Examples
///
/// ```
/// use fleet_anneal::models::{Cell, Trip};
///
/// let trip = Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5);
/// assert_eq!(trip.length(), 3);
/// assert_eq!(trip.latest_start(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    source: Cell,
    target: Cell,
    earliest_start: i32,
    latest_start: i32,
}

impl Trip {
    /// Creates a trip from its input description.
    ///
    /// `latest_finish` is the last time step at which the trip may end;
    /// the stored latest start is derived from it.
    pub fn new(source: Cell, target: Cell, earliest_start: i32, latest_finish: i32) -> Self {
        let latest_start = latest_finish - source.distance_to(target);
        Self {
            source,
            target,
            earliest_start,
            latest_start,
        }
    }

    /// Pickup cell.
    pub fn source(&self) -> Cell {
        self.source
    }

    /// Drop-off cell.
    pub fn target(&self) -> Cell {
        self.target
    }

    /// Earliest time step at which the trip may start.
    pub fn earliest_start(&self) -> i32 {
        self.earliest_start
    }

    /// Latest time step at which the trip may start and still finish on time.
    pub fn latest_start(&self) -> i32 {
        self.latest_start
    }

    /// Trip length: the Manhattan distance from source to target.
    pub fn length(&self) -> i32 {
        self.source.distance_to(self.target)
    }
}
