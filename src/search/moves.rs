//! Reversible move records.

use crate::state::Solution;

/// The record of one mutation applied to a [`Solution`], carrying enough
/// pre-move state to undo it exactly.
///
/// A move is produced by one
/// [`MoveGenerator::generate`](super::MoveGenerator::generate) call and
/// consumed by at most one [`revert`](Move::revert) call. Revert restores
/// the spliced routes and the cached energies from the snapshot; it never
/// recomputes anything, so it is the exact structural and numeric inverse
/// of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// No mutation happened (every route was empty). Revert is a no-op.
    Invalid,
    /// A trip was repositioned within one vehicle's route.
    Shift {
        /// Vehicle whose route was spliced.
        vehicle: usize,
        /// Index the trip was removed from.
        from: usize,
        /// Index the trip was reinserted at.
        to: usize,
        /// The vehicle's cached energy before the move.
        pre_energy: i64,
        /// Total energy change caused by the move.
        delta: i64,
    },
    /// A trip was moved from one vehicle's route to another's.
    Relocate {
        /// Source vehicle.
        vfrom: usize,
        /// Index the trip was removed from in the source route.
        pfrom: usize,
        /// Destination vehicle.
        vto: usize,
        /// Index the trip was inserted at in the destination route.
        pto: usize,
        /// Source vehicle's cached energy before the move.
        pre_from_energy: i64,
        /// Destination vehicle's cached energy before the move.
        pre_to_energy: i64,
        /// Total energy change caused by the move.
        delta: i64,
    },
}

impl Move {
    /// Total energy change of the applied mutation; zero for [`Move::Invalid`].
    pub fn delta(&self) -> i64 {
        match *self {
            Move::Invalid => 0,
            Move::Shift { delta, .. } | Move::Relocate { delta, .. } => delta,
        }
    }

    /// Returns `false` only for [`Move::Invalid`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, Move::Invalid)
    }

    /// Undoes the mutation, restoring routes and cached energies to their
    /// exact pre-move values.
    pub fn revert(&self, solution: &mut Solution) {
        match *self {
            Move::Invalid => {}
            Move::Shift {
                vehicle,
                from,
                to,
                pre_energy,
                delta,
            } => {
                if from != to {
                    let route = &mut solution.routes_mut()[vehicle];
                    let trip = route.remove(to);
                    route.insert(from, trip);
                }
                solution.set_vehicle_energy(vehicle, pre_energy);
                solution.add_total_energy(-delta);
            }
            Move::Relocate {
                vfrom,
                pfrom,
                vto,
                pto,
                pre_from_energy,
                pre_to_energy,
                delta,
            } => {
                let trip = solution.routes_mut()[vto].remove(pto);
                solution.routes_mut()[vfrom].insert(pfrom, trip);
                solution.set_vehicle_energy(vfrom, pre_from_energy);
                solution.set_vehicle_energy(vto, pre_to_energy);
                solution.add_total_energy(-delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Problem, Trip};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_problem() -> Problem {
        let trips = vec![
            Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5),
            Trip::new(Cell::new(1, 1), Cell::new(4, 5), 2, 20),
            Trip::new(Cell::new(2, 0), Cell::new(2, 4), 3, 15),
        ];
        Problem::new(5, 6, 2, 2, 40, trips)
    }

    fn fixed_solution(problem: &Problem) -> Solution {
        let mut rng = StdRng::seed_from_u64(0);
        let mut solution = Solution::init_random(problem, &mut rng);
        solution.routes_mut()[0] = vec![0, 1];
        solution.routes_mut()[1] = vec![2];
        solution.recompute_all(problem);
        solution
    }

    #[test]
    fn test_invalid_revert_is_noop() {
        let problem = sample_problem();
        let mut solution = fixed_solution(&problem);
        let before = solution.clone();

        Move::Invalid.revert(&mut solution);

        assert_eq!(solution.routes(), before.routes());
        assert_eq!(solution.total_energy(), before.total_energy());
    }

    #[test]
    fn test_invalid_accessors() {
        assert_eq!(Move::Invalid.delta(), 0);
        assert!(!Move::Invalid.is_valid());
    }

    #[test]
    fn test_shift_revert_restores_route_and_caches() {
        let problem = sample_problem();
        let mut solution = fixed_solution(&problem);
        let before = solution.clone();

        // Apply a shift by hand: move trip at 0 to position 1 in route 0.
        let pre_energy = solution.vehicle_energy(0);
        let pre_total = solution.total_energy();
        let trip = solution.routes_mut()[0].remove(0);
        solution.routes_mut()[0].insert(1, trip);
        solution.add_total_energy(-pre_energy);
        let new_energy = solution.update_energy(&problem, 0);
        solution.add_total_energy(new_energy);

        let mv = Move::Shift {
            vehicle: 0,
            from: 0,
            to: 1,
            pre_energy,
            delta: solution.total_energy() - pre_total,
        };
        mv.revert(&mut solution);

        assert_eq!(solution.routes(), before.routes());
        assert_eq!(solution.vehicle_energy(0), before.vehicle_energy(0));
        assert_eq!(solution.total_energy(), before.total_energy());
        assert_eq!(solution.total_energy(), solution.calc_energy(&problem));
    }

    #[test]
    fn test_relocate_revert_restores_both_routes() {
        let problem = sample_problem();
        let mut solution = fixed_solution(&problem);
        let before = solution.clone();

        let pre_from_energy = solution.vehicle_energy(0);
        let pre_to_energy = solution.vehicle_energy(1);
        let pre_total = solution.total_energy();
        solution.add_total_energy(-(pre_from_energy + pre_to_energy));
        let trip = solution.routes_mut()[0].remove(1);
        solution.routes_mut()[1].insert(0, trip);
        let new_from = solution.update_energy(&problem, 0);
        let new_to = solution.update_energy(&problem, 1);
        solution.add_total_energy(new_from + new_to);

        let mv = Move::Relocate {
            vfrom: 0,
            pfrom: 1,
            vto: 1,
            pto: 0,
            pre_from_energy,
            pre_to_energy,
            delta: solution.total_energy() - pre_total,
        };
        mv.revert(&mut solution);

        assert_eq!(solution.routes(), before.routes());
        assert_eq!(solution.vehicle_energy(0), before.vehicle_energy(0));
        assert_eq!(solution.vehicle_energy(1), before.vehicle_energy(1));
        assert_eq!(solution.total_energy(), before.total_energy());
    }
}
