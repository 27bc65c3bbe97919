//! Random move sampling and eager application.

use rand::Rng;

use super::Move;
use crate::models::Problem;
use crate::state::Solution;

/// Samples one candidate mutation per call and applies it immediately.
///
/// Generation and application are the same step: the returned [`Move`]
/// describes a mutation that has already happened, and the caller either
/// keeps it or calls [`Move::revert`]. All indices are drawn from the
/// routes' current lengths at the moment of sampling, so out-of-range
/// positions cannot be produced.
///
/// In shift-only mode the destination vehicle is always the source vehicle,
/// which restricts the search to reordering within routes (the polishing
/// phase). In general mode the destination is uniform over all vehicles and
/// a differing destination produces a [`Move::Relocate`].
///
/// # Examples
///
/// ```
/// use fleet_anneal::models::{Cell, Problem, Trip};
/// use fleet_anneal::search::MoveGenerator;
/// use fleet_anneal::state::Solution;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let trips = vec![Trip::new(Cell::new(0, 0), Cell::new(0, 3), 0, 5)];
/// let problem = Problem::new(3, 4, 1, 2, 10, trips);
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut solution = Solution::init_random(&problem, &mut rng);
///
/// let generator = MoveGenerator::new(false);
/// let mv = generator.generate(&problem, &mut solution, &mut rng);
/// assert!(mv.is_valid());
/// assert_eq!(solution.total_energy(), solution.calc_energy(&problem));
/// ```
pub struct MoveGenerator {
    shifts_only: bool,
}

impl MoveGenerator {
    /// Creates a generator; `shifts_only` restricts moves to within-route
    /// repositioning.
    pub fn new(shifts_only: bool) -> Self {
        Self { shifts_only }
    }

    /// Samples a mutation, applies it to `solution`, and returns its record.
    ///
    /// Returns [`Move::Invalid`] when no nonempty source route was found
    /// after `num_vehicles` uniform draws; the caller skips the iteration.
    pub fn generate<R: Rng>(
        &self,
        problem: &Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Move {
        let num_vehicles = problem.num_vehicles();

        let mut vfrom = None;
        for _ in 0..num_vehicles {
            let v = rng.random_range(0..num_vehicles);
            if !solution.routes()[v].is_empty() {
                vfrom = Some(v);
                break;
            }
        }
        let Some(vfrom) = vfrom else {
            return Move::Invalid;
        };

        let pfrom = rng.random_range(0..solution.routes()[vfrom].len());

        if self.shifts_only {
            let pto = rng.random_range(0..solution.routes()[vfrom].len());
            return apply_shift(problem, solution, vfrom, pfrom, pto);
        }

        let vto = rng.random_range(0..num_vehicles);
        if vto == vfrom {
            let pto = rng.random_range(0..solution.routes()[vfrom].len());
            return apply_shift(problem, solution, vfrom, pfrom, pto);
        }

        // Insertion position may append, hence the inclusive range.
        let pto = rng.random_range(0..=solution.routes()[vto].len());
        apply_relocate(problem, solution, vfrom, pfrom, vto, pto)
    }
}

/// Repositions the trip at `from` to `to` within one route and refreshes
/// that vehicle's cached energy.
fn apply_shift(
    problem: &Problem,
    solution: &mut Solution,
    vehicle: usize,
    from: usize,
    to: usize,
) -> Move {
    let pre_total = solution.total_energy();
    let pre_energy = solution.vehicle_energy(vehicle);

    if from != to {
        let route = &mut solution.routes_mut()[vehicle];
        let trip = route.remove(from);
        route.insert(to, trip);

        solution.add_total_energy(-pre_energy);
        let new_energy = solution.update_energy(problem, vehicle);
        solution.add_total_energy(new_energy);
    }

    Move::Shift {
        vehicle,
        from,
        to,
        pre_energy,
        delta: solution.total_energy() - pre_total,
    }
}

/// Moves the trip at `route[vfrom][pfrom]` into `route[vto]` at `pto` and
/// refreshes both touched caches.
fn apply_relocate(
    problem: &Problem,
    solution: &mut Solution,
    vfrom: usize,
    pfrom: usize,
    vto: usize,
    pto: usize,
) -> Move {
    debug_assert_ne!(vfrom, vto);

    let pre_total = solution.total_energy();
    let pre_from_energy = solution.vehicle_energy(vfrom);
    let pre_to_energy = solution.vehicle_energy(vto);

    solution.add_total_energy(-(pre_from_energy + pre_to_energy));

    let trip = solution.routes_mut()[vfrom].remove(pfrom);
    solution.routes_mut()[vto].insert(pto, trip);

    let new_from = solution.update_energy(problem, vfrom);
    let new_to = solution.update_energy(problem, vto);
    solution.add_total_energy(new_from + new_to);

    Move::Relocate {
        vfrom,
        pfrom,
        vto,
        pto,
        pre_from_energy,
        pre_to_energy,
        delta: solution.total_energy() - pre_total,
    }
}
