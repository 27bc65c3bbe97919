//! Annealing run configuration.

use std::time::Duration;

use crate::models::Problem;

/// Temperature floor the schedule decays toward.
const MIN_TEMPERATURE: f64 = 0.01;

/// Temperature ceiling for the shift-only polishing phase.
const POLISH_MAX_TEMPERATURE: f64 = 10.0;

/// Parameters of one annealing run.
///
/// Two presets cover the two phases of a solve: [`AnnealConfig::general`]
/// allows shifts and relocations under a temperature ceiling scaled to the
/// problem (grid extent plus bonus magnitude), and [`AnnealConfig::polish`]
/// restricts the search to within-route shifts under a small fixed ceiling.
///
/// # Examples
///
/// ```
/// use fleet_anneal::anneal::AnnealConfig;
/// use fleet_anneal::models::Problem;
/// use std::time::Duration;
///
/// let problem = Problem::new(3, 4, 1, 2, 10, vec![]);
/// let config = AnnealConfig::general(&problem, Duration::from_secs(10));
/// assert_eq!(config.max_temperature(), (3 + 4 + 2) as f64 * 8.0);
/// assert!(!config.shifts_only());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    time_limit: Duration,
    max_temperature: f64,
    min_temperature: f64,
    shifts_only: bool,
    max_iterations: Option<u64>,
}

impl AnnealConfig {
    /// Configuration for the unrestricted search phase.
    pub fn general(problem: &Problem, time_limit: Duration) -> Self {
        let scale = (problem.rows() + problem.cols() + problem.bonus()) as f64;
        Self {
            time_limit,
            max_temperature: scale * 8.0,
            min_temperature: MIN_TEMPERATURE,
            shifts_only: false,
            max_iterations: None,
        }
    }

    /// Configuration for the shift-only polishing phase.
    pub fn polish(time_limit: Duration) -> Self {
        Self {
            time_limit,
            max_temperature: POLISH_MAX_TEMPERATURE,
            min_temperature: MIN_TEMPERATURE,
            shifts_only: true,
            max_iterations: None,
        }
    }

    /// Caps the run at a fixed iteration count, for reproducible runs.
    ///
    /// The temperature schedule then decays over iterations rather than
    /// elapsed time, so two capped runs with the same seed take identical
    /// trajectories. The wall-clock deadline still applies; whichever limit
    /// is reached first stops the run.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Wall-clock budget of the run.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Starting temperature.
    pub fn max_temperature(&self) -> f64 {
        self.max_temperature
    }

    /// Temperature the schedule decays toward at the deadline.
    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    /// Whether moves are restricted to within-route shifts.
    pub fn shifts_only(&self) -> bool {
        self.shifts_only
    }

    /// Optional iteration cap.
    pub fn max_iterations(&self) -> Option<u64> {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_scales_with_problem() {
        let problem = Problem::new(100, 200, 5, 25, 1000, vec![]);
        let config = AnnealConfig::general(&problem, Duration::from_secs(10));
        assert_eq!(config.max_temperature(), 325.0 * 8.0);
        assert!(!config.shifts_only());
        assert_eq!(config.min_temperature(), 0.01);
    }

    #[test]
    fn test_polish_is_shift_only_with_small_ceiling() {
        let config = AnnealConfig::polish(Duration::from_secs(10));
        assert!(config.shifts_only());
        assert_eq!(config.max_temperature(), 10.0);
    }

    #[test]
    fn test_iteration_cap() {
        let config = AnnealConfig::polish(Duration::from_secs(10)).with_max_iterations(1000);
        assert_eq!(config.max_iterations(), Some(1000));
    }
}
