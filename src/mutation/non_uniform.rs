//! Non-uniform mutation with iteration-dependent strength.

use super::MutationOperator;
use crate::repair::Repair;
use crate::solution::RealSolution;
use rand::{Rng, RngCore};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Michalewicz non-uniform mutation.
///
/// Early in a run the operator explores with large perturbations; as the
/// current iteration approaches `max_iterations` the perturbation shrinks
/// towards zero, turning the operator into a fine-tuner.
///
/// The operator learns the current iteration through
/// [`on_iteration`](MutationOperator::on_iteration); the counter is atomic,
/// so a shared instance stays usable from parallel workers. Until the first
/// update the operator mutates at full strength (iteration 0).
///
/// # References
///
/// - Michalewicz (1996), *Genetic Algorithms + Data Structures =
///   Evolution Programs*, Section 5.3
#[derive(Debug)]
pub struct NonUniformMutation {
    probability: f64,
    perturbation: f64,
    max_iterations: usize,
    current_iteration: AtomicUsize,
    repair: Repair,
}

impl NonUniformMutation {
    /// Creates a non-uniform mutation operator.
    ///
    /// # Panics
    /// Panics if `probability` is outside `[0, 1]`, `perturbation` is
    /// negative or non-finite, or `max_iterations` is zero.
    pub fn new(probability: f64, perturbation: f64, max_iterations: usize, repair: Repair) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "mutation probability must be in [0, 1], got {probability}"
        );
        assert!(
            perturbation.is_finite() && perturbation >= 0.0,
            "perturbation must be finite and non-negative, got {perturbation}"
        );
        assert!(max_iterations >= 1, "max_iterations must be at least 1");
        Self {
            probability,
            perturbation,
            max_iterations,
            current_iteration: AtomicUsize::new(0),
            repair,
        }
    }

    /// The per-variable mutation probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The perturbation shape parameter `b`.
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    /// The iteration count at which the perturbation strength reaches zero.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The most recently reported iteration.
    pub fn current_iteration(&self) -> usize {
        self.current_iteration.load(Ordering::Relaxed)
    }

    /// Decaying step towards a bound: `y * (1 - u^((1 - it/max)^b))`.
    ///
    /// `y` is the signed distance to the targeted bound, so the result is a
    /// step of the same sign that shrinks as `it` approaches `max`.
    fn delta(&self, y: f64, rng: &mut dyn RngCore) -> f64 {
        let u: f64 = rng.random_range(0.0..1.0);
        let it = self.current_iteration().min(self.max_iterations);
        let progress = 1.0 - it as f64 / self.max_iterations as f64;
        y * (1.0 - u.powf(progress.powf(self.perturbation)))
    }
}

impl MutationOperator for NonUniformMutation {
    fn mutate(&self, solution: &mut RealSolution, rng: &mut dyn RngCore) {
        for i in 0..solution.len() {
            if rng.random_range(0.0..1.0) > self.probability {
                continue;
            }
            let bounds = solution.bound(i);
            let y = solution.value(i);
            let step = if rng.random_range(0.0..1.0) <= 0.5 {
                self.delta(bounds.upper - y, rng)
            } else {
                self.delta(bounds.lower - y, rng)
            };
            let mutated = self.repair.apply(y + step, bounds, rng);
            solution.set_value(i, mutated);
        }
    }

    fn on_iteration(&self, iteration: usize) {
        self.current_iteration.store(iteration, Ordering::Relaxed);
    }
}
