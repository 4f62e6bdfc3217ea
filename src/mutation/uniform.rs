//! Uniform mutation.

use super::MutationOperator;
use crate::repair::Repair;
use crate::solution::RealSolution;
use rand::{Rng, RngCore};

/// Uniform mutation: adds a bounded uniform perturbation to each variable.
///
/// Each variable mutates independently with probability `probability`; a
/// mutated variable receives `(u - 0.5) * perturbation` where `u` is a
/// uniform draw in `[0, 1)`, then is repaired against its bounds.
///
/// # Examples
///
/// ```
/// use evo_mutation::mutation::{MutationOperator, UniformMutation};
/// use evo_mutation::repair::Repair;
/// use evo_mutation::solution::{Bounds, RealSolution};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let operator = UniformMutation::new(1.0, 0.5, Repair::Bound);
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut solution = RealSolution::new(vec![0.0], vec![Bounds::new(-1.0, 1.0)]);
/// operator.mutate(&mut solution, &mut rng);
/// assert!(solution.is_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct UniformMutation {
    probability: f64,
    perturbation: f64,
    repair: Repair,
}

impl UniformMutation {
    /// Creates a uniform mutation operator.
    ///
    /// # Panics
    /// Panics if `probability` is outside `[0, 1]` or `perturbation` is
    /// negative or non-finite.
    pub fn new(probability: f64, perturbation: f64, repair: Repair) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "mutation probability must be in [0, 1], got {probability}"
        );
        assert!(
            perturbation.is_finite() && perturbation >= 0.0,
            "perturbation must be finite and non-negative, got {perturbation}"
        );
        Self {
            probability,
            perturbation,
            repair,
        }
    }

    /// The per-variable mutation probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The perturbation magnitude.
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }
}

impl MutationOperator for UniformMutation {
    fn mutate(&self, solution: &mut RealSolution, rng: &mut dyn RngCore) {
        for i in 0..solution.len() {
            if rng.random_range(0.0..1.0) < self.probability {
                let offset = (rng.random_range(0.0..1.0) - 0.5) * self.perturbation;
                let value = solution.value(i) + offset;
                let repaired = self.repair.apply(value, solution.bound(i), rng);
                solution.set_value(i, repaired);
            }
        }
    }
}
