//! Linked (correlated) polynomial mutation.

use super::polynomial::polynomial_delta;
use super::MutationOperator;
use crate::repair::Repair;
use crate::solution::RealSolution;
use rand::{Rng, RngCore};

/// Polynomial mutation with one shared distribution draw per solution.
///
/// Each variable still passes its own probability gate, but every mutated
/// variable reuses the same draw `u`, so all perturbations share the same
/// side of the distribution and the same relative magnitude. Variables
/// therefore move in a correlated way instead of independently, which
/// preserves linkage between decision variables.
///
/// Parameters and distribution shape are identical to
/// [`PolynomialMutation`](super::PolynomialMutation).
#[derive(Debug, Clone)]
pub struct LinkedPolynomialMutation {
    probability: f64,
    distribution_index: f64,
    repair: Repair,
}

impl LinkedPolynomialMutation {
    /// Creates a linked polynomial mutation operator.
    ///
    /// # Panics
    /// Panics if `probability` is outside `[0, 1]` or `distribution_index`
    /// is negative or non-finite.
    pub fn new(probability: f64, distribution_index: f64, repair: Repair) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "mutation probability must be in [0, 1], got {probability}"
        );
        assert!(
            distribution_index.is_finite() && distribution_index >= 0.0,
            "distribution index must be finite and non-negative, got {distribution_index}"
        );
        Self {
            probability,
            distribution_index,
            repair,
        }
    }

    /// The per-variable mutation probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The distribution index `eta`.
    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }
}

impl MutationOperator for LinkedPolynomialMutation {
    fn mutate(&self, solution: &mut RealSolution, rng: &mut dyn RngCore) {
        // One draw for the whole solution: the linkage between variables.
        let u = rng.random_range(0.0..1.0);

        for i in 0..solution.len() {
            if rng.random_range(0.0..1.0) > self.probability {
                continue;
            }
            let bounds = solution.bound(i);
            if bounds.is_degenerate() {
                solution.set_value(i, bounds.lower);
                continue;
            }
            let y = solution.value(i);
            let range = bounds.width();
            let delta1 = (y - bounds.lower) / range;
            let delta2 = (bounds.upper - y) / range;
            let delta_q = polynomial_delta(u, delta1, delta2, self.distribution_index);
            let mutated = self.repair.apply(y + delta_q * range, bounds, rng);
            solution.set_value(i, mutated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn centered_solution(n: usize) -> RealSolution {
        RealSolution::new(vec![0.0; n], vec![Bounds::new(-1.0, 1.0); n])
    }

    #[test]
    fn test_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let operator = LinkedPolynomialMutation::new(1.0, 20.0, Repair::Bound);
        for _ in 0..100 {
            let mut s = centered_solution(10);
            operator.mutate(&mut s, &mut rng);
            assert!(s.is_feasible());
        }
    }

    #[test]
    fn test_mutated_variables_move_together() {
        // With identical bounds and starting values, the shared draw makes
        // every mutated variable receive the same perturbation.
        let mut rng = StdRng::seed_from_u64(42);
        let operator = LinkedPolynomialMutation::new(1.0, 20.0, Repair::Bound);

        for _ in 0..50 {
            let mut s = centered_solution(10);
            operator.mutate(&mut s, &mut rng);
            let moved: Vec<f64> = s.values().iter().copied().filter(|v| *v != 0.0).collect();
            for pair in moved.windows(2) {
                assert!(
                    (pair[0] - pair[1]).abs() < 1e-12,
                    "perturbations diverged: {pair:?}"
                );
            }
        }
    }

    #[test]
    fn test_zero_probability_never_mutates() {
        let mut rng = StdRng::seed_from_u64(42);
        let operator = LinkedPolynomialMutation::new(0.0, 20.0, Repair::Bound);
        let mut s = centered_solution(10);
        let original = s.clone();
        for _ in 0..50 {
            operator.mutate(&mut s, &mut rng);
        }
        assert_eq!(s, original);
    }

    #[test]
    #[should_panic(expected = "mutation probability must be in [0, 1]")]
    fn test_invalid_probability_panics() {
        LinkedPolynomialMutation::new(-0.1, 20.0, Repair::Bound);
    }
}
