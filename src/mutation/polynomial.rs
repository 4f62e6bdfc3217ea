//! Polynomial mutation.

use super::MutationOperator;
use crate::repair::Repair;
use crate::solution::RealSolution;
use rand::{Rng, RngCore};

/// Polynomial mutation with distribution index `eta`.
///
/// Each variable mutates independently with probability `probability`.
/// The perturbation follows Deb's polynomial distribution: higher `eta`
/// concentrates offspring near the parent value (typical range 20–100).
///
/// Degenerate bounds (`lower == upper`) collapse the variable to the bound
/// value.
///
/// # References
///
/// - Deb & Agrawal (1996), *A Combined Genetic Adaptive Search (GeneAS)
///   for Engineering Design*
#[derive(Debug, Clone)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
    repair: Repair,
}

impl PolynomialMutation {
    /// Creates a polynomial mutation operator.
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

/// Normalized polynomial perturbation for one variable.
///
/// `u` is a uniform draw in `[0, 1)`; `delta1`/`delta2` are the relative
/// distances to the lower and upper bound. The result lies in `[-1, 1]`
/// and is scaled by the bound width at the call site.
pub(super) fn polynomial_delta(u: f64, delta1: f64, delta2: f64, eta: f64) -> f64 {
    let exponent = 1.0 / (eta + 1.0);
    if u <= 0.5 {
        let val = 2.0 * u + (1.0 - 2.0 * u) * (1.0 - delta1).powf(eta + 1.0);
        val.powf(exponent) - 1.0
    } else {
        let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * (1.0 - delta2).powf(eta + 1.0);
        1.0 - val.powf(exponent)
    }
}

impl MutationOperator for PolynomialMutation {
    fn mutate(&self, solution: &mut RealSolution, rng: &mut dyn RngCore) {
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
            let u = rng.random_range(0.0..1.0);
            let delta_q = polynomial_delta(u, delta1, delta2, self.distribution_index);
            let mutated = self.repair.apply(y + delta_q * range, bounds, rng);
            solution.set_value(i, mutated);
        }
    }
}
