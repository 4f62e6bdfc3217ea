//! Real-coded candidate solutions.
//!
//! A [`RealSolution`] is a vector of `f64` decision variables, each paired
//! positionally with a [`Bounds`] interval. Mutation operators perturb the
//! variables in place and use the bounds to keep (or bring) values inside
//! their valid domain.

use rand::Rng;

/// Closed interval `[lower, upper]` for one decision variable.
///
/// Both bounds must be finite and `lower <= upper`. A degenerate interval
/// (`lower == upper`) is legal: the variable has exactly one valid value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub lower: f64,
    /// Upper bound (inclusive).
    pub upper: f64,
}

impl Bounds {
    /// Creates a new bounds interval.
    ///
    /// # Panics
    /// Panics if either bound is non-finite or `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(
            lower.is_finite() && upper.is_finite(),
            "bounds must be finite, got [{lower}, {upper}]"
        );
        assert!(
            lower <= upper,
            "lower bound must not exceed upper bound, got [{lower}, {upper}]"
        );
        Self { lower, upper }
    }

    /// Width of the interval (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamps `value` to the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Returns `true` if the interval admits exactly one value.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// A candidate solution: bounded real-valued decision variables.
///
/// Variables and bounds are positionally coupled — variable `i` is always
/// constrained by bounds `i`. The pairing is fixed at construction.
///
/// # Examples
///
/// ```
/// use evo_mutation::solution::{Bounds, RealSolution};
///
/// let bounds = vec![Bounds::new(-5.0, 5.0); 3];
/// let solution = RealSolution::new(vec![0.0, 1.0, -2.5], bounds);
/// assert_eq!(solution.len(), 3);
/// assert_eq!(solution.value(1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealSolution {
    values: Vec<f64>,
    bounds: Vec<Bounds>,
}

impl RealSolution {
    /// Creates a solution from explicit values and bounds.
    ///
    /// # Panics
    /// Panics if `values` and `bounds` have different lengths.
    pub fn new(values: Vec<f64>, bounds: Vec<Bounds>) -> Self {
        assert_eq!(
            values.len(),
            bounds.len(),
            "values and bounds must have equal length"
        );
        Self { values, bounds }
    }

    /// Creates a solution with each variable sampled uniformly within its bounds.
    pub fn random<R: Rng>(bounds: &[Bounds], rng: &mut R) -> Self {
        let values = bounds
            .iter()
            .map(|b| {
                if b.is_degenerate() {
                    b.lower
                } else {
                    rng.random_range(b.lower..=b.upper)
                }
            })
            .collect();
        Self {
            values,
            bounds: bounds.to_vec(),
        }
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the solution has no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of variable `i`.
    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Overwrites the value of variable `i`.
    pub fn set_value(&mut self, i: usize, value: f64) {
        self.values[i] = value;
    }

    /// All variable values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Bounds of variable `i`.
    pub fn bound(&self, i: usize) -> Bounds {
        self.bounds[i]
    }

    /// All variable bounds.
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// Returns `true` if every variable lies within its bounds.
    pub fn is_feasible(&self) -> bool {
        self.values
            .iter()
            .zip(&self.bounds)
            .all(|(&v, b)| b.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_queries() {
        let b = Bounds::new(-1.0, 3.0);
        assert_eq!(b.width(), 4.0);
        assert!(b.contains(0.0));
        assert!(b.contains(-1.0));
        assert!(b.contains(3.0));
        assert!(!b.contains(3.1));
        assert_eq!(b.clamp(5.0), 3.0);
        assert_eq!(b.clamp(-5.0), -1.0);
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_bounds_degenerate() {
        let b = Bounds::new(2.0, 2.0);
        assert!(b.is_degenerate());
        assert_eq!(b.width(), 0.0);
        assert!(b.contains(2.0));
    }

    #[test]
    #[should_panic(expected = "lower bound must not exceed upper bound")]
    fn test_bounds_inverted_panics() {
        Bounds::new(1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "bounds must be finite")]
    fn test_bounds_nan_panics() {
        Bounds::new(f64::NAN, 1.0);
    }

    #[test]
    fn test_solution_accessors() {
        let bounds = vec![Bounds::new(0.0, 1.0), Bounds::new(-2.0, 2.0)];
        let mut s = RealSolution::new(vec![0.5, 1.0], bounds);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.value(0), 0.5);
        assert_eq!(s.bound(1).upper, 2.0);

        s.set_value(0, 0.9);
        assert_eq!(s.values(), &[0.9, 1.0]);
    }

    #[test]
    #[should_panic(expected = "values and bounds must have equal length")]
    fn test_solution_length_mismatch_panics() {
        RealSolution::new(vec![0.0], vec![]);
    }

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = vec![
            Bounds::new(-5.0, 5.0),
            Bounds::new(0.0, 0.001),
            Bounds::new(3.0, 3.0),
        ];

        for _ in 0..100 {
            let s = RealSolution::random(&bounds, &mut rng);
            assert!(s.is_feasible());
            assert_eq!(s.value(2), 3.0);
        }
    }

    #[test]
    fn test_is_feasible_detects_violation() {
        let bounds = vec![Bounds::new(0.0, 1.0)];
        let s = RealSolution::new(vec![1.5], bounds);
        assert!(!s.is_feasible());
    }
}
