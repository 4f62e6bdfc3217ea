//! Repair strategies for out-of-bounds variables.
//!
//! Mutation can push a variable outside its bounds; a [`Repair`] strategy
//! decides how to bring it back. The strategy is chosen once at operator
//! construction and shared by all mutation operators of a composite.

use crate::solution::Bounds;
use rand::{Rng, RngCore};

/// Strategy for repairing a variable that left its bounds.
///
/// Values already inside the bounds pass through unchanged.
///
/// # Examples
///
/// ```
/// use evo_mutation::repair::Repair;
/// use evo_mutation::solution::Bounds;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let bounds = Bounds::new(0.0, 1.0);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// assert_eq!(Repair::Bound.apply(1.7, bounds, &mut rng), 1.0);
/// assert_eq!(Repair::Opposite.apply(1.7, bounds, &mut rng), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repair {
    /// Replace with the violated bound (clamp).
    #[default]
    Bound,

    /// Replace with the opposite bound: below lower yields upper,
    /// above upper yields lower.
    Opposite,

    /// Replace with a uniform random value within the bounds.
    Random,
}

impl Repair {
    /// Repairs `value` against `bounds`.
    ///
    /// In-bounds values are returned unchanged. Degenerate bounds collapse
    /// every out-of-bounds value to the single legal value.
    pub fn apply(&self, value: f64, bounds: Bounds, rng: &mut dyn RngCore) -> f64 {
        if bounds.contains(value) {
            return value;
        }
        match self {
            Repair::Bound => bounds.clamp(value),
            Repair::Opposite => {
                if value < bounds.lower {
                    bounds.upper
                } else {
                    bounds.lower
                }
            }
            Repair::Random => {
                if bounds.is_degenerate() {
                    bounds.lower
                } else {
                    rng.random_range(bounds.lower..=bounds.upper)
                }
            }
        }
    }
}
