//! Probability partition for stochastic operator dispatch.
//!
//! [`ProbabilityPartition`] turns raw, possibly non-normalized selection
//! weights into an ordered partition of `[0, 1)` and maps a single uniform
//! draw onto a segment index. It is the dispatch core of
//! [`MultiMutation`](crate::mutation::MultiMutation) but is independent of
//! any operator type.

/// Normalized cumulative partition of `[0, 1)` built from raw weights.
///
/// Each weight `w_i >= 0` becomes a segment of width `w_i / sum(w)`. The
/// segment boundaries are *inclusive* upper bounds: a draw equal to a
/// boundary selects the lower index. Zero weights produce zero-width
/// segments that no draw can select.
///
/// The bound of the last positive-weight segment is forced to exactly `1.0`
/// so that floating-point short-fall can never leave a draw in `[0, 1)`
/// unmapped.
///
/// # Examples
///
/// ```
/// use evo_mutation::partition::ProbabilityPartition;
///
/// let partition = ProbabilityPartition::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(partition.segment_for(0.10), 0);
/// assert_eq!(partition.segment_for(0.30), 1);
/// assert_eq!(partition.segment_for(0.60), 2);
/// assert_eq!(partition.segment_for(0.99), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ProbabilityPartition {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
    last_reachable: usize,
}

impl ProbabilityPartition {
    /// Builds a partition from raw weights.
    ///
    /// Weights need not be normalized; each must be finite and non-negative
    /// and at least one must be positive. Anything else is a configuration
    /// error — an all-zero weight vector must not silently default to any
    /// distribution.
    pub fn new(weights: &[f64]) -> Result<Self, String> {
        if weights.is_empty() {
            return Err("at least one weight is required".into());
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(format!(
                    "weight {i} must be finite and non-negative, got {w}"
                ));
            }
        }
        let sum: f64 = weights.iter().sum();
        if !sum.is_finite() {
            return Err(format!("weight sum must be finite, got {sum}"));
        }
        if sum <= 0.0 {
            return Err("weights must not all be zero: no segment would be selectable".into());
        }

        let probabilities: Vec<f64> = weights.iter().map(|&w| w / sum).collect();
        debug_assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let mut cumulative = Vec::with_capacity(probabilities.len());
        let mut acc = 0.0;
        for &p in &probabilities {
            acc += p;
            cumulative.push(acc);
        }

        let last_reachable = probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .expect("positive sum implies a positive weight");

        // Pin the tail to exactly 1.0: the last reachable bound must cover
        // every draw below 1.0, and trailing zero-width segments must not
        // reopen through accumulated rounding.
        for c in cumulative[last_reachable..].iter_mut() {
            *c = 1.0;
        }

        Ok(Self {
            probabilities,
            cumulative,
            last_reachable,
        })
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// The normalized segment probabilities (sum to 1 within tolerance).
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Maps a uniform draw in `[0, 1)` to a segment index.
    ///
    /// Returns the smallest index `i` with `r <= c_i` whose segment has
    /// positive width. Zero-width segments are skipped, so an index with
    /// zero weight is never returned — including index 0 for `r = 0.0`
    /// when the leading weights are zero.
    ///
    /// # Panics
    /// Panics if `r` is outside `[0, 1)`.
    pub fn segment_for(&self, r: f64) -> usize {
        assert!((0.0..1.0).contains(&r), "draw must lie in [0, 1), got {r}");

        let mut previous = 0.0;
        for (i, &bound) in self.cumulative.iter().enumerate() {
            if bound > previous && r <= bound {
                return i;
            }
            previous = bound;
        }
        self.last_reachable // floating-point fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equal_weights_quarter_segments() {
        let p = ProbabilityPartition::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        for &prob in p.probabilities() {
            assert!((prob - 0.25).abs() < 1e-9);
        }
        assert_eq!(p.segment_for(0.10), 0);
        assert_eq!(p.segment_for(0.30), 1);
        assert_eq!(p.segment_for(0.60), 2);
        assert_eq!(p.segment_for(0.99), 3);
    }

    #[test]
    fn test_boundary_draw_selects_lower_index() {
        let p = ProbabilityPartition::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        // Boundaries are inclusive upper limits.
        assert_eq!(p.segment_for(0.25), 0);
        assert_eq!(p.segment_for(0.5), 1);
        assert_eq!(p.segment_for(0.75), 2);
    }

    #[test]
    fn test_zero_draw_selects_first_positive_segment() {
        let p = ProbabilityPartition::new(&[2.0, 1.0]).unwrap();
        assert_eq!(p.segment_for(0.0), 0);

        let p = ProbabilityPartition::new(&[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(p.segment_for(0.0), 2);
    }

    #[test]
    fn test_single_positive_weight_always_selected() {
        let p = ProbabilityPartition::new(&[0.0, 1.0, 0.0, 0.0]).unwrap();
        let mut r = 0.0;
        while r < 1.0 {
            assert_eq!(p.segment_for(r), 1, "r = {r}");
            r += 0.0625;
        }
        assert_eq!(p.segment_for(1.0 - f64::EPSILON), 1);
    }

    #[test]
    fn test_zero_weight_entries_unreachable() {
        let p = ProbabilityPartition::new(&[2.0, 0.0, 3.0, 0.0]).unwrap();
        for i in 0..10_000 {
            let r = i as f64 / 10_000.0;
            let idx = p.segment_for(r);
            assert!(idx == 0 || idx == 2, "r = {r} selected zero-weight {idx}");
        }
    }

    #[test]
    fn test_draw_near_one_selects_last_positive_segment() {
        let p = ProbabilityPartition::new(&[1.0, 1.0, 0.0]).unwrap();
        assert_eq!(p.segment_for(1.0 - f64::EPSILON), 1);

        let p = ProbabilityPartition::new(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(p.segment_for(1.0 - f64::EPSILON), 3);
    }

    #[test]
    fn test_unnormalized_weights() {
        let p = ProbabilityPartition::new(&[10.0, 30.0, 60.0]).unwrap();
        let probs = p.probabilities();
        assert!((probs[0] - 0.1).abs() < 1e-9);
        assert!((probs[1] - 0.3).abs() < 1e-9);
        assert!((probs[2] - 0.6).abs() < 1e-9);
        assert_eq!(p.segment_for(0.05), 0);
        assert_eq!(p.segment_for(0.2), 1);
        assert_eq!(p.segment_for(0.5), 2);
    }

    #[test]
    fn test_single_segment() {
        let p = ProbabilityPartition::new(&[7.5]).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.segment_for(0.0), 0);
        assert_eq!(p.segment_for(1.0 - f64::EPSILON), 0);
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let err = ProbabilityPartition::new(&[0.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(err.contains("all be zero"), "unexpected message: {err}");
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(ProbabilityPartition::new(&[]).is_err());
        assert!(ProbabilityPartition::new(&[1.0, -0.1]).is_err());
        assert!(ProbabilityPartition::new(&[f64::NAN, 1.0]).is_err());
        assert!(ProbabilityPartition::new(&[f64::INFINITY, 1.0]).is_err());
        // Finite weights whose sum overflows are a configuration error too.
        assert!(ProbabilityPartition::new(&[f64::MAX, f64::MAX]).is_err());
    }

    #[test]
    #[should_panic(expected = "draw must lie in [0, 1)")]
    fn test_draw_of_one_panics() {
        let p = ProbabilityPartition::new(&[1.0, 1.0]).unwrap();
        p.segment_for(1.0);
    }

    #[test]
    #[should_panic(expected = "draw must lie in [0, 1)")]
    fn test_negative_draw_panics() {
        let p = ProbabilityPartition::new(&[1.0, 1.0]).unwrap();
        p.segment_for(-0.1);
    }

    #[test]
    fn test_extreme_weight_ratio() {
        // The dominant segment absorbs essentially the whole range; the
        // partition must still map every draw to a positive-weight index.
        let p = ProbabilityPartition::new(&[1e300, 1e-300]).unwrap();
        assert_eq!(p.segment_for(0.5), 0);
        assert_eq!(p.segment_for(1.0 - f64::EPSILON), 0);
    }

    proptest! {
        #[test]
        fn prop_probabilities_sum_to_one(
            weights in prop::collection::vec(0.0f64..1e6, 1..8)
        ) {
            prop_assume!(weights.iter().sum::<f64>() > 0.0);
            let p = ProbabilityPartition::new(&weights).unwrap();
            let sum: f64 = p.probabilities().iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_every_draw_maps_to_positive_weight(
            weights in prop::collection::vec(0.0f64..1e6, 1..8),
            r in 0.0f64..1.0
        ) {
            prop_assume!(weights.iter().sum::<f64>() > 0.0);
            let p = ProbabilityPartition::new(&weights).unwrap();
            let idx = p.segment_for(r);
            prop_assert!(idx < weights.len());
            prop_assert!(weights[idx] > 0.0, "selected zero-weight index {}", idx);
        }
    }
}
