//! Weighted composite mutation.
//!
//! [`MultiMutation`] owns an ordered list of child operators and a
//! [`ProbabilityPartition`] built from per-operator selection weights.
//! Every call draws one uniform value, maps it to a partition segment and
//! delegates to the child at that position — exactly one child runs per
//! call, with no retries and no fallback.

use super::{
    LinkedPolynomialMutation, MutationOperator, NonUniformMutation, PolynomialMutation,
    UniformMutation,
};
use crate::partition::ProbabilityPartition;
use crate::repair::Repair;
use crate::solution::RealSolution;
use rand::{Rng, RngCore};

/// Configuration for [`MultiMutation`].
///
/// Holds the global mutation probability (forwarded unchanged to every
/// child operator), the four selection weights, the per-operator tuning
/// parameters and the shared repair strategy.
///
/// Weights are relative, not probabilities: they are normalized at
/// construction. A zero weight makes the corresponding operator
/// unreachable; at least one weight must be positive.
///
/// # Examples
///
/// ```
/// use evo_mutation::mutation::MultiMutationConfig;
/// use evo_mutation::repair::Repair;
///
/// let config = MultiMutationConfig::default()
///     .with_mutation_probability(0.2)
///     .with_weights(3.0, 1.0, 1.0, 1.0)
///     .with_repair(Repair::Random);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiMutationConfig {
    /// Per-variable mutation probability, forwarded to every child operator.
    ///
    /// A typical value is `1 / n` for `n` decision variables.
    pub mutation_probability: f64,

    /// Selection weight of the uniform mutation operator.
    pub uniform_weight: f64,

    /// Selection weight of the polynomial mutation operator.
    pub polynomial_weight: f64,

    /// Selection weight of the linked polynomial mutation operator.
    pub linked_polynomial_weight: f64,

    /// Selection weight of the non-uniform mutation operator.
    pub non_uniform_weight: f64,

    /// Perturbation magnitude of the uniform operator.
    pub uniform_perturbation: f64,

    /// Distribution index of the polynomial operator.
    pub polynomial_distribution_index: f64,

    /// Distribution index of the linked polynomial operator.
    pub linked_polynomial_distribution_index: f64,

    /// Shape parameter of the non-uniform operator's decay.
    pub non_uniform_perturbation: f64,

    /// Iteration count at which the non-uniform operator's strength
    /// reaches zero.
    pub non_uniform_max_iterations: usize,

    /// Repair strategy shared by every child operator.
    pub repair: Repair,
}

impl Default for MultiMutationConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 0.1,
            uniform_weight: 1.0,
            polynomial_weight: 1.0,
            linked_polynomial_weight: 1.0,
            non_uniform_weight: 1.0,
            uniform_perturbation: 0.5,
            polynomial_distribution_index: 20.0,
            linked_polynomial_distribution_index: 20.0,
            non_uniform_perturbation: 5.0,
            non_uniform_max_iterations: 250,
            repair: Repair::Bound,
        }
    }
}

impl MultiMutationConfig {
    /// Sets the global mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the four selection weights (uniform, polynomial, linked
    /// polynomial, non-uniform).
    pub fn with_weights(mut self, uniform: f64, polynomial: f64, linked: f64, non_uniform: f64) -> Self {
        self.uniform_weight = uniform;
        self.polynomial_weight = polynomial;
        self.linked_polynomial_weight = linked;
        self.non_uniform_weight = non_uniform;
        self
    }

    /// Sets the uniform operator's perturbation magnitude.
    pub fn with_uniform_perturbation(mut self, perturbation: f64) -> Self {
        self.uniform_perturbation = perturbation;
        self
    }

    /// Sets the polynomial operator's distribution index.
    pub fn with_polynomial_distribution_index(mut self, eta: f64) -> Self {
        self.polynomial_distribution_index = eta;
        self
    }

    /// Sets the linked polynomial operator's distribution index.
    pub fn with_linked_polynomial_distribution_index(mut self, eta: f64) -> Self {
        self.linked_polynomial_distribution_index = eta;
        self
    }

    /// Sets the non-uniform operator's decay shape parameter.
    pub fn with_non_uniform_perturbation(mut self, perturbation: f64) -> Self {
        self.non_uniform_perturbation = perturbation;
        self
    }

    /// Sets the non-uniform operator's maximum iteration count.
    pub fn with_non_uniform_max_iterations(mut self, iterations: usize) -> Self {
        self.non_uniform_max_iterations = iterations;
        self
    }

    /// Sets the repair strategy shared by all child operators.
    pub fn with_repair(mut self, repair: Repair) -> Self {
        self.repair = repair;
        self
    }

    /// The four raw weights in operator order.
    pub fn weights(&self) -> [f64; 4] {
        [
            self.uniform_weight,
            self.polynomial_weight,
            self.linked_polynomial_weight,
            self.non_uniform_weight,
        ]
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is outside its
    /// valid domain. An all-zero weight vector is rejected here: it would
    /// leave no operator selectable.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            ));
        }
        for (name, w) in [
            ("uniform_weight", self.uniform_weight),
            ("polynomial_weight", self.polynomial_weight),
            ("linked_polynomial_weight", self.linked_polynomial_weight),
            ("non_uniform_weight", self.non_uniform_weight),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {w}"));
            }
        }
        if self.weights().iter().sum::<f64>() <= 0.0 {
            return Err("at least one selection weight must be positive".into());
        }
        for (name, v) in [
            ("uniform_perturbation", self.uniform_perturbation),
            ("polynomial_distribution_index", self.polynomial_distribution_index),
            (
                "linked_polynomial_distribution_index",
                self.linked_polynomial_distribution_index,
            ),
            ("non_uniform_perturbation", self.non_uniform_perturbation),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {v}"));
            }
        }
        if self.non_uniform_max_iterations == 0 {
            return Err("non_uniform_max_iterations must be at least 1".into());
        }
        Ok(())
    }
}

/// Composite mutation: dispatches each call to one weighted child operator.
///
/// The child operators and the partition are positionally coupled — segment
/// `i` always selects operator `i` — and both are fixed at construction.
/// The operator is immutable afterwards and `Send + Sync`; callers inject
/// their own random generator per call, so one instance can serve parallel
/// workers mutating different solutions.
///
/// # Examples
///
/// ```
/// use evo_mutation::mutation::{MultiMutation, MultiMutationConfig};
/// use evo_mutation::solution::{Bounds, RealSolution};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = MultiMutationConfig::default().with_mutation_probability(0.2);
/// let operator = MultiMutation::new(config).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let bounds = vec![Bounds::new(-5.0, 5.0); 10];
/// let mut solution = RealSolution::random(&bounds, &mut rng);
/// operator.execute(&mut solution, &mut rng);
/// assert!(solution.is_feasible());
/// ```
pub struct MultiMutation {
    mutation_probability: f64,
    partition: ProbabilityPartition,
    operators: Vec<Box<dyn MutationOperator>>,
}

impl std::fmt::Debug for MultiMutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiMutation")
            .field("mutation_probability", &self.mutation_probability)
            .field("partition", &self.partition)
            .field("operator_count", &self.operators.len())
            .finish()
    }
}

impl MultiMutation {
    /// Builds the composite with its four standard child operators:
    /// uniform, polynomial, linked polynomial and non-uniform, in that
    /// order. The global mutation probability and the repair strategy are
    /// forwarded unchanged to every child.
    ///
    /// Fails with a configuration error if any parameter is outside its
    /// valid domain or no weight is positive.
    pub fn new(config: MultiMutationConfig) -> Result<Self, String> {
        config.validate()?;
        let p = config.mutation_probability;
        let operators: Vec<Box<dyn MutationOperator>> = vec![
            Box::new(UniformMutation::new(
                p,
                config.uniform_perturbation,
                config.repair,
            )),
            Box::new(PolynomialMutation::new(
                p,
                config.polynomial_distribution_index,
                config.repair,
            )),
            Box::new(LinkedPolynomialMutation::new(
                p,
                config.linked_polynomial_distribution_index,
                config.repair,
            )),
            Box::new(NonUniformMutation::new(
                p,
                config.non_uniform_perturbation,
                config.non_uniform_max_iterations,
                config.repair,
            )),
        ];
        Self::from_operators(p, &config.weights(), operators)
    }

    /// Builds a composite from an arbitrary number of operators and their
    /// selection weights, paired positionally.
    ///
    /// Fails when the lengths differ or the weights do not form a valid
    /// partition (negative, non-finite, or summing to zero).
    pub fn from_operators(
        mutation_probability: f64,
        weights: &[f64],
        operators: Vec<Box<dyn MutationOperator>>,
    ) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(format!(
                "mutation_probability must be in [0, 1], got {mutation_probability}"
            ));
        }
        if weights.len() != operators.len() {
            return Err(format!(
                "{} weights for {} operators; weights and operators pair positionally",
                weights.len(),
                operators.len()
            ));
        }
        let partition = ProbabilityPartition::new(weights)?;
        Ok(Self {
            mutation_probability,
            partition,
            operators,
        })
    }

    /// Mutates `solution` in place by delegating to exactly one child.
    ///
    /// Draws a single uniform value in `[0, 1)`, maps it through the
    /// partition and runs the child at the selected index. A panic raised
    /// by the child propagates unchanged.
    ///
    /// # Panics
    /// Panics if `solution` has no variables. The check runs before the
    /// random draw, so a failed call consumes no randomness.
    pub fn execute<R: Rng>(&self, solution: &mut RealSolution, rng: &mut R) {
        assert!(
            !solution.is_empty(),
            "cannot mutate a solution with no variables"
        );
        let r = rng.random_range(0.0..1.0);
        let index = self.partition.segment_for(r);
        self.operators[index].mutate(solution, rng);
    }

    /// The global mutation probability forwarded to every child.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// The normalized selection probabilities, in operator order.
    ///
    /// Derived once at construction by dividing each weight by the weight
    /// sum; they sum to 1 within floating-point tolerance.
    pub fn probabilities(&self) -> &[f64] {
        self.partition.probabilities()
    }

    /// Number of child operators.
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }
}

impl MutationOperator for MultiMutation {
    fn mutate(&self, solution: &mut RealSolution, mut rng: &mut dyn RngCore) {
        self.execute(solution, &mut rng);
    }

    /// Forwards the current iteration to every child operator.
    fn on_iteration(&self, iteration: usize) {
        for operator in &self.operators {
            operator.on_iteration(iteration);
        }
    }
}
