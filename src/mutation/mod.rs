//! Mutation operators for real-coded solutions.
//!
//! All operators implement the [`MutationOperator`] capability: perturb a
//! [`RealSolution`](crate::solution::RealSolution) in place using an
//! injected random generator. Operators are configured once at construction
//! and are immutable afterwards, so a single instance can be shared across
//! worker threads (each thread passes its own generator).
//!
//! # Operators
//!
//! - [`UniformMutation`]: bounded uniform perturbation
//! - [`PolynomialMutation`]: Deb's polynomial distribution
//! - [`LinkedPolynomialMutation`]: polynomial with one shared draw per
//!   solution, correlating the mutated variables
//! - [`NonUniformMutation`]: Michalewicz mutation with iteration-dependent
//!   strength
//! - [`MultiMutation`]: weighted composite dispatching to child operators
//!
//! # References
//!
//! - Deb & Agrawal (1996), *A Combined Genetic Adaptive Search (GeneAS)
//!   for Engineering Design*
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures =
//!   Evolution Programs*

mod linked_polynomial;
mod multi;
mod non_uniform;
mod polynomial;
mod uniform;

pub use linked_polynomial::LinkedPolynomialMutation;
pub use multi::{MultiMutation, MultiMutationConfig};
pub use non_uniform::NonUniformMutation;
pub use polynomial::PolynomialMutation;
pub use uniform::UniformMutation;

use crate::solution::RealSolution;
use rand::RngCore;

/// A mutation operator: perturbs one candidate solution in place.
///
/// The trait is object-safe so composites can hold a homogeneous ordered
/// collection of `Box<dyn MutationOperator>`. Implementations must be
/// `Send + Sync`; any per-call randomness comes from the injected `rng`.
pub trait MutationOperator: Send + Sync {
    /// Mutates `solution` in place.
    fn mutate(&self, solution: &mut RealSolution, rng: &mut dyn RngCore);

    /// Informs the operator of the current iteration of the enclosing loop.
    ///
    /// Most operators ignore this; operators whose perturbation strength
    /// depends on progress (e.g. [`NonUniformMutation`]) override it.
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize) {}
}
