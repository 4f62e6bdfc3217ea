//! Mutation operators for real-coded evolutionary optimization.
//!
//! Provides the perturbation side of an evolutionary loop for solutions
//! encoded as vectors of bounded doubles:
//!
//! - **Elementary operators**: uniform, polynomial, linked polynomial and
//!   non-uniform mutation, each with its own tuning parameters and a
//!   pluggable out-of-bounds [`repair`] strategy.
//! - **Composite dispatch**: [`mutation::MultiMutation`] selects one child
//!   operator per call from user-supplied selection weights, normalized
//!   into a [`partition::ProbabilityPartition`] of `[0, 1)`.
//!
//! # Architecture
//!
//! Operators share the [`mutation::MutationOperator`] capability and are
//! immutable after construction. Randomness is always injected by the
//! caller (`rand::Rng` / `rand::RngCore`), never taken from a process-wide
//! generator, so runs are reproducible under a seeded generator and a
//! single operator instance can serve parallel workers, each with its own
//! generator.
//!
//! Population-level concerns — selection, crossover, replacement — are out
//! of scope; this crate is the building block an evolutionary algorithm
//! calls once per mutated individual per generation.

pub mod mutation;
pub mod partition;
pub mod repair;
pub mod solution;
