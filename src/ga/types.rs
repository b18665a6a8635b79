//! Core type definitions for the GA engine.
//!
//! [`Scored`] pairs a genotype with its fitness, and [`GaProblem`] is the
//! contract between the generic engine and a domain-specific problem.

use rand::Rng;
use std::cmp::Ordering;

/// A genotype together with its fitness.
///
/// Lower fitness is better (minimization). The engine never re-evaluates a
/// `Scored` value it already holds: elites and tournament winners carry their
/// fitness through unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored<G> {
    /// The candidate solution.
    pub genotype: G,
    /// Its fitness; lower is better.
    pub fitness: f64,
}

impl<G> Scored<G> {
    /// Pairs a genotype with an already-computed fitness.
    pub fn new(genotype: G, fitness: f64) -> Self {
        Self { genotype, fitness }
    }

    /// Total order on fitness, ascending (`f64::total_cmp`, so a positive NaN
    /// sorts after every number).
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness.total_cmp(&other.fitness)
    }
}

/// Returns the minimum-fitness member, the earliest one on ties.
///
/// Returns `None` for an empty slice.
pub fn fittest<G>(individuals: &[Scored<G>]) -> Option<&Scored<G>> {
    individuals.iter().reduce(|best, candidate| {
        if candidate.cmp_fitness(best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

/// Defines a GA optimization problem.
///
/// Implementors supply the three evolutionary callbacks. Each receives the
/// engine's context value (`None` when the engine was built without one) and
/// returns new values rather than mutating its inputs.
///
/// Randomised callbacks draw from the `rng` they are handed, which is the
/// engine's own generator; a seeded engine therefore replays identically.
///
/// # Implementing
///
/// ```ignore
/// struct Sphere;
///
/// impl GaProblem for Sphere {
///     type Genotype = Vec<f64>;
///     type Context = ();
///     type Error = std::convert::Infallible;
///
///     fn fitness(&self, g: &Vec<f64>, _: Option<&()>) -> Result<f64, Self::Error> {
///         Ok(g.iter().map(|x| x * x).sum())
///     }
///     // mutate, crossover ...
/// }
/// ```
pub trait GaProblem {
    /// The candidate-solution representation.
    type Genotype: Clone;

    /// Opaque value forwarded to every callback.
    type Context;

    /// Failure raised by a callback. Propagated to the caller unchanged.
    type Error: std::error::Error + 'static;

    /// Computes the fitness of a genotype. Lower is better.
    fn fitness(
        &self,
        genotype: &Self::Genotype,
        context: Option<&Self::Context>,
    ) -> Result<f64, Self::Error>;

    /// Returns a possibly-altered copy of `genotype`.
    fn mutate<R: Rng>(
        &self,
        genotype: &Self::Genotype,
        context: Option<&Self::Context>,
        rng: &mut R,
    ) -> Result<Self::Genotype, Self::Error>;

    /// Recombines two parents into two children.
    ///
    /// Returning clones of the parents is a valid no-op crossover.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genotype,
        parent2: &Self::Genotype,
        context: Option<&Self::Context>,
        rng: &mut R,
    ) -> Result<(Self::Genotype, Self::Genotype), Self::Error>;

    /// Called once per evaluated generation with its best fitness.
    ///
    /// Purely observational. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}

    /// Called when the run stops because fitness stagnated.
    ///
    /// The default implementation is a no-op.
    fn on_early_stop(&self, _generation: usize) {}
}
