//! Fixed-size population.

use super::error::ConfigError;
use super::types::{fittest, Scored};

/// An ordered collection of scored individuals with a fixed length.
///
/// A `Population` is never patched in place: each generation builds a new
/// value and swaps it in whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<G> {
    members: Vec<Scored<G>>,
}

impl<G: Clone> Population<G> {
    /// Adopts `members` verbatim if it holds exactly `size` individuals.
    pub fn with_size(members: Vec<Scored<G>>, size: usize) -> Result<Self, ConfigError> {
        if members.len() != size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: size,
                actual: members.len(),
            });
        }
        Ok(Self { members })
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Read-only view of the members, in population order.
    pub fn as_slice(&self) -> &[Scored<G>] {
        &self.members
    }

    /// Iterates over the members in population order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scored<G>> {
        self.members.iter()
    }

    /// The minimum-fitness member, earliest on ties.
    ///
    /// # Panics
    /// Panics if the population is empty, which validated configuration rules
    /// out.
    pub fn best(&self) -> &Scored<G> {
        fittest(&self.members).expect("population must not be empty")
    }

    /// Members sorted ascending by fitness; equal fitness keeps population
    /// order.
    pub fn sorted_by_fitness(&self) -> Vec<Scored<G>> {
        let mut sorted = self.members.clone();
        sorted.sort_by(|a, b| a.cmp_fitness(b));
        sorted
    }

    /// Consumes the population, returning its members.
    pub fn into_vec(self) -> Vec<Scored<G>> {
        self.members
    }
}

impl<'a, G> IntoIterator for &'a Population<G> {
    type Item = &'a Scored<G>;
    type IntoIter = std::slice::Iter<'a, Scored<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
