//! String matching problems.
//!
//! Both problems evolve a `String` toward a target string, which is passed
//! to every callback as the engine's context value. Fitness counts how far a
//! candidate is from the target, so a perfect match scores 0.
//!
//! - [`FixedLengthMatch`]: candidates have the target's length; fitness is
//!   the number of mismatching positions.
//! - [`VariableLengthMatch`]: candidates grow and shrink; fitness adds the
//!   length difference to the mismatch count.

use crate::ga::operators::{
    clamp_probability, deletion_mutation, insertion_mutation, per_gene_mutation,
    single_point_crossover, substitution_mutation,
};
use crate::ga::{GaProblem, Scored};
use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

/// Uppercase Latin letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters plus the punctuation needed for "Hello, World!".
pub const GREETING_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ, !";

/// Failure of a string-matching callback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StringMatchError {
    /// The engine was built without a target string.
    #[error("target must be provided")]
    MissingTarget,
}

/// Number of positions where `a` and `b` differ, over their common prefix.
fn mismatches(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

fn random_string<R: Rng>(charset: &[char], length: usize, rng: &mut R) -> String {
    (0..length)
        .filter_map(|_| charset.choose(rng).copied())
        .collect()
}

// ============================================================================
// Fixed-length matching
// ============================================================================

/// Fixed-length string matching.
///
/// - fitness: mismatching positions against the target
/// - mutation: one random position replaced by a random alphabet letter
/// - crossover: single-point splice
#[derive(Debug, Clone)]
pub struct FixedLengthMatch {
    alphabet: Vec<char>,
    length: usize,
}

impl FixedLengthMatch {
    /// Candidates of `length` symbols drawn from `alphabet`.
    pub fn new(alphabet: &str, length: usize) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
            length,
        }
    }

    /// Candidates of `length` uppercase letters.
    pub fn uppercase(length: usize) -> Self {
        Self::new(UPPERCASE, length)
    }

    /// Candidate length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Draws a uniform random candidate and scores it against `target`.
    pub fn generate<R: Rng>(&self, target: &str, rng: &mut R) -> Scored<String> {
        let genotype = random_string(&self.alphabet, self.length, rng);
        let fitness = mismatches(&genotype, target) as f64;
        Scored::new(genotype, fitness)
    }
}

impl GaProblem for FixedLengthMatch {
    type Genotype = String;
    type Context = String;
    type Error = StringMatchError;

    fn fitness(&self, genotype: &String, target: Option<&String>) -> Result<f64, StringMatchError> {
        let target = target.ok_or(StringMatchError::MissingTarget)?;
        Ok(mismatches(genotype, target) as f64)
    }

    fn mutate<R: Rng>(
        &self,
        genotype: &String,
        _target: Option<&String>,
        rng: &mut R,
    ) -> Result<String, StringMatchError> {
        let chars: Vec<char> = genotype.chars().collect();
        Ok(substitution_mutation(&chars, &self.alphabet, rng)
            .into_iter()
            .collect())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &String,
        parent2: &String,
        _target: Option<&String>,
        rng: &mut R,
    ) -> Result<(String, String), StringMatchError> {
        let a: Vec<char> = parent1.chars().collect();
        let b: Vec<char> = parent2.chars().collect();
        let (c1, c2) = single_point_crossover(&a, &b, rng);
        Ok((c1.into_iter().collect(), c2.into_iter().collect()))
    }
}

// ============================================================================
// Variable-length matching
// ============================================================================

/// Variable-length string matching.
///
/// - fitness: `|len(target) - len(candidate)|` plus mismatches over the
///   common prefix
/// - mutation: optional insertion and deletion (only when the target is
///   known), then independent per-character replacement
/// - crossover: identity
#[derive(Debug, Clone)]
pub struct VariableLengthMatch {
    charset: Vec<char>,
    /// Probability of inserting one character.
    pub add_char_prob: f64,
    /// Probability of removing one character.
    pub remove_char_prob: f64,
    /// Per-character replacement probability.
    pub mutate_char_prob: f64,
}

impl Default for VariableLengthMatch {
    fn default() -> Self {
        Self::new(GREETING_CHARSET)
    }
}

impl VariableLengthMatch {
    /// Candidates over `charset` with the default operator rates
    /// (insert 0.02, remove 0.02, replace 0.1).
    pub fn new(charset: &str) -> Self {
        Self {
            charset: charset.chars().collect(),
            add_char_prob: 0.02,
            remove_char_prob: 0.02,
            mutate_char_prob: 0.1,
        }
    }

    /// Draws a random candidate of length `1..=2·len(target)` and scores it.
    pub fn generate<R: Rng>(&self, target: &str, rng: &mut R) -> Scored<String> {
        let max_len = (2 * target.chars().count()).max(1);
        let length = rng.random_range(1..=max_len);
        let genotype = random_string(&self.charset, length, rng);
        let fitness = distance(&genotype, target) as f64;
        Scored::new(genotype, fitness)
    }
}

fn distance(candidate: &str, target: &str) -> usize {
    target.chars().count().abs_diff(candidate.chars().count()) + mismatches(target, candidate)
}

impl GaProblem for VariableLengthMatch {
    type Genotype = String;
    type Context = String;
    type Error = StringMatchError;

    fn fitness(&self, genotype: &String, target: Option<&String>) -> Result<f64, StringMatchError> {
        let target = target.ok_or(StringMatchError::MissingTarget)?;
        Ok(distance(genotype, target) as f64)
    }

    fn mutate<R: Rng>(
        &self,
        genotype: &String,
        target: Option<&String>,
        rng: &mut R,
    ) -> Result<String, StringMatchError> {
        let mut chars: Vec<char> = genotype.chars().collect();

        if let Some(target) = target {
            let max_len = 2 * target.chars().count();
            if rng.random_bool(clamp_probability(self.add_char_prob)) && chars.len() < max_len {
                chars = insertion_mutation(&chars, &self.charset, rng);
            }
            if rng.random_bool(clamp_probability(self.remove_char_prob)) && chars.len() > 1 {
                chars = deletion_mutation(&chars, rng);
            }
        }

        Ok(per_gene_mutation(&chars, &self.charset, self.mutate_char_prob, rng)
            .into_iter()
            .collect())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &String,
        parent2: &String,
        _target: Option<&String>,
        _rng: &mut R,
    ) -> Result<(String, String), StringMatchError> {
        Ok((parent1.clone(), parent2.clone()))
    }
}
