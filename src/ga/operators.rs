//! Generic sequence operators.
//!
//! Crossover and mutation operators for genotypes encoded as sequences of
//! symbols drawn from an alphabet. They work on `&[T]` and return new
//! vectors, so any string-like or vector-like representation can use them.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: Splice two parents at one random cut (O(n))
//!
//! # Mutation Operators
//!
//! - [`substitution_mutation`]: Replace one random position (O(n))
//! - [`per_gene_mutation`]: Replace each position independently with probability p (O(n))
//! - [`insertion_mutation`]: Insert a random symbol at a random position (O(n))
//! - [`deletion_mutation`]: Remove one random position (O(n))
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::seq::IndexedRandom;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point `p` in `1..len` and returns
/// `(parent1[..p] ++ parent2[p..], parent2[..p] ++ parent1[p..])`.
/// Both children therefore differ from their first parent whenever the
/// parents differ on both sides of the cut.
///
/// Parents shorter than two symbols cannot be cut and are returned
/// unchanged. Parents of unequal length are cut within the shorter one.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len().min(parent2.len());
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let point = rng.random_range(1..n);
    (splice(parent1, parent2, point), splice(parent2, parent1, point))
}

/// `head[..point]` followed by `tail[point..]`.
fn splice<T: Clone>(head: &[T], tail: &[T], point: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(tail.len());
    child.extend_from_slice(&head[..point]);
    child.extend_from_slice(&tail[point..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Replaces the symbol at one random position with a random alphabet symbol.
///
/// The new symbol may equal the old one. Empty genes or an empty alphabet
/// yield an unchanged copy.
pub fn substitution_mutation<T: Clone, R: Rng>(genes: &[T], alphabet: &[T], rng: &mut R) -> Vec<T> {
    let mut child = genes.to_vec();
    if child.is_empty() {
        return child;
    }
    let pos = rng.random_range(0..child.len());
    if let Some(symbol) = alphabet.choose(rng) {
        child[pos] = symbol.clone();
    }
    child
}

/// Replaces each position independently with probability `rate`.
pub fn per_gene_mutation<T: Clone, R: Rng>(
    genes: &[T],
    alphabet: &[T],
    rate: f64,
    rng: &mut R,
) -> Vec<T> {
    let rate = clamp_probability(rate);
    genes
        .iter()
        .map(|gene| {
            if rng.random_bool(rate) {
                alphabet.choose(rng).cloned().unwrap_or_else(|| gene.clone())
            } else {
                gene.clone()
            }
        })
        .collect()
}

/// Inserts a random alphabet symbol at a random position in `0..=len`.
pub fn insertion_mutation<T: Clone, R: Rng>(genes: &[T], alphabet: &[T], rng: &mut R) -> Vec<T> {
    let mut child = genes.to_vec();
    let pos = rng.random_range(0..=child.len());
    if let Some(symbol) = alphabet.choose(rng) {
        child.insert(pos, symbol.clone());
    }
    child
}

/// Removes the symbol at one random position.
///
/// Empty genes yield an empty copy.
pub fn deletion_mutation<T: Clone, R: Rng>(genes: &[T], rng: &mut R) -> Vec<T> {
    let mut child = genes.to_vec();
    if !child.is_empty() {
        let pos = rng.random_range(0..child.len());
        child.remove(pos);
    }
    child
}

/// Clamps `p` into `[0, 1]`, mapping NaN to 0.
///
/// Keeps `Rng::random_bool` from panicking on out-of-range rates.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    const AB: [char; 2] = ['A', 'B'];

    fn diff_count(a: &[char], b: &[char]) -> usize {
        a.iter().zip(b).filter(|(x, y)| x != y).count()
    }

    // ---- Single-point crossover ----

    #[test]
    fn test_crossover_splices() {
        let mut rng = create_rng(42);
        let p1 = vec!['A'; 5];
        let p2 = vec!['B'; 5];

        for _ in 0..100 {
            let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 5);
            assert_eq!(c2.len(), 5);
            assert_ne!(c1, p1, "child1 should differ from parent1");
            assert_ne!(c2, p2, "child2 should differ from parent2");

            // A-prefix then B-suffix, mirrored in the sibling.
            let cut = c1.iter().position(|&c| c == 'B').unwrap();
            assert!(c1[..cut].iter().all(|&c| c == 'A'));
            assert!(c1[cut..].iter().all(|&c| c == 'B'));
            assert!(c2[..cut].iter().all(|&c| c == 'B'));
            assert!(c2[cut..].iter().all(|&c| c == 'A'));
        }
    }

    #[test]
    fn test_crossover_short_parents_unchanged() {
        let mut rng = create_rng(42);
        let (c1, c2) = single_point_crossover(&['A'], &['B'], &mut rng);
        assert_eq!(c1, vec!['A']);
        assert_eq!(c2, vec!['B']);

        let (c1, c2) = single_point_crossover::<char, _>(&[], &[], &mut rng);
        assert!(c1.is_empty() && c2.is_empty());
    }

    #[test]
    fn test_crossover_unequal_lengths_keep_tails() {
        let mut rng = create_rng(5);
        let p1 = vec!['A'; 3];
        let p2 = vec!['B'; 6];
        let (c1, c2) = single_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1.len(), 6);
        assert_eq!(c2.len(), 3);
    }

    // ---- Mutations ----

    #[test]
    fn test_clamp_probability() {
        assert_eq!(clamp_probability(0.25), 0.25);
        assert_eq!(clamp_probability(-0.5), 0.0);
        assert_eq!(clamp_probability(3.0), 1.0);
        assert_eq!(clamp_probability(f64::NAN), 0.0);
        assert_eq!(clamp_probability(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_substitution_changes_at_most_one() {
        let mut rng = create_rng(42);
        let genes: Vec<char> = "HELLO".chars().collect();
        let alphabet: Vec<char> = ('A'..='Z').collect();

        for _ in 0..200 {
            let child = substitution_mutation(&genes, &alphabet, &mut rng);
            assert_eq!(child.len(), genes.len());
            assert!(diff_count(&genes, &child) <= 1);
        }
    }

    #[test]
    fn test_substitution_eventually_changes() {
        let mut rng = create_rng(42);
        let genes = vec!['A'; 4];
        let changed = (0..50).any(|_| substitution_mutation(&genes, &AB, &mut rng) != genes);
        assert!(changed);
    }

    #[test]
    fn test_substitution_empty() {
        let mut rng = create_rng(42);
        assert!(substitution_mutation::<char, _>(&[], &AB, &mut rng).is_empty());
    }

    #[test]
    fn test_per_gene_rate_bounds() {
        let mut rng = create_rng(42);
        let genes = vec!['A'; 20];

        assert_eq!(per_gene_mutation(&genes, &['B'], 0.0, &mut rng), genes);
        assert_eq!(per_gene_mutation(&genes, &['B'], 1.0, &mut rng), vec!['B'; 20]);
    }

    #[test]
    fn test_insertion_and_deletion_lengths() {
        let mut rng = create_rng(42);
        let genes = vec!['A'; 3];

        let grown = insertion_mutation(&genes, &['B'], &mut rng);
        assert_eq!(grown.len(), 4);
        assert_eq!(grown.iter().filter(|&&c| c == 'B').count(), 1);

        let shrunk = deletion_mutation(&genes, &mut rng);
        assert_eq!(shrunk.len(), 2);

        assert!(deletion_mutation::<char, _>(&[], &mut rng).is_empty());
    }
}
