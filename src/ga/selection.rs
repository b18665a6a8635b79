//! Tournament selection.
//!
//! Each tournament draws `k` distinct contenders uniformly at random and
//! keeps the fittest. Tournaments are independent of one another, so one
//! individual may win several of them.
//!
//! Higher `k` means stronger selection pressure:
//! - k=1: no pressure, uniform sampling with replacement
//! - k=3-5: moderate pressure (typical default)
//! - k=|pool|: every tournament returns the pool's best
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::error::SamplingError;
use super::types::Scored;
use rand::seq::index;
use rand::Rng;
use std::cmp::Ordering;

/// Default number of contenders per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Runs `num_to_select` tournaments of `tournament_size` contenders over
/// `population`.
///
/// `num_to_select` defaults to `population.len()`. Winners are returned in
/// draw order with their fitness carried through. Within a tournament, ties
/// go to the contender drawn first.
///
/// # Errors
/// Returns [`SamplingError`] when a tournament cannot be drawn: the size is
/// zero or exceeds the pool. Asking for zero winners never fails.
///
/// # Complexity
/// O(n·k)
pub fn tournament<G: Clone, R: Rng>(
    population: &[Scored<G>],
    tournament_size: usize,
    num_to_select: Option<usize>,
    rng: &mut R,
) -> Result<Vec<Scored<G>>, SamplingError> {
    let num_to_select = num_to_select.unwrap_or(population.len());
    if num_to_select == 0 {
        return Ok(Vec::new());
    }
    if tournament_size == 0 || tournament_size > population.len() {
        return Err(SamplingError {
            tournament_size,
            available: population.len(),
        });
    }

    let mut selected = Vec::with_capacity(num_to_select);
    for _ in 0..num_to_select {
        let winner = tournament_winner(population, tournament_size, rng);
        selected.push(population[winner].clone());
    }
    Ok(selected)
}

/// Draws one tournament and returns the winner's index.
///
/// Caller guarantees `1 <= k <= population.len()`.
fn tournament_winner<G, R: Rng>(population: &[Scored<G>], k: usize, rng: &mut R) -> usize {
    // `index::sample` returns the indices in random order.
    let contenders = index::sample(rng, population.len(), k);
    let mut best = contenders.index(0);
    for idx in contenders.iter().skip(1) {
        if population[idx].cmp_fitness(&population[best]) == Ordering::Less {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn make_population(fitnesses: &[f64]) -> Vec<Scored<usize>> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Scored::new(i, f))
            .collect()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        // Without replacement, k = |pool| sees every member.
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let selected = tournament(&pop, 4, Some(500), &mut rng).unwrap();
        assert!(selected.iter().all(|s| s.genotype == 2));
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0, 7.0, 6.0]);
        let mut rng = create_rng(42);

        let selected = tournament(&pop, 3, Some(10_000), &mut rng).unwrap();
        let best_count = selected.iter().filter(|s| s.genotype == 2).count();
        // P(best in a 3-of-6 draw) = 0.5
        assert!(
            best_count > 4500,
            "expected best to win about half the tournaments, got {best_count}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let selected = tournament(&pop, 1, Some(10_000), &mut rng).unwrap();
        let mut counts = [0u32; 4];
        for s in &selected {
            counts[s.genotype] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tie_goes_to_first_drawn() {
        // All tied: the winner is the first contender, so with k = |pool| the
        // winners spread across the pool instead of collapsing on index 0.
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(7);

        let selected = tournament(&pop, 4, Some(4000), &mut rng).unwrap();
        let mut counts = [0u32; 4];
        for s in &selected {
            counts[s.genotype] += 1;
        }
        for &c in &counts {
            assert!(c > 700, "expected roughly uniform ties, got {counts:?}");
        }
    }

    #[test]
    fn test_fitness_carried_through() {
        let pop = make_population(&[3.5, 1.25, 2.0]);
        let mut rng = create_rng(1);

        for s in tournament(&pop, 2, None, &mut rng).unwrap() {
            assert_eq!(s.fitness, pop[s.genotype].fitness);
        }
    }

    #[test]
    fn test_default_count_is_pool_size() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut rng = create_rng(3);
        assert_eq!(tournament(&pop, 5, None, &mut rng).unwrap().len(), 6);
    }

    #[test]
    fn test_oversized_tournament_fails() {
        let pop = make_population(&[1.0, 2.0, 3.0]);
        let mut rng = create_rng(42);

        let err = tournament(&pop, 5, None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SamplingError {
                tournament_size: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_zero_size_tournament_fails() {
        let pop = make_population(&[1.0]);
        let mut rng = create_rng(42);
        assert!(tournament(&pop, 0, Some(1), &mut rng).is_err());
    }

    #[test]
    fn test_empty_request_never_samples() {
        let pop: Vec<Scored<usize>> = vec![];
        let mut rng = create_rng(42);
        assert!(tournament(&pop, 5, None, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_same_seed_same_winners() {
        let pop = make_population(&[9.0, 3.0, 4.0, 1.0, 7.0, 2.0, 8.0]);
        let a = tournament(&pop, 3, Some(50), &mut create_rng(11)).unwrap();
        let b = tournament(&pop, 3, Some(50), &mut create_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_output_size_and_membership(
            fitnesses in prop::collection::vec(-100.0f64..100.0, 1..40),
            k_seed in 0usize..1000,
            n in 0usize..60,
            seed in any::<u64>(),
        ) {
            let pop = make_population(&fitnesses);
            let k = 1 + k_seed % pop.len();
            let mut rng = create_rng(seed);

            let selected = tournament(&pop, k, Some(n), &mut rng).unwrap();
            prop_assert_eq!(selected.len(), n);
            for s in &selected {
                prop_assert_eq!(s.fitness, pop[s.genotype].fitness);
            }
        }

        #[test]
        fn prop_full_tournament_returns_minimum(
            fitnesses in prop::collection::vec(0.0f64..1000.0, 2..30),
            seed in any::<u64>(),
        ) {
            let pop = make_population(&fitnesses);
            let k = pop.len();
            let mut rng = create_rng(seed);

            let selected = tournament(&pop, k, Some(5), &mut rng).unwrap();
            let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
            for s in &selected {
                prop_assert_eq!(s.fitness, min);
            }
        }
    }
}
