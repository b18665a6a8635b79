//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns the population, the random source and the run
//! bookkeeping, and drives the generational loop:
//! evaluate → record → stagnation check → elitism → selection → crossover →
//! mutation → repeat.

use super::config::GaConfig;
use super::error::{ConfigError, EvolutionError, SamplingError};
use super::population::Population;
use super::selection::tournament;
use super::types::{GaProblem, Scored};
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// All `max_generations` generations were evaluated.
    MaxGenerations,
    /// The best fitness stayed unchanged for `early_stop_generations`
    /// consecutive generations.
    EarlyStop,
}

/// Lifecycle of a [`GeneticAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Population built, no generation evaluated yet.
    Initializing,
    /// Inside [`GeneticAlgorithm::run`], or a run aborted with an error.
    Evaluating,
    /// The last run terminated normally.
    Stopped(StopReason),
}

type Generator<'a, P, R> = Box<
    dyn FnMut(&mut R) -> Result<Scored<<P as GaProblem>::Genotype>, <P as GaProblem>::Error> + 'a,
>;

/// Collects everything needed to construct a [`GeneticAlgorithm`].
///
/// Exactly one of [`generator`](Self::generator) or
/// [`initial_population`](Self::initial_population) must be supplied.
///
/// ```ignore
/// let mut ga = GeneticAlgorithm::builder(problem, GaConfig::default().with_seed(7))
///     .generator(|rng| problem_generate(rng))
///     .context(target)
///     .build()?;
/// let best = ga.run()?;
/// ```
pub struct GaBuilder<'a, P: GaProblem, R> {
    problem: P,
    config: GaConfig,
    rng: R,
    generator: Option<Generator<'a, P, R>>,
    initial_population: Option<Vec<Scored<P::Genotype>>>,
    context: Option<P::Context>,
}

impl<'a, P: GaProblem, R: Rng> GaBuilder<'a, P, R> {
    fn new(problem: P, config: GaConfig, rng: R) -> Self {
        Self {
            problem,
            config,
            rng,
            generator: None,
            initial_population: None,
            context: None,
        }
    }

    /// Builds the population by calling `generate` `population_size` times.
    ///
    /// Each call returns a scored individual; its fitness is taken as given.
    pub fn generator<F>(mut self, generate: F) -> Self
    where
        F: FnMut(&mut R) -> Result<Scored<P::Genotype>, P::Error> + 'a,
    {
        self.generator = Some(Box::new(generate));
        self
    }

    /// Adopts `population` verbatim, without re-evaluating fitness.
    pub fn initial_population(mut self, population: Vec<Scored<P::Genotype>>) -> Self {
        self.initial_population = Some(population);
        self
    }

    /// Sets the context value forwarded to fitness, mutate and crossover.
    pub fn context(mut self, context: P::Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Validates the configuration and builds the initial population.
    ///
    /// # Errors
    /// - [`ConfigError::MissingInitialization`] / [`ConfigError::ConflictingInitialization`]
    ///   unless exactly one population source was given
    /// - [`ConfigError::PopulationSizeMismatch`] for a wrongly sized initial population
    /// - [`ConfigError::InvalidParameter`] from [`GaConfig::validate`]
    /// - [`EvolutionError::Problem`] if the generator fails
    pub fn build(self) -> Result<GeneticAlgorithm<P, R>, EvolutionError<P::Error>> {
        let GaBuilder {
            problem,
            config,
            mut rng,
            generator,
            initial_population,
            context,
        } = self;

        let members = match (generator, initial_population) {
            (None, None) => return Err(ConfigError::MissingInitialization.into()),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingInitialization.into()),
            (None, Some(members)) => {
                let population = Population::with_size(members, config.population_size)?;
                config.validate()?;
                population
            }
            (Some(mut generate), None) => {
                config.validate()?;
                let members = (0..config.population_size)
                    .map(|_| generate(&mut rng))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(EvolutionError::Problem)?;
                Population::with_size(members, config.population_size)?
            }
        };

        debug!(
            "initialized population of {} individuals (best fitness {})",
            members.len(),
            members.best().fitness
        );

        Ok(GeneticAlgorithm {
            problem,
            config,
            context,
            rng,
            population: members,
            fitness_history: Vec::new(),
            best: None,
            stagnation_counter: 0,
            generations: 0,
            state: RunState::Initializing,
        })
    }
}

/// A generational genetic algorithm over a [`GaProblem`].
///
/// The engine exclusively owns its population, fitness history, best-ever
/// record and random source `R`. Runs are single-threaded and fully
/// determined by the RNG state, so a seeded engine replays identically.
pub struct GeneticAlgorithm<P: GaProblem, R = StdRng> {
    problem: P,
    config: GaConfig,
    context: Option<P::Context>,
    rng: R,
    population: Population<P::Genotype>,
    fitness_history: Vec<f64>,
    best: Option<Scored<P::Genotype>>,
    stagnation_counter: usize,
    generations: usize,
    state: RunState,
}

impl<P: GaProblem> GeneticAlgorithm<P, StdRng> {
    /// Starts building an engine whose RNG is seeded from `config.seed`
    /// (or OS entropy when unset).
    pub fn builder<'a>(problem: P, config: GaConfig) -> GaBuilder<'a, P, StdRng> {
        let rng = rng_from_seed(config.seed);
        GaBuilder::new(problem, config, rng)
    }
}

impl<P: GaProblem, R: Rng> GeneticAlgorithm<P, R> {
    /// Starts building an engine that draws from the injected `rng`.
    pub fn builder_with_rng<'a>(problem: P, config: GaConfig, rng: R) -> GaBuilder<'a, P, R> {
        GaBuilder::new(problem, config, rng)
    }

    /// Runs generations until `max_generations` or stagnation.
    ///
    /// Returns the best individual seen over the engine's lifetime. History
    /// and the best record carry over if `run` is called again.
    ///
    /// # Errors
    /// Any callback or sampling failure aborts the run and is returned as is.
    pub fn run(&mut self) -> Result<Scored<P::Genotype>, EvolutionError<P::Error>> {
        self.state = RunState::Evaluating;
        let mut stop = StopReason::MaxGenerations;

        for generation in 0..self.config.max_generations {
            let current = self.population.best().clone();
            let best_fitness = current.fitness;
            self.fitness_history.push(best_fitness);
            self.generations += 1;

            if self
                .best
                .as_ref()
                .is_none_or(|best| best_fitness < best.fitness)
            {
                self.best = Some(current);
            }

            info!("Generation {generation}, Best Fitness: {best_fitness}");
            self.problem.on_generation(generation, best_fitness);

            let stagnant = generation > 0
                && match self.fitness_history.as_slice() {
                    [.., previous, last] => self.config.is_stagnant(*previous, *last),
                    _ => false,
                };
            if stagnant {
                self.stagnation_counter += 1;
            } else {
                self.stagnation_counter = 0;
            }

            if self.stagnation_counter >= self.config.early_stop_generations {
                info!(
                    "Early stopping triggered after {generation} generations due to stagnant fitness."
                );
                self.problem.on_early_stop(generation);
                stop = StopReason::EarlyStop;
                break;
            }

            self.evolve()?;
        }

        self.state = RunState::Stopped(stop);
        self.best.clone().ok_or_else(|| {
            ConfigError::InvalidParameter("max_generations must be at least 1".into()).into()
        })
    }

    /// Replaces the population with the next generation, keeping
    /// `config.elite_size` elites.
    pub fn evolve(&mut self) -> Result<(), EvolutionError<P::Error>> {
        self.evolve_with(self.config.elite_size)
    }

    /// Replaces the population with the next generation, keeping
    /// `elite_size` elites.
    ///
    /// On error the current population is left untouched.
    pub fn evolve_with(&mut self, elite_size: usize) -> Result<(), EvolutionError<P::Error>> {
        let next = self.next_generation(elite_size)?;
        self.population = next;
        Ok(())
    }

    /// Builds the next population: elites, then offspring of tournament
    /// winners until `population_size` is reached.
    fn next_generation(
        &mut self,
        elite_size: usize,
    ) -> Result<Population<P::Genotype>, EvolutionError<P::Error>> {
        let size = self.config.population_size;
        let sorted = self.population.sorted_by_fitness();
        let (elites, rest) = sorted.split_at(elite_size.min(sorted.len()));
        let selected = tournament(rest, self.config.tournament_size, None, &mut self.rng)?;

        let context = self.context.as_ref();
        let mut next = Vec::with_capacity(size);
        next.extend_from_slice(elites);

        while next.len() < size {
            let parent1 = choose_parent(&selected, &mut self.rng)?;
            let parent2 = choose_parent(&selected, &mut self.rng)?;

            let (child1, child2) = self
                .problem
                .crossover(&parent1.genotype, &parent2.genotype, context, &mut self.rng)
                .map_err(EvolutionError::Problem)?;
            let child1 = self
                .problem
                .mutate(&child1, context, &mut self.rng)
                .map_err(EvolutionError::Problem)?;
            let child2 = self
                .problem
                .mutate(&child2, context, &mut self.rng)
                .map_err(EvolutionError::Problem)?;

            let fitness = self
                .problem
                .fitness(&child1, context)
                .map_err(EvolutionError::Problem)?;
            next.push(Scored::new(child1, fitness));

            // The second child is dropped unevaluated when only one slot is left.
            if next.len() < size {
                let fitness = self
                    .problem
                    .fitness(&child2, context)
                    .map_err(EvolutionError::Problem)?;
                next.push(Scored::new(child2, fitness));
            }
        }

        Ok(Population::with_size(next, size)?)
    }

    /// Current population.
    pub fn population(&self) -> &Population<P::Genotype> {
        &self.population
    }

    /// Best fitness of every evaluated generation, oldest first.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Best individual seen so far, if any generation was evaluated.
    pub fn best(&self) -> Option<&Scored<P::Genotype>> {
        self.best.as_ref()
    }

    /// Consecutive stagnant generations at the last evaluated generation.
    pub fn stagnation_counter(&self) -> usize {
        self.stagnation_counter
    }

    /// Total generations evaluated over the engine's lifetime.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The context value, if one was supplied.
    pub fn context(&self) -> Option<&P::Context> {
        self.context.as_ref()
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

/// Picks a parent uniformly, with replacement.
fn choose_parent<'s, G, R: Rng>(
    selected: &'s [Scored<G>],
    rng: &mut R,
) -> Result<&'s Scored<G>, SamplingError> {
    selected.choose(rng).ok_or(SamplingError {
        tournament_size: 1,
        available: 0,
    })
}

// ============================================================================
// Tests
// ============================================================================
