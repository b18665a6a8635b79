//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic generational GA. Users define their problem
//! by implementing [`GaProblem`], which specifies how to evaluate, mutate and
//! recombine genotypes; the engine supplies tournament selection, elitism and
//! stagnation-based early stopping.
//!
//! # Core Types
//!
//! - [`Scored`]: A genotype paired with its fitness (lower is better)
//! - [`GaProblem`]: Problem definition: evaluation and operators
//! - [`Population`]: Fixed-size collection, replaced wholesale each generation
//!
//! # Running
//!
//! - [`GaConfig`]: Algorithm parameters (population size, tournament, elites, stopping)
//! - [`GeneticAlgorithm`]: Owns the population and RNG, runs the evolutionary loop
//! - [`GaBuilder`]: Validates construction (generator or initial population)
//!
//! # Submodules
//!
//! - [`operators`]: Generic sequence crossover and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod error;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::{ConfigError, EvolutionError, SamplingError};
pub use population::Population;
pub use runner::{GaBuilder, GeneticAlgorithm, RunState, StopReason};
pub use selection::{tournament, DEFAULT_TOURNAMENT_SIZE};
pub use types::{fittest, GaProblem, Scored};
