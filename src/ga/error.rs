//! Error types for the GA engine.
//!
//! Three failure families exist:
//!
//! - [`ConfigError`]: construction could not complete.
//! - [`SamplingError`]: a tournament could not be drawn.
//! - [`EvolutionError::Problem`]: a problem callback failed; the callback's
//!   own error is carried through untouched.

use thiserror::Error;

/// Invalid engine construction or configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Neither a generator nor an initial population was supplied.
    #[error("either a generator or an initial population must be provided")]
    MissingInitialization,

    /// Both a generator and an initial population were supplied.
    #[error("only one of a generator or an initial population can be provided")]
    ConflictingInitialization,

    /// The initial population does not have `population_size` members.
    #[error("initial population has {actual} individuals, expected population_size = {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    /// A numeric parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidParameter(String),
}

/// A tournament asked for more contenders than the pool holds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot draw a tournament of {tournament_size} from {available} individuals")]
pub struct SamplingError {
    /// Requested number of contenders.
    pub tournament_size: usize,
    /// Size of the pool the contenders were drawn from.
    pub available: usize,
}

/// Any failure that aborts construction, a generation, or a run.
///
/// `E` is the problem's callback error type.
#[derive(Debug, Error)]
pub enum EvolutionError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// A generate, fitness, mutate or crossover callback failed.
    #[error(transparent)]
    Problem(E),
}

impl<E> EvolutionError<E> {
    /// Returns the callback error, if this is one.
    pub fn problem(&self) -> Option<&E> {
        match self {
            EvolutionError::Problem(e) => Some(e),
            _ => None,
        }
    }
}
