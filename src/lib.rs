//! Generic generational genetic algorithm.
//!
//! Evolves a fixed-size population of caller-defined genotypes toward lower
//! fitness:
//!
//! - **Genetic Algorithm (GA)**: tournament selection, elitism, pluggable
//!   crossover and mutation through the [`ga::GaProblem`] trait, and
//!   stagnation-based early stopping.
//! - **Problems**: ready-made string-matching problems that exercise the
//!   engine end to end.
//! - **Plot**: SVG rendering of a run's fitness history.
//!
//! # Architecture
//!
//! The engine owns its population, fitness history and random source. It
//! never inspects genotypes; everything problem-specific flows through the
//! caller's callbacks together with an opaque context value. Runs are
//! single-threaded and reproducible from a seed.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{GaConfig, GeneticAlgorithm};
//! use u_evolve::problems::strings::FixedLengthMatch;
//!
//! let problem = FixedLengthMatch::uppercase(5);
//! let generator = problem.clone();
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(200)
//!     .with_seed(42);
//!
//! let mut ga = GeneticAlgorithm::builder(problem, config)
//!     .generator(move |rng| Ok(generator.generate("HELLO", rng)))
//!     .context("HELLO".to_string())
//!     .build()
//!     .unwrap();
//!
//! let best = ga.run().unwrap();
//! assert!(best.fitness <= ga.fitness_history()[0]);
//! ```

pub mod ga;
pub mod plot;
pub mod problems;
pub mod random;
