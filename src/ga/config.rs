//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::ConfigError;
use super::selection::DEFAULT_TOURNAMENT_SIZE;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, selection pressure, elitism and termination.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.early_stop_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(3)
///     .with_elite_size(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Holds at construction and after every generation.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of consecutive generations with an unchanged best fitness
    /// before stopping.
    ///
    /// The check runs after each generation is recorded, so 0 stops after
    /// the first generation. A value of `max_generations` or more never
    /// triggers.
    pub early_stop_generations: usize,

    /// Contenders per tournament.
    ///
    /// Must not exceed the non-elite pool (`population_size - elite_size`),
    /// otherwise the first generation fails with a sampling error.
    pub tournament_size: usize,

    /// Best individuals copied unchanged into the next generation.
    pub elite_size: usize,

    /// Absolute tolerance under which two consecutive best fitness values
    /// count as unchanged.
    ///
    /// The default 0.0 requires bit-exact equality.
    pub stagnation_tolerance: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Ignored when an RNG is injected.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            max_generations: 1000,
            early_stop_generations: 100,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elite_size: 1,
            stagnation_tolerance: 0.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation threshold.
    pub fn with_early_stop_generations(mut self, n: usize) -> Self {
        self.early_stop_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the stagnation tolerance.
    pub fn with_stagnation_tolerance(mut self, tolerance: f64) -> Self {
        self.stagnation_tolerance = tolerance;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether two consecutive best fitness values count as unchanged.
    pub(crate) fn is_stagnant(&self, previous: f64, current: f64) -> bool {
        previous == current
            || (self.stagnation_tolerance > 0.0
                && (current - previous).abs() <= self.stagnation_tolerance)
    }

    /// Validates the configuration.
    ///
    /// A tournament larger than the non-elite pool is not rejected here; it
    /// surfaces as a sampling error when the first generation is evolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.elite_size > self.population_size {
            return Err(invalid("elite_size must not exceed population_size"));
        }
        if !self.stagnation_tolerance.is_finite() || self.stagnation_tolerance < 0.0 {
            return Err(invalid(
                "stagnation_tolerance must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::InvalidParameter(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 1000);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.early_stop_generations, 100);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.elite_size, 1);
        assert_eq!(config.stagnation_tolerance, 0.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(100)
            .with_early_stop_generations(10)
            .with_tournament_size(3)
            .with_elite_size(2)
            .with_stagnation_tolerance(1e-9)
            .with_seed(42);

        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.early_stop_generations, 10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.elite_size, 2);
        assert_eq!(config.stagnation_tolerance, 1e-9);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_bounds() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_size(10);
        assert!(config.validate().is_ok());

        let config = config.with_elite_size(11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tolerance() {
        assert!(GaConfig::default()
            .with_stagnation_tolerance(-1.0)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_stagnation_tolerance(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_oversized_tournament_is_not_a_config_error() {
        let config = GaConfig::default()
            .with_population_size(3)
            .with_tournament_size(5);
        assert!(config.validate().is_ok());
    }

    // ---- Stagnation comparison ----

    #[test]
    fn test_exact_stagnation_by_default() {
        let config = GaConfig::default();
        assert!(config.is_stagnant(2.0, 2.0));
        assert!(!config.is_stagnant(0.1 + 0.2, 0.3));
    }

    #[test]
    fn test_tolerant_stagnation() {
        let config = GaConfig::default().with_stagnation_tolerance(1e-9);
        assert!(config.is_stagnant(0.1 + 0.2, 0.3));
        assert!(!config.is_stagnant(1.0, 1.1));
    }
}
