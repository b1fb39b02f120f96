//! Run configuration for the pricing entry points.

use crate::error::SimulationError;
use crate::statistics::DEFAULT_CONFIDENCE_MULTIPLIER;

/// Hard cap on the number of paths a single run may request.
///
/// The cap bounds worst-case run time for a single pricing call.
pub const MAX_PATHS: u64 = 10_000_000;

const DEFAULT_PATH_COUNT: u64 = 100_000;
const DEFAULT_SEED: u64 = 42;

/// Validated configuration for one simulation run.
///
/// Instances are built through [`SimulationConfig::builder`], which
/// rejects invalid settings at construction so the pricing entry
/// points never see a malformed configuration. [`Default`] yields
/// 100,000 plain paths with seed 42 and a 95% confidence interval.
///
/// A seed of zero is legal here; the generator coerces it to one.
/// Seed randomization is a front-end concern and happens before the
/// configuration is built.
///
/// # Examples
///
/// ```
/// use mc_engine::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .path_count(50_000)
///     .seed(7)
///     .antithetic(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.path_count(), 50_000);
/// assert!(config.antithetic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    path_count: u64,
    seed: u64,
    antithetic: bool,
    confidence_multiplier: f64,
}

impl SimulationConfig {
    /// Starts a builder with default settings.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    /// Returns the number of paths to simulate.
    #[inline]
    pub fn path_count(&self) -> u64 {
        self.path_count
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether antithetic sampling is enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the confidence interval multiplier.
    #[inline]
    pub fn confidence_multiplier(&self) -> f64 {
        self.confidence_multiplier
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            path_count: DEFAULT_PATH_COUNT,
            seed: DEFAULT_SEED,
            antithetic: false,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
        }
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder {
    path_count: u64,
    seed: u64,
    antithetic: bool,
    confidence_multiplier: f64,
}

impl SimulationConfigBuilder {
    /// Starts from the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of paths to simulate.
    pub fn path_count(mut self, path_count: u64) -> Self {
        self.path_count = path_count;
        self
    }

    /// Sets the generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables antithetic sampling.
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the confidence interval multiplier.
    pub fn confidence_multiplier(mut self, multiplier: f64) -> Self {
        self.confidence_multiplier = multiplier;
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidPathCount`] when the path count is zero
    /// - [`SimulationError::PathCountExceedsCap`] when it exceeds [`MAX_PATHS`]
    /// - [`SimulationError::InvalidConfidenceLevel`] when the multiplier
    ///   is not finite and strictly positive
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        if self.path_count == 0 {
            return Err(SimulationError::InvalidPathCount {
                path_count: self.path_count,
            });
        }
        if self.path_count > MAX_PATHS {
            return Err(SimulationError::PathCountExceedsCap {
                path_count: self.path_count,
                max: MAX_PATHS,
            });
        }
        if !self.confidence_multiplier.is_finite() || self.confidence_multiplier <= 0.0 {
            return Err(SimulationError::InvalidConfidenceLevel {
                z: self.confidence_multiplier,
            });
        }
        Ok(SimulationConfig {
            path_count: self.path_count,
            seed: self.seed,
            antithetic: self.antithetic,
            confidence_multiplier: self.confidence_multiplier,
        })
    }
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            path_count: DEFAULT_PATH_COUNT,
            seed: DEFAULT_SEED,
            antithetic: false,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
        }
    }
}
