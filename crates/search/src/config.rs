use thiserror::Error;

/// Configuration for the spring-pack search.
///
/// Lengths are in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_tuples: usize,
    min_spring_gap: f64,
    radius_margin: f64,
    ring_allowance: f64,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_tuples must be at least 1")]
    MaxTuples,

    #[error("min_spring_gap must be finite and non-negative")]
    SpringGap,

    #[error("radius_margin must be finite and non-negative")]
    RadiusMargin,

    #[error("ring_allowance must be finite and non-negative")]
    RingAllowance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tuples: 12_000,
            min_spring_gap: 0.5,
            radius_margin: 0.5,
            ring_allowance: 10.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_tuples` is zero or any length is negative or
    /// non-finite.
    pub fn new(
        max_tuples: usize,
        min_spring_gap: f64,
        radius_margin: f64,
        ring_allowance: f64,
    ) -> Result<Self, ConfigError> {
        if max_tuples == 0 {
            return Err(ConfigError::MaxTuples);
        }
        if !min_spring_gap.is_finite() || min_spring_gap < 0.0 {
            return Err(ConfigError::SpringGap);
        }
        if !radius_margin.is_finite() || radius_margin < 0.0 {
            return Err(ConfigError::RadiusMargin);
        }
        if !ring_allowance.is_finite() || ring_allowance < 0.0 {
            return Err(ConfigError::RingAllowance);
        }

        Ok(Self {
            max_tuples,
            min_spring_gap,
            radius_margin,
            ring_allowance,
        })
    }

    /// Returns a copy with a different tuple budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxTuples`] if `max_tuples` is zero.
    pub fn with_max_tuples(self, max_tuples: usize) -> Result<Self, ConfigError> {
        Self::new(
            max_tuples,
            self.min_spring_gap,
            self.radius_margin,
            self.ring_allowance,
        )
    }

    /// Returns the maximum number of tuples examined in one run.
    #[must_use]
    pub fn max_tuples(&self) -> usize {
        self.max_tuples
    }

    /// Returns the minimum gap kept between neighbouring springs.
    #[must_use]
    pub fn min_spring_gap(&self) -> f64 {
        self.min_spring_gap
    }

    /// Returns the margin added above the tightest bolt circle.
    #[must_use]
    pub fn radius_margin(&self) -> f64 {
        self.radius_margin
    }

    /// Returns the structural allowance used to derive ring diameters.
    #[must_use]
    pub fn ring_allowance(&self) -> f64 {
        self.ring_allowance
    }
}
