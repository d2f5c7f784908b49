//! Configuration options for the equilibrium solver.
//!
//! This module provides the configuration struct controlling the mixed
//! solver's general path and the numeric tolerances shared across the
//! engine.

use serde::{Deserialize, Serialize};

/// Configuration for equilibrium analysis.
///
/// Controls whether the general support-enumeration path runs for games
/// larger than 2×2, how large the enumerated supports may grow, and the
/// tolerances used when verifying candidate solutions.
///
/// # Example
/// ```
/// use litigation_solver::game::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert!(config.support_enumeration); // general solver is on by default
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Run support enumeration for games larger than 2×2.
    ///
    /// When disabled, the mixed solver only handles the 2×2 closed form
    /// and larger games report an explanatory note instead.
    pub support_enumeration: bool,

    /// Cap on the enumerated support size.
    ///
    /// Support enumeration tries equal-size supports from 2 up to
    /// `min(m, n)`. Set this to stop earlier on large games.
    /// `None` means no cap.
    pub max_support_size: Option<usize>,

    /// Tolerance for probability constraints.
    ///
    /// Candidate probabilities may undershoot zero or the vector sum may
    /// drift from one by up to this amount before the candidate is
    /// rejected.
    pub probability_tolerance: f64,

    /// Tolerance for best-response verification.
    ///
    /// An outside-support deviation must beat the support payoff by more
    /// than this to disqualify a candidate equilibrium.
    pub deviation_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            support_enumeration: true,
            max_support_size: None,
            probability_tolerance: 1e-6,
            deviation_tolerance: 1e-9,
        }
    }
}

impl SolverConfig {
    /// Create a new SolverConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration matching the legacy engine: 2×2 closed form
    /// only, larger games unsupported.
    pub fn closed_form_only() -> Self {
        Self {
            support_enumeration: false,
            ..Default::default()
        }
    }

    /// Builder method: enable or disable support enumeration.
    pub fn with_support_enumeration(mut self, enable: bool) -> Self {
        self.support_enumeration = enable;
        self
    }

    /// Builder method: cap the enumerated support size.
    pub fn with_max_support_size(mut self, size: usize) -> Self {
        self.max_support_size = Some(size);
        self
    }

    /// Builder method: set the probability tolerance.
    pub fn with_probability_tolerance(mut self, tolerance: f64) -> Self {
        self.probability_tolerance = tolerance;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.probability_tolerance > 0.0 && self.probability_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(
                "probability",
                self.probability_tolerance,
            ));
        }
        if !(self.deviation_tolerance > 0.0 && self.deviation_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(
                "deviation",
                self.deviation_tolerance,
            ));
        }
        if let Some(size) = self.max_support_size {
            if size < 2 {
                return Err(ConfigError::InvalidSupportSize(size));
            }
        }
        Ok(())
    }
}

/// Errors that can occur when validating solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tolerance is non-positive, NaN, or infinite.
    InvalidTolerance(&'static str, f64),
    /// Support size cap below 2 (size-1 supports are pure profiles).
    InvalidSupportSize(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTolerance(name, val) => {
                write!(f, "{} tolerance {} must be a positive finite number", name, val)
            }
            ConfigError::InvalidSupportSize(size) => {
                write!(f, "max support size {} must be at least 2", size)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
