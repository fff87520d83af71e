use thiserror::Error;

/// Derivative magnitude below which `f'(x₀)` cannot start the iteration.
pub const ZERO_DERIVATIVE: f64 = 1e-12;

/// Number of equally spaced points used to bound `|f'|` on the reference
/// interval.
pub const SAMPLES: usize = 201;

/// Per-step limits that end the iteration as non-converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guards {
    /// Largest admissible `|f(x)|`.
    pub value_limit: f64,
    /// Largest admissible `|x|`.
    pub x_limit: f64,
    /// Smallest admissible `|f'(x)|` at the running point.
    pub min_slope: f64,
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            value_limit: 1e10,
            x_limit: 1e6,
            min_slope: 1e-6,
        }
    }
}

/// Configuration for the modified Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: usize,
    guards: Guards,
}

/// Errors that can occur when validating a modified Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,

    #[error("value_limit must be positive")]
    ValueLimit,

    #[error("x_limit must be positive")]
    XLimit,

    #[error("min_slope must be finite and non-negative")]
    MinSlope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iters: 100,
            guards: Guards::default(),
        }
    }
}

impl Config {
    /// Creates a new config with the default [`Guards`].
    ///
    /// The iteration converges once a step `|xₙ₊₁ − xₙ|` is below `eps`.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn new(eps: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }
        Ok(Self {
            eps,
            max_iters,
            guards: Guards::default(),
        })
    }

    /// Replaces the per-step guards.
    ///
    /// Limits may be infinite to disable a guard.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not positive or `min_slope` is negative
    /// or non-finite.
    pub fn with_guards(self, guards: Guards) -> Result<Self, ConfigError> {
        if guards.value_limit.is_nan() || guards.value_limit <= 0.0 {
            return Err(ConfigError::ValueLimit);
        }
        if guards.x_limit.is_nan() || guards.x_limit <= 0.0 {
            return Err(ConfigError::XLimit);
        }
        if !guards.min_slope.is_finite() || guards.min_slope < 0.0 {
            return Err(ConfigError::MinSlope);
        }
        Ok(Self { guards, ..self })
    }

    /// Returns the step tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the maximum number of steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the per-step guards.
    #[must_use]
    pub fn guards(&self) -> Guards {
        self.guards
    }
}
