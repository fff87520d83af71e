use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-4,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The solver stops once the bracket half-width is at most `eps`, or after
    /// `max_iters` bisections.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive.
    pub fn new(eps: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }
        Ok(Self { eps, max_iters })
    }

    /// Returns the half-width tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the maximum number of bisections.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
