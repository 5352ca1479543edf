//! Solver configuration
//!
//! ```
//! use hits_graph::{HitsConfig, Normalization};
//!
//! let config = HitsConfig::new()
//!     .with_epsilon(1e-10)
//!     .with_max_iterations(500)
//!     .with_normalization(Normalization::Guarded);
//!
//! assert_eq!(config.max_iterations, Some(500));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence threshold
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// How a score vector is divided by its round maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Normalization {
    /// Always divide by the maximum, even when it is zero
    ///
    /// A graph without edges yields a zero maximum and therefore `NaN` scores,
    /// which never satisfy the convergence test. Pair with
    /// [`HitsConfig::with_max_iterations`] when such input is possible.
    #[default]
    Verbatim,

    /// Skip the division when the maximum is zero or not finite
    Guarded,
}

impl Normalization {
    /// Divisor to apply for a round maximum, or `None` to leave scores as-is
    #[must_use]
    pub fn divisor(self, max: f64) -> Option<f64> {
        match self {
            Self::Verbatim => Some(max),
            Self::Guarded if max.is_finite() && max != 0.0 => Some(max),
            Self::Guarded => None,
        }
    }
}

/// HITS solver settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitsConfig {
    /// Convergence threshold on the summed per-node change of each score vector
    ///
    /// Zero or negative values are accepted; they may never be satisfied.
    pub epsilon: f64,

    /// Optional cap on solver rounds (`None` = iterate until converged)
    pub max_iterations: Option<usize>,

    /// Normalization policy
    pub normalization: Normalization,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: None,
            normalization: Normalization::Verbatim,
        }
    }
}

impl HitsConfig {
    /// Create config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence threshold (non-finite values fall back to the default)
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = sanitize_epsilon(Some(epsilon));
        self
    }

    /// Cap the number of solver rounds
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the normalization policy
    #[must_use]
    pub const fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Resolve an optional epsilon
///
/// Missing or non-finite values are replaced by [`DEFAULT_EPSILON`] rather than
/// rejected.
#[must_use]
pub fn sanitize_epsilon(epsilon: Option<f64>) -> f64 {
    match epsilon {
        Some(eps) if eps.is_finite() => eps,
        _ => DEFAULT_EPSILON,
    }
}
