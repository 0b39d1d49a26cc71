//! Physical parameters of the driven two-level atom.

use std::f64::consts::PI;

use crate::error::{BlochError, Result};

/// Decay rate used when none is configured (s^-1).
pub const DEFAULT_GAMMA: f64 = 500e3;

/// Drive and decay parameters, fixed for a run.
///
/// All rates are angular frequencies in s^-1.
///
/// # Examples
///
/// ```rust
/// use sim_optbloch::params::BlochParams;
///
/// let params = BlochParams::default();
/// assert_eq!(params.gamma, 500e3);
/// assert_eq!(params.omega, params.gamma);
/// assert_eq!(params.delta, -params.gamma);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochParams {
    /// Spontaneous decay rate of the excited state.
    pub gamma: f64,
    /// Rabi frequency of the drive.
    pub omega: f64,
    /// Detuning of the drive from resonance.
    pub delta: f64,
}

impl Default for BlochParams {
    fn default() -> Self {
        Self::with_gamma(DEFAULT_GAMMA)
    }
}

impl BlochParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// See [`BlochParams::validate`].
    pub fn new(gamma: f64, omega: f64, delta: f64) -> Result<Self> {
        let params = Self {
            gamma,
            omega,
            delta,
        };
        params.validate()?;
        Ok(params)
    }

    /// Drive at `omega = gamma`, detuned by `delta = -gamma`.
    pub fn with_gamma(gamma: f64) -> Self {
        Self {
            gamma,
            omega: gamma,
            delta: -gamma,
        }
    }

    /// One Rabi period, `2 pi / omega`.
    #[inline]
    pub fn rabi_period(&self) -> f64 {
        2.0 * PI / self.omega
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `BlochError::InvalidParameter` if:
    /// - `gamma` is negative or not finite
    /// - `omega` is not strictly positive and finite (the period would be undefined)
    /// - `delta` is not finite
    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(BlochError::InvalidParameter {
                name: "gamma",
                value: format!("must be non-negative and finite, got {}", self.gamma),
            });
        }
        if !self.omega.is_finite() || self.omega <= 0.0 {
            return Err(BlochError::InvalidParameter {
                name: "omega",
                value: format!("must be positive and finite, got {}", self.omega),
            });
        }
        if !self.delta.is_finite() {
            return Err(BlochError::InvalidParameter {
                name: "delta",
                value: format!("must be finite, got {}", self.delta),
            });
        }
        Ok(())
    }
}
