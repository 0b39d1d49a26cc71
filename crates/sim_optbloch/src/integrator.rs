//! Forward Euler integration of the optical Bloch equations.
//!
//! The equations of motion for the two-level density matrix (see Metcalf
//! and van der Straten, *Laser Cooling and Trapping*):
//!
//! ```text
//! d(rho_gg)/dt =  gamma rho_ee + i Omega (rho_eg - rho_ge) / 2
//! d(rho_ee)/dt = -d(rho_gg)/dt
//! d(rho_ge)/dt = -(gamma/2 + i delta) rho_ge + i Omega (rho_ee - rho_gg) / 2
//! d(rho_eg)/dt =  conj(d(rho_ge)/dt)
//! ```
//!
//! Each step advances `rho += d(rho) * dt`. The scheme is first order
//! (local error O(dt^2), global error O(dt)) with no error control; a `dt`
//! that is large against `1/gamma` or `1/Omega` goes unstable silently.

use num_complex::Complex64;

use crate::error::{BlochError, Result};
use crate::params::BlochParams;
use crate::state::DensityMatrix;

/// Steps per Rabi period used when none is configured.
pub const DEFAULT_STEPS: usize = 10_000;

/// Time derivative of each density matrix element.
pub fn derivative(state: &DensityMatrix, params: &BlochParams) -> DensityMatrix {
    let i = Complex64::i();

    let d_gg = params.gamma * state.rho_ee + i * params.omega * (state.rho_eg - state.rho_ge) / 2.0;
    let d_ge = -Complex64::new(params.gamma / 2.0, params.delta) * state.rho_ge
        + i * params.omega * (state.rho_ee - state.rho_gg) / 2.0;

    DensityMatrix {
        rho_gg: d_gg,
        rho_ee: -d_gg,
        rho_ge: d_ge,
        rho_eg: d_ge.conj(),
    }
}

/// Advances `state` by one forward Euler step of length `dt`.
///
/// Pure: the input is untouched. If the coherences of `state` are exact
/// conjugates, so are those of the result.
///
/// ```rust
/// use sim_optbloch::integrator::step;
/// use sim_optbloch::params::BlochParams;
/// use sim_optbloch::state::DensityMatrix;
///
/// let params = BlochParams::default();
/// let next = step(&DensityMatrix::ground(), &params, 1e-9);
/// assert!(next.is_hermitian());
/// ```
pub fn step(state: &DensityMatrix, params: &BlochParams, dt: f64) -> DensityMatrix {
    let d = derivative(state, params);

    DensityMatrix {
        rho_gg: state.rho_gg + d.rho_gg * dt,
        rho_ee: state.rho_ee - d.rho_gg * dt,
        rho_ge: state.rho_ge + d.rho_ge * dt,
        rho_eg: state.rho_eg + d.rho_eg * dt,
    }
}

/// A time span split into equal steps.
///
/// Step `k` starts at `t_k = k * dt`; there are exactly `steps` of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    duration: f64,
    steps: usize,
}

impl TimeGrid {
    /// Creates a grid over `[0, duration)`.
    ///
    /// # Errors
    ///
    /// Returns `BlochError` if `steps == 0` or `duration` is not positive and finite.
    pub fn new(duration: f64, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(BlochError::InvalidStepCount(steps));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(BlochError::InvalidParameter {
                name: "duration",
                value: format!("must be positive and finite, got {}", duration),
            });
        }
        Ok(Self { duration, steps })
    }

    /// One Rabi period of `params`.
    pub fn one_period(params: &BlochParams, steps: usize) -> Result<Self> {
        Self::new(params.rabi_period(), steps)
    }

    /// Total span.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step length.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.duration / self.steps as f64
    }

    /// Start time of step `k`.
    #[inline]
    pub fn time_at(&self, k: usize) -> f64 {
        k as f64 * self.dt()
    }
}

/// One output row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationSample {
    /// Start time of the step.
    pub t: f64,
    /// `|rho_gg|` after the step.
    pub ground: f64,
    /// `|rho_ee|` after the step.
    pub excited: f64,
}

/// Iterator stepping a density matrix across a [`TimeGrid`].
///
/// Each item pairs the start time of a step with the populations after
/// that step.
///
/// # Examples
///
/// ```rust
/// use sim_optbloch::integrator::{Integrator, TimeGrid};
/// use sim_optbloch::params::BlochParams;
/// use sim_optbloch::state::DensityMatrix;
///
/// let params = BlochParams::default();
/// let grid = TimeGrid::one_period(&params, 1000).unwrap();
/// let rows: Vec<_> = Integrator::new(params, grid, DensityMatrix::ground()).collect();
///
/// assert_eq!(rows.len(), 1000);
/// assert_eq!(rows[0].t, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Integrator {
    params: BlochParams,
    grid: TimeGrid,
    state: DensityMatrix,
    next: usize,
}

impl Integrator {
    /// Starts at step 0 from `initial`.
    pub fn new(params: BlochParams, grid: TimeGrid, initial: DensityMatrix) -> Self {
        Self {
            params,
            grid,
            state: initial,
            next: 0,
        }
    }

    /// Current state (after the last yielded step).
    #[inline]
    pub fn state(&self) -> &DensityMatrix {
        &self.state
    }

    /// The grid being walked.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }
}

impl Iterator for Integrator {
    type Item = PopulationSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.grid.steps() {
            return None;
        }

        let t = self.grid.time_at(self.next);
        self.state = step(&self.state, &self.params, self.grid.dt());
        self.next += 1;

        let (ground, excited) = self.state.populations();
        Some(PopulationSample { t, ground, excited })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.steps() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Integrator {}
