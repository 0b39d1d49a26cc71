//! # sim_optbloch: Optical Bloch Equation Integrator
//!
//! Time-step integration of the optical Bloch equations for a driven
//! two-level atom. Starting in the ground state, the density matrix is
//! advanced by forward Euler over one Rabi period and the populations
//! `|rho_gg|` and `|rho_ee|` are written to a text file, one row per step.
//!
//! ## Modules
//!
//! - [`params`]: decay rate, Rabi frequency, detuning
//! - [`state`]: the four density matrix elements
//! - [`integrator`]: derivative, Euler step, time grid, row iterator
//! - [`output`]: data file header and row formatting
//! - [`run`]: file-producing runs and non-fatal plotting
//! - [`plot`]: the [`plot::Plotter`] seam and the gnuplot implementation
//! - [`config`]: validated run configuration, TOML file layer, log levels
//! - [`error`]: error types
//!
//! ## Usage Example
//!
//! ```rust
//! use sim_optbloch::integrator::TimeGrid;
//! use sim_optbloch::params::BlochParams;
//! use sim_optbloch::run::integrate;
//!
//! let params = BlochParams::default();
//! let grid = TimeGrid::one_period(&params, 10_000).unwrap();
//! let (data, report) = integrate(&params, &grid, Vec::new()).unwrap();
//!
//! assert_eq!(report.rows, 10_000);
//! assert!(report.max_population_drift < 1e-9);
//! assert!(String::from_utf8(data).unwrap().starts_with("# t |rho_gg| |rho_ee|\n"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod integrator;
pub mod output;
pub mod params;
pub mod plot;
pub mod run;
pub mod state;

pub use error::{BlochError, PlotError};
