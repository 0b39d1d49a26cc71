//! # sim_mcpi: Monte Carlo Estimation of Pi
//!
//! Picks random points in the first quadrant of the unit square and counts
//! how many land inside the unit circle. The probability of landing inside
//! is `pi / 4`, so the running ratio converges (statistically, not
//! exactly) to pi.
//!
//! ## Modules
//!
//! - [`rng`]: seeded uniform sources behind the [`rng::UniformSource`] trait
//! - [`estimator`]: `sample`, `classify`, `estimate`, the [`estimator::Tally`]
//!   accumulator and the reporting loop
//! - [`config`]: validated run configuration, TOML file layer, log levels
//! - [`format`]: `%g`-style significant-digit formatting of estimates
//! - [`error`]: error types
//!
//! ## Usage Example
//!
//! ```rust
//! use sim_mcpi::config::EstimatorConfig;
//! use sim_mcpi::estimator::{CancelToken, Estimator};
//!
//! let config = EstimatorConfig::builder()
//!     .iterations(10_000)
//!     .report_interval(5000)
//!     .seed(12345)
//!     .build()
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! let summary = Estimator::new(config)
//!     .run(&mut out, &CancelToken::new())
//!     .unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Value of pi as of iteration 0 is "));
//! assert!(text.ends_with(&format!(
//!     "After 10000 iterations, pi = {}\n",
//!     sim_mcpi::format::format_estimate(summary.estimate.unwrap())
//! )));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod rng;

pub use error::{ConfigError, EstimatorError};
