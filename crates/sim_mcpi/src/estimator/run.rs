//! The sampling loop.
//!
//! [`Estimator`] owns its configuration and random source, writes progress
//! lines to any `io::Write`, and stops early when its [`CancelToken`] is
//! set.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::{classify, sample, Tally};
use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::format::format_estimate;
use crate::rng::{PiRng, UniformSource};

/// Shared flag requesting an early stop.
///
/// Checked once per iteration, before the next point is drawn.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`CancelToken::cancel`] has been called on any clone.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of an estimator run.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateSummary {
    /// Points classified inside the circle.
    pub inside: u64,
    /// Iterations actually performed.
    pub total: u64,
    /// Final estimate; `None` when the run was cancelled before any sample.
    pub estimate: Option<f64>,
    /// Whether the run stopped before its budget.
    pub cancelled: bool,
    /// Seed of the generator, when known.
    pub seed: Option<u64>,
}

/// Monte Carlo pi estimator.
///
/// # Examples
///
/// ```rust
/// use sim_mcpi::config::EstimatorConfig;
/// use sim_mcpi::estimator::{CancelToken, Estimator};
///
/// let config = EstimatorConfig::builder()
///     .iterations(100_000)
///     .report_interval(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut estimator = Estimator::new(config);
/// let mut out = Vec::new();
/// let summary = estimator.run(&mut out, &CancelToken::new()).unwrap();
///
/// assert_eq!(summary.total, 100_000);
/// assert!((summary.estimate.unwrap() - std::f64::consts::PI).abs() < 0.05);
/// ```
pub struct Estimator<S = PiRng> {
    config: EstimatorConfig,
    source: S,
    seed: Option<u64>,
}

impl Estimator<PiRng> {
    /// Creates an estimator backed by [`PiRng`].
    ///
    /// Uses the configured seed, or an entropy-derived one when none is set.
    pub fn new(config: EstimatorConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => PiRng::from_seed(seed),
            None => PiRng::from_entropy(),
        };
        let seed = Some(rng.seed());

        Self {
            config,
            source: rng,
            seed,
        }
    }
}

impl<S: UniformSource> Estimator<S> {
    /// Creates an estimator drawing from an injected source.
    ///
    /// The seed is unknown, so [`Estimator::seed`] returns `None`.
    pub fn with_source(config: EstimatorConfig, source: S) -> Self {
        Self {
            config,
            source,
            seed: None,
        }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Seed of the backing generator, when known.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs the sampling loop.
    ///
    /// Writes `Value of pi as of iteration <i> is <estimate>` whenever
    /// `i % report_interval == 0` (so the first line follows the first
    /// sample), then `After <n> iterations, pi = <estimate>` where `n` is
    /// the number of iterations actually performed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(&mut self, out: &mut W, cancel: &CancelToken) -> Result<EstimateSummary> {
        let iterations = self.config.iterations();
        let interval = self.config.report_interval();

        debug!(
            iterations,
            report_interval = interval,
            seed = ?self.seed,
            "Starting Monte Carlo run"
        );

        let mut tally = Tally::new();
        let mut cancelled = false;

        for i in 0..iterations {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let (x, y) = sample(&mut self.source);
            tally.record(classify(x, y));

            if i % interval == 0 {
                writeln!(
                    out,
                    "Value of pi as of iteration {} is {}",
                    i,
                    format_estimate(tally.estimate()?)
                )?;
            }
        }

        let estimate = tally.estimate().ok();
        let rendered = estimate.map_or_else(|| "undefined".to_string(), format_estimate);
        writeln!(out, "After {} iterations, pi = {}", tally.total(), rendered)?;
        out.flush()?;

        if cancelled {
            info!(performed = tally.total(), budget = iterations, "Run cancelled");
        } else {
            info!(
                inside = tally.inside(),
                total = tally.total(),
                estimate = %rendered,
                "Run complete"
            );
        }

        Ok(EstimateSummary {
            inside: tally.inside(),
            total: tally.total(),
            estimate,
            cancelled,
            seed: self.seed,
        })
    }
}
