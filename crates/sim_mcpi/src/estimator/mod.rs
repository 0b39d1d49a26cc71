//! Monte Carlo estimation of pi.
//!
//! Points are drawn uniformly from the unit square `[0, 1) x [0, 1)`. The
//! quarter of the unit circle covers `pi / 4` of that square, so four times
//! the fraction of points falling inside the circle estimates pi.
//!
//! # Overview
//!
//! - [`sample`]: draw one point from a [`UniformSource`]
//! - [`classify`]: strict `r < 1` membership test
//! - [`estimate`]: `4 * inside / total`, guarded against `total == 0`
//! - [`Tally`]: the `inside`/`total` accumulator threaded through the loop
//! - [`Estimator`]: the reporting loop with cancellation

mod run;

pub use run::{CancelToken, EstimateSummary, Estimator};

use crate::error::{EstimatorError, Result};
use crate::rng::UniformSource;

/// Draws a point `(x, y)` with both coordinates uniform in [0, 1).
///
/// `x` is drawn before `y`.
#[inline]
pub fn sample<S: UniformSource + ?Sized>(source: &mut S) -> (f64, f64) {
    let x = source.next_uniform();
    let y = source.next_uniform();
    (x, y)
}

/// Returns `true` when `(x, y)` lies strictly inside the unit circle.
///
/// Points exactly on the circle (`r == 1`) are outside.
///
/// ```rust
/// use sim_mcpi::estimator::classify;
///
/// assert!(classify(0.0, 0.0));
/// assert!(!classify(1.0, 0.0));
/// assert!(!classify(1.0, 1.0));
/// ```
#[inline]
pub fn classify(x: f64, y: f64) -> bool {
    let r = (x * x + y * y).sqrt();
    r < 1.0
}

/// Returns `4 * inside / total`.
///
/// # Errors
///
/// Returns [`EstimatorError::EmptySample`] when `total == 0`.
///
/// ```rust
/// use sim_mcpi::estimator::estimate;
///
/// assert_eq!(estimate(3, 4).unwrap(), 3.0);
/// assert!(estimate(0, 0).is_err());
/// ```
#[inline]
pub fn estimate(inside: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(EstimatorError::EmptySample);
    }
    Ok(4.0 * inside as f64 / total as f64)
}

/// Running count of sampled points.
///
/// Invariant: `inside <= total`. Both counters only grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    inside: u64,
    total: u64,
}

impl Tally {
    /// Creates an empty tally.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one classified point.
    #[inline]
    pub fn record(&mut self, is_inside: bool) {
        if is_inside {
            self.inside += 1;
        }
        self.total += 1;
    }

    /// Points classified inside the circle.
    #[inline]
    pub fn inside(&self) -> u64 {
        self.inside
    }

    /// All points recorded.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current estimate of pi.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::EmptySample`] before the first point.
    #[inline]
    pub fn estimate(&self) -> Result<f64> {
        estimate(self.inside, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PiRng;
    use approx::assert_relative_eq;

    /// Replays a fixed list of uniforms.
    struct Scripted(std::vec::IntoIter<f64>);

    impl UniformSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            self.0.next().expect("script exhausted")
        }
    }

    #[test]
    fn test_sample_draws_x_then_y() {
        let mut source = Scripted(vec![0.25, 0.75].into_iter());
        assert_eq!(sample(&mut source), (0.25, 0.75));
    }

    #[test]
    fn test_sample_in_unit_square() {
        let mut rng = PiRng::from_seed(3);
        for _ in 0..1000 {
            let (x, y) = sample(&mut rng);
            assert!((0.0..1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_classify_origin_inside() {
        assert!(classify(0.0, 0.0));
    }

    #[test]
    fn test_classify_corner_outside() {
        assert!(!classify(1.0, 1.0));
    }

    #[test]
    fn test_classify_boundary_outside() {
        assert!(!classify(1.0, 0.0));
        assert!(!classify(0.0, 1.0));
        assert!(!classify(0.6, 0.8));
    }

    #[test]
    fn test_classify_near_boundary() {
        assert!(classify(0.7, 0.7));
        assert!(!classify(0.8, 0.8));
    }

    #[test]
    fn test_estimate_values() {
        assert_relative_eq!(estimate(1, 1).unwrap(), 4.0);
        assert_relative_eq!(estimate(0, 10).unwrap(), 0.0);
        assert_relative_eq!(estimate(785, 1000).unwrap(), 3.14, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_empty_sample() {
        assert!(matches!(estimate(0, 0), Err(EstimatorError::EmptySample)));
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::new();
        assert!(tally.estimate().is_err());

        tally.record(true);
        tally.record(false);
        tally.record(true);

        assert_eq!(tally.inside(), 2);
        assert_eq!(tally.total(), 3);
        assert_relative_eq!(tally.estimate().unwrap(), 8.0 / 3.0);
    }
}
