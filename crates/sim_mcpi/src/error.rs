//! Error types for the pi estimator.
//!
//! - `EstimatorError`: failures of the estimate itself
//! - `ConfigError`: invalid run configuration or unreadable config files

use thiserror::Error;

/// Estimator errors.
///
/// # Examples
/// ```
/// use sim_mcpi::error::EstimatorError;
///
/// let err = EstimatorError::EmptySample;
/// assert_eq!(err.to_string(), "Estimate undefined: no points sampled");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// The ratio was requested before any point was sampled.
    #[error("Estimate undefined: no points sampled")]
    EmptySample,

    /// Progress output could not be written.
    #[error("Report output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration error for the estimator run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Iteration budget of zero.
    #[error("Invalid iteration count {0}: must be at least 1")]
    InvalidIterations(u64),

    /// Progress reporting interval of zero.
    #[error("Invalid report interval {0}: must be at least 1")]
    InvalidReportInterval(u64),

    /// Configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ParseError(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Result alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidIterations(0);
        assert!(err.to_string().contains("Invalid iteration count 0"));

        let err = ConfigError::InvalidReportInterval(0);
        assert!(err.to_string().contains("Invalid report interval 0"));

        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().contains("loud"));
    }
}
