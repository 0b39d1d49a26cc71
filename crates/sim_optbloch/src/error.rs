//! Error types for the Bloch integrator.
//!
//! - `BlochError`: invalid parameters, configuration and data file failures
//! - `PlotError`: failures of the optional external plotting step

use std::path::PathBuf;

use thiserror::Error;

/// Integrator errors.
///
/// # Examples
/// ```
/// use sim_optbloch::error::BlochError;
///
/// let err = BlochError::InvalidStepCount(0);
/// assert_eq!(err.to_string(), "Invalid step count 0: must be at least 1");
/// ```
#[derive(Debug, Error)]
pub enum BlochError {
    /// A physical parameter is out of range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Zero steps per period.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// The data file could not be created or written.
    #[error("Data file error for {path}: {source}")]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Failures of the external plotting step.
///
/// None of these invalidate the data file.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The plotting program could not be started.
    #[error("Plotting tool '{tool}' unavailable: {source}")]
    ToolUnavailable {
        /// Program name.
        tool: String,
        /// Spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The plotting program exited unsuccessfully.
    #[error("Plotting tool '{tool}' failed with {status}")]
    ToolFailed {
        /// Program name.
        tool: String,
        /// Exit status.
        status: std::process::ExitStatus,
    },

    /// The plot script could not be written.
    #[error("Plot script {path} could not be written: {source}")]
    Script {
        /// Script path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for integrator operations.
pub type Result<T> = std::result::Result<T, BlochError>;
