//! Integrator run configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line/environment overrides, validated once by
//! [`RunConfigBuilder::build`].
//!
//! ```toml
//! # optbloch.toml
//! output = "rho.txt"
//! gamma = 500e3
//! steps = 10_000
//! plot = false
//! ```
//!
//! `omega` and `delta` default to `gamma` and `-gamma` of the resolved
//! `gamma`, so overriding only the decay rate rescales the whole drive.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{BlochError, Result};
use crate::integrator::{TimeGrid, DEFAULT_STEPS};
use crate::params::{BlochParams, DEFAULT_GAMMA};

/// Data file written when none is configured.
pub const DEFAULT_OUTPUT: &str = "rho.txt";

/// Log levels accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Parameters and plotter invocation.
    Debug,
    /// Run start and completion.
    #[default]
    Info,
    /// Recoverable problems, such as a failed plot.
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = BlochError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(BlochError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Contents of an optional TOML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Data file path.
    pub output: Option<PathBuf>,
    /// Decay rate.
    pub gamma: Option<f64>,
    /// Rabi frequency.
    pub omega: Option<f64>,
    /// Detuning.
    pub delta: Option<f64>,
    /// Steps per Rabi period.
    pub steps: Option<usize>,
    /// Plot after integrating.
    pub plot: Option<bool>,
    /// Log level name.
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BlochError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BlochError::Config(e.to_string()))
    }

    /// Parsed log level, if one is set.
    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        self.log_level.as_deref().map(LogLevel::from_str).transpose()
    }
}

/// Validated integrator run configuration.
///
/// # Examples
///
/// ```rust
/// use sim_optbloch::config::RunConfig;
///
/// let config = RunConfig::builder()
///     .gamma(1e6)
///     .steps(2000)
///     .output("out/rho.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.params().omega, 1e6);
/// assert_eq!(config.params().delta, -1e6);
/// assert_eq!(config.grid().steps(), 2000);
/// assert!(!config.plot());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    params: BlochParams,
    grid: TimeGrid,
    output: PathBuf,
    plot: bool,
}

impl RunConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Physical parameters.
    #[inline]
    pub fn params(&self) -> &BlochParams {
        &self.params
    }

    /// One Rabi period split into the configured number of steps.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Data file path.
    #[inline]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Whether to plot after integrating.
    #[inline]
    pub fn plot(&self) -> bool {
        self.plot
    }
}

/// Builder for [`RunConfig`].
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    output: Option<PathBuf>,
    gamma: Option<f64>,
    omega: Option<f64>,
    delta: Option<f64>,
    steps: Option<usize>,
    plot: Option<bool>,
}

impl RunConfigBuilder {
    /// Sets the data file path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets the decay rate.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Sets the Rabi frequency.
    pub fn omega(mut self, omega: f64) -> Self {
        self.omega = Some(omega);
        self
    }

    /// Sets the detuning.
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Sets the number of steps per Rabi period.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Enables or disables plotting.
    pub fn plot(mut self, plot: bool) -> Self {
        self.plot = Some(plot);
        self
    }

    /// Layers values from a config file under anything already set.
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        self.output = self.output.or_else(|| file.output.clone());
        self.gamma = self.gamma.or(file.gamma);
        self.omega = self.omega.or(file.omega);
        self.delta = self.delta.or(file.delta);
        self.steps = self.steps.or(file.steps);
        self.plot = self.plot.or(file.plot);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BlochError` if the parameters or the step count are invalid.
    pub fn build(self) -> Result<RunConfig> {
        let gamma = self.gamma.unwrap_or(DEFAULT_GAMMA);
        let params = BlochParams::new(
            gamma,
            self.omega.unwrap_or(gamma),
            self.delta.unwrap_or(-gamma),
        )?;
        let grid = TimeGrid::one_period(&params, self.steps.unwrap_or(DEFAULT_STEPS))?;

        Ok(RunConfig {
            params,
            grid,
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            plot: self.plot.unwrap_or(false),
        })
    }
}
