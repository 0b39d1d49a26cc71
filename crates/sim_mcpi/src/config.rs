//! Estimator run configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line/environment overrides. The result is validated once
//! by [`EstimatorConfigBuilder::build`].
//!
//! ```toml
//! # mcpi.toml
//! iterations = 10_000_000
//! report_interval = 5000
//! seed = 42
//! log_level = "debug"
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Iteration budget used when none is configured.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// Progress line cadence used when none is configured.
pub const DEFAULT_REPORT_INTERVAL: u64 = 5000;

/// Log levels accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including per-run internals.
    Trace,
    /// Run parameters and seeds.
    Debug,
    /// Run start and completion.
    #[default]
    Info,
    /// Recoverable problems only.
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
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

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Contents of an optional TOML configuration file.
///
/// Every key is optional; absent keys fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Iteration budget.
    pub iterations: Option<u64>,
    /// Progress line cadence.
    pub report_interval: Option<u64>,
    /// RNG seed.
    pub seed: Option<u64>,
    /// Log level name.
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parsed log level, if one is set.
    pub fn log_level(&self) -> Result<Option<LogLevel>, ConfigError> {
        self.log_level.as_deref().map(LogLevel::from_str).transpose()
    }
}

/// Validated estimator configuration.
///
/// Use [`EstimatorConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sim_mcpi::config::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .iterations(1_000_000)
///     .report_interval(5000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 1_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    iterations: u64,
    report_interval: u64,
    seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            report_interval: DEFAULT_REPORT_INTERVAL,
            seed: None,
        }
    }
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the iteration budget.
    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns the progress line cadence.
    #[inline]
    pub fn report_interval(&self) -> u64 {
        self.report_interval
    }

    /// Returns the seed, if one was configured.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `iterations` or `report_interval` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.iterations));
        }
        if self.report_interval == 0 {
            return Err(ConfigError::InvalidReportInterval(self.report_interval));
        }
        Ok(())
    }
}

/// Builder for [`EstimatorConfig`].
///
/// Unset fields take their defaults at build time.
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    iterations: Option<u64>,
    report_interval: Option<u64>,
    seed: Option<u64>,
}

impl EstimatorConfigBuilder {
    /// Sets the iteration budget.
    #[inline]
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the progress line cadence.
    #[inline]
    pub fn report_interval(mut self, report_interval: u64) -> Self {
        self.report_interval = Some(report_interval);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Layers values from a config file under anything already set.
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        self.iterations = self.iterations.or(file.iterations);
        self.report_interval = self.report_interval.or(file.report_interval);
        self.seed = self.seed.or(file.seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the resulting configuration is invalid.
    pub fn build(self) -> Result<EstimatorConfig, ConfigError> {
        let config = EstimatorConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            report_interval: self.report_interval.unwrap_or(DEFAULT_REPORT_INTERVAL),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
