//! optbloch - optical Bloch equations for a two-level atom
//!
//! Integrates one Rabi period from the ground state, writes
//! `t |rho_gg| |rho_ee|` rows to the data file and, with `--plot`, shows
//! them with gnuplot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sim_optbloch::config::{FileConfig, LogLevel, RunConfig};
use sim_optbloch::plot::GnuplotPlotter;
use sim_optbloch::run::{render, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Forward Euler integration of the optical Bloch equations
#[derive(Parser, Debug)]
#[command(name = "optbloch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Data file to write
    #[arg(short, long, value_name = "FILE", env = "OPTBLOCH_OUTPUT")]
    output: Option<PathBuf>,

    /// Decay rate gamma (1/s)
    #[arg(long, env = "OPTBLOCH_GAMMA")]
    gamma: Option<f64>,

    /// Rabi frequency Omega (1/s) [default: gamma]
    #[arg(long, env = "OPTBLOCH_OMEGA")]
    omega: Option<f64>,

    /// Detuning delta (1/s) [default: -gamma]
    #[arg(long, env = "OPTBLOCH_DELTA", allow_negative_numbers = true)]
    delta: Option<f64>,

    /// Time steps per Rabi period
    #[arg(long, env = "OPTBLOCH_STEPS")]
    steps: Option<usize>,

    /// Plot the populations with gnuplot afterwards
    #[arg(short, long, env = "OPTBLOCH_PLOT")]
    plot: bool,

    /// Skip plotting, even if the config file enables it
    #[arg(long, conflicts_with = "plot")]
    no_plot: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "OPTBLOCH_LOG_LEVEL")]
    log_level: Option<String>,
}

fn build_config(args: &Args) -> Result<(RunConfig, LogLevel)> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut builder = RunConfig::builder();
    if let Some(output) = &args.output {
        builder = builder.output(output.clone());
    }
    if let Some(gamma) = args.gamma {
        builder = builder.gamma(gamma);
    }
    if let Some(omega) = args.omega {
        builder = builder.omega(omega);
    }
    if let Some(delta) = args.delta {
        builder = builder.delta(delta);
    }
    if let Some(steps) = args.steps {
        builder = builder.steps(steps);
    }
    if args.plot {
        builder = builder.plot(true);
    } else if args.no_plot {
        builder = builder.plot(false);
    }
    let config = builder.with_file(&file).build()?;

    let log_level = match &args.log_level {
        Some(level) => level.parse()?,
        None => file.log_level()?.unwrap_or_default(),
    };

    Ok((config, log_level))
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, log_level) = build_config(&args).context("invalid configuration")?;

    init_tracing(log_level.as_filter_str());

    let summary = run(&config)?;

    if config.plot() {
        render(&GnuplotPlotter::default(), &summary.output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_plot() -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "plot = true\nsteps = 100\n").unwrap();
        file
    }

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("optbloch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_file_enables_plot() {
        let file = config_with_plot();
        let path = file.path().to_str().unwrap();

        let (config, _) = build_config(&parse(&["--config", path])).unwrap();
        assert!(config.plot());
        assert_eq!(config.grid().steps(), 100);
    }

    #[test]
    fn test_no_plot_overrides_file() {
        let file = config_with_plot();
        let path = file.path().to_str().unwrap();

        let (config, _) = build_config(&parse(&["--config", path, "--no-plot"])).unwrap();
        assert!(!config.plot());
    }

    #[test]
    fn test_plot_flags_conflict() {
        assert!(Args::try_parse_from(["optbloch", "--plot", "--no-plot"]).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(build_config(&parse(&["--log-level", "chatty"])).is_err());
    }
}
