//! mcpi - Monte Carlo estimate of pi
//!
//! Samples points in the unit square until the iteration budget runs out
//! or Ctrl-C is pressed, printing the running estimate every
//! `--report-interval` iterations and the final estimate at the end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sim_mcpi::config::{EstimatorConfig, FileConfig, LogLevel};
use sim_mcpi::estimator::{CancelToken, Estimator};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Monte Carlo estimation of pi
#[derive(Parser, Debug)]
#[command(name = "mcpi")]
#[command(version, about, long_about = None)]
struct Args {
    /// Iteration budget
    #[arg(short = 'n', long, env = "MCPI_ITERATIONS")]
    iterations: Option<u64>,

    /// Print the running estimate every N iterations
    #[arg(short, long, value_name = "N", env = "MCPI_REPORT_INTERVAL")]
    report_interval: Option<u64>,

    /// Seed for a reproducible run (random when omitted)
    #[arg(short, long, env = "MCPI_SEED")]
    seed: Option<u64>,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MCPI_LOG_LEVEL")]
    log_level: Option<String>,
}

fn build_config(args: &Args) -> Result<(EstimatorConfig, LogLevel)> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut builder = EstimatorConfig::builder();
    if let Some(iterations) = args.iterations {
        builder = builder.iterations(iterations);
    }
    if let Some(interval) = args.report_interval {
        builder = builder.report_interval(interval);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
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

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (config, log_level) = build_config(&args).context("invalid configuration")?;

    init_tracing(log_level.as_filter_str());

    let cancel = CancelToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current iteration");
                cancel.cancel();
            }
        })
    };

    let estimator = Estimator::new(config);
    info!(
        iterations = estimator.config().iterations(),
        report_interval = estimator.config().report_interval(),
        seed = ?estimator.seed(),
        "Estimating pi"
    );

    let summary = tokio::task::spawn_blocking(move || {
        let mut estimator = estimator;
        let mut out = std::io::stdout().lock();
        estimator.run(&mut out, &cancel)
    })
    .await
    .context("estimator task failed")??;

    watcher.abort();

    if summary.cancelled {
        info!(
            performed = summary.total,
            seed = ?summary.seed,
            "Stopped early; rerun with --seed to reproduce"
        );
    }

    Ok(())
}
