//! Integration runs: step across a grid, stream rows to a sink, optionally
//! plot the resulting file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::error::{BlochError, Result};
use crate::integrator::{Integrator, TimeGrid};
use crate::output::PopulationWriter;
use crate::params::BlochParams;
use crate::plot::Plotter;
use crate::state::DensityMatrix;

/// What an integration produced besides the rows themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationReport {
    /// Rows written.
    pub rows: usize,
    /// State after the last step.
    pub final_state: DensityMatrix,
    /// Largest `| |rho_gg| + |rho_ee| - 1 |` over all rows.
    pub max_population_drift: f64,
}

/// Summary of a file-producing run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Data file written.
    pub output: PathBuf,
    /// Integration details.
    pub report: IntegrationReport,
}

/// Integrates from the ground state across `grid`, writing the data file
/// format to `sink`.
///
/// Returns the flushed sink and a report.
///
/// # Errors
///
/// Returns any I/O error raised by `sink`.
pub fn integrate<W: Write>(
    params: &BlochParams,
    grid: &TimeGrid,
    sink: W,
) -> std::io::Result<(W, IntegrationReport)> {
    let mut writer = PopulationWriter::new(sink)?;
    let mut integrator = Integrator::new(*params, *grid, DensityMatrix::ground());
    let mut max_population_drift: f64 = 0.0;

    for sample in integrator.by_ref() {
        writer.write_sample(&sample)?;
        max_population_drift = max_population_drift.max((sample.ground + sample.excited - 1.0).abs());
    }

    let report = IntegrationReport {
        rows: writer.rows(),
        final_state: *integrator.state(),
        max_population_drift,
    };
    let sink = writer.finish()?;

    Ok((sink, report))
}

/// Integrates one Rabi period and writes the configured data file.
///
/// # Errors
///
/// Returns `BlochError::Io` if the data file cannot be created or written.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let path = config.output();
    let params = config.params();
    let grid = config.grid();

    debug!(
        gamma = params.gamma,
        omega = params.omega,
        delta = params.delta,
        period = grid.duration(),
        dt = grid.dt(),
        steps = grid.steps(),
        "Integrating optical Bloch equations"
    );

    let io_error = |source: std::io::Error| BlochError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let (_, report) = integrate(params, grid, BufWriter::new(file)).map_err(io_error)?;

    let (ground, excited) = report.final_state.populations();
    info!(
        output = %path.display(),
        rows = report.rows,
        ground,
        excited,
        max_population_drift = report.max_population_drift,
        "Integration complete"
    );

    Ok(RunSummary {
        output: path.to_path_buf(),
        report,
    })
}

/// Plots `data_file`, logging instead of failing.
///
/// Returns `true` if the plot succeeded.
pub fn render<P: Plotter + ?Sized>(plotter: &P, data_file: &Path) -> bool {
    match plotter.plot(data_file) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, data_file = %data_file.display(), "Plotting skipped");
            false
        }
    }
}
