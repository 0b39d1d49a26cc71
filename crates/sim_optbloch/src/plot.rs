//! Optional visualisation through an external plotting program.
//!
//! Nothing in the integrator depends on this module. A failed plot is
//! reported to the caller and never invalidates the data file.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::PlotError;

/// Default plotting program.
pub const GNUPLOT: &str = "gnuplot";

/// Default transient script file name.
pub const SCRIPT_NAME: &str = "tmp.gp";

/// Renders a population data file.
pub trait Plotter {
    /// Plots `data_file`, blocking until the plot program returns.
    fn plot(&self, data_file: &Path) -> Result<(), PlotError>;
}

/// Script plotting `|rho_gg|` (column 2) and `|rho_ee|` (column 3) against t.
///
/// ```rust
/// use std::path::Path;
/// use sim_optbloch::plot::plot_script;
///
/// assert_eq!(
///     plot_script(Path::new("rho.txt")),
///     "plot 'rho.txt' using 1:2 w l, \\\n'rho.txt' using 1:3 w l\n"
/// );
/// ```
pub fn plot_script(data_file: &Path) -> String {
    // gnuplot escapes a quote inside a single-quoted string by doubling it.
    let quoted = data_file.display().to_string().replace('\'', "''");
    format!(
        "plot '{0}' using 1:2 w l, \\\n'{0}' using 1:3 w l\n",
        quoted
    )
}

/// Runs `gnuplot -persist <script>` on a transient script file.
///
/// The script is written next to the data file and removed afterwards,
/// whether or not the program succeeded.
#[derive(Clone, Debug)]
pub struct GnuplotPlotter {
    program: String,
    script_name: String,
}

impl Default for GnuplotPlotter {
    fn default() -> Self {
        Self::with_program(GNUPLOT)
    }
}

impl GnuplotPlotter {
    /// Uses the gnuplot-compatible `program` instead of `gnuplot`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            script_name: SCRIPT_NAME.to_string(),
        }
    }

    /// Path of the transient script for `data_file`.
    pub fn script_path(&self, data_file: &Path) -> PathBuf {
        match data_file.parent() {
            Some(dir) => dir.join(&self.script_name),
            None => PathBuf::from(&self.script_name),
        }
    }

    fn run(&self, script: &Path) -> Result<(), PlotError> {
        let status = Command::new(&self.program)
            .arg("-persist")
            .arg(script)
            .status()
            .map_err(|source| PlotError::ToolUnavailable {
                tool: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PlotError::ToolFailed {
                tool: self.program.clone(),
                status,
            })
        }
    }
}

impl Plotter for GnuplotPlotter {
    fn plot(&self, data_file: &Path) -> Result<(), PlotError> {
        let script = self.script_path(data_file);
        std::fs::write(&script, plot_script(data_file)).map_err(|source| PlotError::Script {
            path: script.clone(),
            source,
        })?;

        debug!(program = %self.program, script = %script.display(), "Invoking plotter");
        let result = self.run(&script);

        if let Err(e) = std::fs::remove_file(&script) {
            warn!(script = %script.display(), error = %e, "Could not remove plot script");
        }

        result
    }
}
