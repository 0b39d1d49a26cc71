//! End-to-end tests for the Bloch integrator.
//!
//! # Test Categories
//!
//! 1. **Trajectory**: row count and population conservation over one period
//! 2. **Physics**: driven population transfer and known end state
//! 3. **Data file**: header and row format of a file written by `run`
//! 4. **Step size**: first-order convergence of forward Euler

use std::path::Path;

use approx::assert_abs_diff_eq;
use sim_optbloch::config::RunConfig;
use sim_optbloch::integrator::{Integrator, TimeGrid, DEFAULT_STEPS};
use sim_optbloch::output::HEADER;
use sim_optbloch::params::BlochParams;
use sim_optbloch::run::{integrate, run};
use sim_optbloch::state::DensityMatrix;

/// Parses one data row into three floats, checking the scientific format.
fn parse_row(line: &str) -> [f64; 3] {
    let fields: Vec<&str> = line.split_whitespace().collect();
    assert_eq!(fields.len(), 3, "row {:?} does not have three fields", line);

    let mut values = [0.0; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        let (mantissa, exponent) = field
            .split_once('e')
            .unwrap_or_else(|| panic!("field {:?} is not in scientific notation", field));
        assert_eq!(mantissa.split_once('.').map(|(_, d)| d.len()), Some(3));
        assert!(exponent.starts_with('+') || exponent.starts_with('-'));
        *value = field.parse().expect("numeric field");
    }
    values
}

// ============================================================================
// Trajectory
// ============================================================================

#[test]
fn test_one_period_row_count_and_conservation() {
    let params = BlochParams::new(500e3, 500e3, -500e3).unwrap();
    let grid = TimeGrid::new(2.0 * std::f64::consts::PI / params.omega, DEFAULT_STEPS).unwrap();

    let mut rows = 0;
    for sample in Integrator::new(params, grid, DensityMatrix::ground()) {
        rows += 1;
        assert_abs_diff_eq!(sample.ground + sample.excited, 1.0, epsilon = 1e-9);
        assert!(sample.t < grid.duration());
    }
    assert_eq!(rows, 10_000);
}

#[test]
fn test_coherences_stay_conjugate_over_trajectory() {
    let params = BlochParams::default();
    let grid = TimeGrid::one_period(&params, DEFAULT_STEPS).unwrap();
    let mut integrator = Integrator::new(params, grid, DensityMatrix::ground());

    while integrator.next().is_some() {
        assert!(integrator.state().is_hermitian());
    }
}

// ============================================================================
// Physics
// ============================================================================

#[test]
fn test_end_of_period_populations() {
    let params = BlochParams::default();
    let grid = TimeGrid::one_period(&params, DEFAULT_STEPS).unwrap();
    let (_, report) = integrate(&params, &grid, std::io::sink()).unwrap();

    let (ground, excited) = report.final_state.populations();
    assert_abs_diff_eq!(ground, 0.853_576_619, epsilon = 1e-6);
    assert_abs_diff_eq!(excited, 0.146_423_381, epsilon = 1e-6);
    assert!(report.max_population_drift < 1e-9);
}

#[test]
fn test_resonant_undamped_rabi_flop() {
    // Without decay or detuning the excited population follows sin^2(Omega t / 2),
    // so half a period empties the ground state.
    let params = BlochParams::new(0.0, 1.0, 0.0).unwrap();
    let grid = TimeGrid::new(std::f64::consts::PI, 100_000).unwrap();
    let rows: Vec<_> = Integrator::new(params, grid, DensityMatrix::ground()).collect();

    let last = rows.last().unwrap();
    assert_abs_diff_eq!(last.excited, 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(last.ground, 0.0, epsilon = 1e-3);
}

#[test]
fn test_excited_population_bounded() {
    let params = BlochParams::default();
    let grid = TimeGrid::one_period(&params, DEFAULT_STEPS).unwrap();

    for sample in Integrator::new(params, grid, DensityMatrix::ground()) {
        assert!((0.0..=1.0).contains(&sample.excited));
        assert!((0.0..=1.0).contains(&sample.ground));
    }
}

// ============================================================================
// Step size
// ============================================================================

#[test]
fn test_first_order_convergence() {
    // Halving dt roughly halves the end-of-period error against a fine reference.
    let params = BlochParams::default();
    let end_state = |steps| {
        let grid = TimeGrid::one_period(&params, steps).unwrap();
        let mut integrator = Integrator::new(params, grid, DensityMatrix::ground());
        integrator.by_ref().for_each(drop);
        *integrator.state()
    };
    let distance = |a: DensityMatrix, b: DensityMatrix| {
        (a.rho_gg - b.rho_gg).norm()
            + (a.rho_ee - b.rho_ee).norm()
            + (a.rho_ge - b.rho_ge).norm()
            + (a.rho_eg - b.rho_eg).norm()
    };

    let reference = end_state(1_000_000);
    let coarse = distance(end_state(1_000), reference);
    let fine = distance(end_state(2_000), reference);

    let ratio = coarse / fine;
    assert!(
        (1.6..2.4).contains(&ratio),
        "error ratio {} not consistent with a first-order method",
        ratio
    );
}

// ============================================================================
// Data file
// ============================================================================

#[test]
fn test_run_writes_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rho.txt");
    let config = RunConfig::builder().output(&path).build().unwrap();

    let summary = run(&config).unwrap();
    assert_eq!(summary.output, path);
    assert_eq!(summary.report.rows, DEFAULT_STEPS);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(lines.next(), Some("0.000e+00 1.000e+00 0.000e+00"));

    let rows: Vec<[f64; 3]> = text.lines().skip(1).map(parse_row).collect();
    assert_eq!(rows.len(), DEFAULT_STEPS);

    // Times are non-decreasing at three-digit precision.
    assert!(rows.windows(2).all(|w| w[0][0] <= w[1][0]));
    assert_eq!(text.lines().last(), Some("1.257e-05 8.536e-01 1.464e-01"));
}

#[test]
fn test_run_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rho.txt");
    std::fs::write(&path, "stale\n".repeat(100)).unwrap();

    let config = RunConfig::builder().output(&path).steps(10).build().unwrap();
    run(&config).unwrap();

    let text = std::fs::read_to_string(Path::new(&path)).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(!text.contains("stale"));
}
