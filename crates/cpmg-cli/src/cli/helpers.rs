use super::CliError;
use anyhow::Context;
use cpmg_core::numerics::{DenseRealMatrix, column_entries, matrix_rows};
use cpmg_core::{ExchangeError, ExchangeParameters, Liouvillians};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub(super) struct LiouvillianReport {
    pub(super) free: Vec<Vec<f64>>,
    pub(super) w1x: Vec<Vec<f64>>,
    pub(super) w1y: Vec<Vec<f64>>,
}

impl From<&Liouvillians> for LiouvillianReport {
    fn from(liouvillians: &Liouvillians) -> Self {
        Self {
            free: matrix_rows(&liouvillians.free),
            w1x: matrix_rows(&liouvillians.w1x),
            w1y: matrix_rows(&liouvillians.w1y),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct EquilibriumReport {
    pub(super) state: Vec<f64>,
    pub(super) magz_a: f64,
    pub(super) magz_b: f64,
}

impl EquilibriumReport {
    pub(super) fn new(state: &DenseRealMatrix, (magz_a, magz_b): (f64, f64)) -> Self {
        Self {
            state: column_entries(state, 0),
            magz_a,
            magz_b,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ShiftReport {
    pub(super) nu1: f64,
    pub(super) nu2: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct IntensityReport {
    pub(super) magz_a: f64,
    pub(super) magz_b: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct EtazReport {
    pub(super) ppm_to_rads: f64,
    pub(super) etaz: f64,
}

pub(super) fn load_parameters(path: &Path) -> Result<ExchangeParameters, CliError> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file '{}'", path.display()))?;

    serde_json::from_str(&source).map_err(|error| {
        CliError::Compute(ExchangeError::invalid_input(
            "INPUT.PARAMETER_FILE",
            format!("failed to parse parameter file '{}': {error}", path.display()),
        ))
    })
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<i32, CliError> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON output")?;
    println!("{rendered}");
    Ok(0)
}
