//! Splitting of a resonance by scalar couplings into a weighted line list.

use crate::common::constants::PI;
use crate::domain::{ExchangeError, ExchangeResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MultipletLine {
    /// Offset from the uncoupled resonance, in rad/s.
    pub frequency: f64,
    pub weight: f64,
}

impl MultipletLine {
    pub const fn new(frequency: f64, weight: f64) -> Self {
        Self { frequency, weight }
    }
}

/// Expands `couplings` (Hz) into lines at +/- j*pi around each starting line.
///
/// The starting lines default to a single line at 0.0. Lines landing on the
/// same frequency are merged, and the result is sorted by frequency. The
/// number of components doubles with every coupling.
pub fn calc_multiplet(
    couplings: &[f64],
    multiplet: Option<&[f64]>,
) -> ExchangeResult<Vec<MultipletLine>> {
    if let Some((index, coupling)) = couplings
        .iter()
        .enumerate()
        .find(|(_, coupling)| !coupling.is_finite())
    {
        return Err(ExchangeError::invalid_input(
            "INPUT.COUPLING",
            format!("coupling #{index} is not a finite number: {coupling}"),
        ));
    }

    let start = multiplet.unwrap_or(&[0.0]);
    if start.is_empty() || start.iter().any(|frequency| !frequency.is_finite()) {
        return Err(ExchangeError::invalid_input(
            "INPUT.MULTIPLET",
            "starting multiplet must hold at least one finite frequency",
        ));
    }

    let components = couplings
        .iter()
        .rev()
        .fold(start.to_vec(), |components, &coupling| {
            split_components(&components, coupling)
        });

    Ok(group_components(components))
}

fn split_components(components: &[f64], coupling: f64) -> Vec<f64> {
    let offset = coupling * PI;
    components
        .iter()
        .flat_map(|&frequency| [frequency + offset, frequency - offset])
        .collect()
}

fn group_components(mut components: Vec<f64>) -> Vec<MultipletLine> {
    let total = components.len() as f64;
    components.sort_unstable_by(f64::total_cmp);

    let mut lines: Vec<(f64, usize)> = Vec::new();
    for frequency in components {
        match lines.last_mut() {
            Some((last, count)) if *last == frequency => *count += 1,
            _ => lines.push((frequency, 1)),
        }
    }

    lines
        .into_iter()
        .map(|(frequency, count)| MultipletLine::new(frequency, count as f64 / total))
        .collect()
}
