use crate::basis::{CartesianComponent, LIOUVILLIAN_ORDER, Site, state_index};
use crate::domain::{ExchangeError, ExchangeResult};
use crate::numerics::{DenseRealMatrix, ensure_shape};

/// Starting magnetization entirely in 2HzNz, split between the sites by
/// population.
pub fn compute_2hznz_eq(pb: f64) -> DenseRealMatrix {
    let mut mag_eq = DenseRealMatrix::zeros(LIOUVILLIAN_ORDER, 1);
    mag_eq[(state_index(Site::A, CartesianComponent::HzNz), 0)] += 1.0 - pb;
    mag_eq[(state_index(Site::B, CartesianComponent::HzNz), 0)] += pb;
    mag_eq
}

/// Longitudinal magnetization (Nz + 2HzNz) of each site.
pub fn get_atrz(mag: &DenseRealMatrix) -> ExchangeResult<(f64, f64)> {
    ensure_shape(mag, LIOUVILLIAN_ORDER, 1)
        .map_err(|error| ExchangeError::invalid_input("INPUT.STATE_SHAPE", error.to_string()))?;

    Ok((site_longitudinal(mag, Site::A), site_longitudinal(mag, Site::B)))
}

fn site_longitudinal(mag: &DenseRealMatrix, site: Site) -> f64 {
    mag[(state_index(site, CartesianComponent::HzNz), 0)]
        + mag[(state_index(site, CartesianComponent::Nz), 0)]
}
