//! Cross-correlated relaxation estimates for the amide 15N-1H spin pair.

use crate::common::constants::{GAMMA_H, GAMMA_N, HBAR, MU_0, PI, SQRT3};

/// 15N chemical shift anisotropy, in ppm.
pub const DELTA_CSA_NH: f64 = -166.0;
/// N-H bond length, in meters.
pub const R_NH: f64 = 1.04e-10;
/// Angle between the N-H bond and the CSA tensor principal axis, in degrees.
pub const CSA_DIPOLE_ANGLE_DEG: f64 = 19.6;

/// Approximates the longitudinal NH-dipolar/N-CSA cross-correlated rate from
/// the longitudinal rate `r_nz`, assuming the spectral density at the 15N
/// frequency dominates.
///
/// `ppm_to_rads` converts 15N ppm to rad/s at the working field. This is only
/// an estimate: cross-correlated rates stay zero in the Liouvillian unless
/// supplied explicitly.
pub fn compute_nh_etaz(r_nz: f64, ppm_to_rads: f64) -> f64 {
    let angle = CSA_DIPOLE_ANGLE_DEG / 180.0 * PI;
    let geo_factor = 0.5 * (3.0 * angle.cos().powi(2) - 1.0);

    let cc = DELTA_CSA_NH * ppm_to_rads / SQRT3;
    let dd = -MU_0 * HBAR * GAMMA_H * GAMMA_N / (4.0 * PI * R_NH.powi(3));

    let jwn = r_nz / (cc * cc + 0.75 * dd * dd);

    SQRT3 * geo_factor * cc * dd * jwn
}
