//! Closed-form corrections for the position and intensity of the two peaks of
//! a spin exchanging between sites A and B.
//!
//! Both corrections diagonalize the same 2x2 exchange problem
//!
//! ```text
//! | -k2ab   kba  |
//! |  kab   -k2ba |
//! ```
//!
//! with `k2ab = r_ixy + kab` and `k2ba = r_ixy + dr_ixy - i dw + kba`. Complex
//! square roots use the principal branch (non-negative real part), which is
//! what [`Complex64::sqrt`] returns.

pub mod intensity;
pub mod shift;

pub use intensity::{calc_peak_intensity, correct_intensities};
pub use shift::calculate_shift_ex_2st;

use crate::domain::{
    ExchangeRates, ExchangeResult, validate_exchange_rate, validate_population,
};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Exchange and relaxation parameters entering the peak corrections.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TwoSiteExchangeInput {
    pub pb: f64,
    pub kex: f64,
    pub dw: f64,
    pub r_ixy: f64,
    pub dr_ixy: f64,
}

impl TwoSiteExchangeInput {
    pub fn new(pb: f64, kex: f64, dw: f64, r_ixy: f64, dr_ixy: f64) -> Self {
        Self {
            pb,
            kex,
            dw,
            r_ixy,
            dr_ixy,
        }
    }
}

/// Eigenvalues of the 2x2 exchange problem and the rates they were built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeEigensystem {
    pub kab: f64,
    pub kba: f64,
    pub k2ab: Complex64,
    pub k2ba: Complex64,
    pub nu1: Complex64,
    pub nu2: Complex64,
}

impl ExchangeEigensystem {
    pub fn new(input: &TwoSiteExchangeInput) -> ExchangeResult<Self> {
        validate_population(input.pb)?;
        validate_exchange_rate(input.kex)?;

        let ExchangeRates { kab, kba } = ExchangeRates::new(input.pb, input.kex);
        let k2ab = Complex64::new(input.r_ixy + kab, 0.0);
        let k2ba = Complex64::new(input.r_ixy + input.dr_ixy + kba, -input.dw);

        let k2ex = k2ab + k2ba;
        let difference = k2ab - k2ba;
        let fac = (difference * difference + 4.0 * kab * kba).sqrt();

        Ok(Self {
            kab,
            kba,
            k2ab,
            k2ba,
            nu1: (-k2ex + fac) * 0.5,
            nu2: (-k2ex - fac) * 0.5,
        })
    }

    /// Largest modulus among the effective rates; sets the scale below which
    /// the two roots count as coincident.
    pub fn rate_scale(&self) -> f64 {
        self.k2ab.norm().max(self.k2ba.norm())
    }

    pub fn root_separation(&self) -> Complex64 {
        self.nu1 - self.nu2
    }
}

#[cfg(test)]
mod tests {
    use super::{ExchangeEigensystem, TwoSiteExchangeInput};

    #[test]
    fn roots_sum_to_minus_trace_and_multiply_to_determinant() {
        let input = TwoSiteExchangeInput::new(0.1, 100.0, 500.0, 10.0, 2.0);
        let eigensystem = ExchangeEigensystem::new(&input).expect("valid input");

        let trace = eigensystem.k2ab + eigensystem.k2ba;
        let determinant =
            eigensystem.k2ab * eigensystem.k2ba - eigensystem.kab * eigensystem.kba;

        assert!((eigensystem.nu1 + eigensystem.nu2 + trace).norm() <= 1.0e-9);
        assert!((eigensystem.nu1 * eigensystem.nu2 - determinant).norm() <= 1.0e-6);
    }

    #[test]
    fn principal_branch_keeps_first_root_closer_to_zero_decay() {
        let input = TwoSiteExchangeInput::new(0.3, 5000.0, 300.0, 0.0, 0.0);
        let eigensystem = ExchangeEigensystem::new(&input).expect("valid input");
        assert!(eigensystem.root_separation().re >= 0.0);
        assert!(eigensystem.nu1.re >= eigensystem.nu2.re);
    }

    #[test]
    fn invalid_population_is_rejected_before_solving() {
        let input = TwoSiteExchangeInput::new(-0.1, 100.0, 0.0, 0.0, 0.0);
        let error = ExchangeEigensystem::new(&input).expect_err("negative pb");
        assert_eq!(error.placeholder(), "INPUT.POPULATION");

        let input = TwoSiteExchangeInput::new(0.1, f64::INFINITY, 0.0, 0.0, 0.0);
        let error = ExchangeEigensystem::new(&input).expect_err("infinite kex");
        assert_eq!(error.placeholder(), "INPUT.EXCHANGE_RATE");
    }
}
