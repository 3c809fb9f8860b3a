//! Physical constants shared by the relaxation kernels.
//!
//! Gyromagnetic ratios are in rad s^-1 T^-1; the remaining values are CODATA
//! SI constants.

pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const SQRT3: f64 = 1.732_050_807_568_877_2_f64;
pub const RADDEG: f64 = 180.0 / PI;

pub const GAMMA_H: f64 = 26.752_212_8e7_f64;
pub const GAMMA_N: f64 = -2.7126e7_f64;
pub const GAMMA_C: f64 = 6.728e7_f64;

pub const HBAR: f64 = 1.054_571_817e-34_f64;
pub const MU_0: f64 = 1.256_637_062_12e-6_f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum Nucleus {
    H1,
    N15,
    C13,
}

impl Nucleus {
    pub const fn gamma(self) -> f64 {
        match self {
            Self::H1 => GAMMA_H,
            Self::N15 => GAMMA_N,
            Self::C13 => GAMMA_C,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "1H",
            Self::N15 => "15N",
            Self::C13 => "13C",
        }
    }
}

/// Conversion factor from ppm to rad/s for `nucleus` on a spectrometer whose
/// proton Larmor frequency is `proton_larmor_mhz`.
pub fn ppm_to_rads(nucleus: Nucleus, proton_larmor_mhz: f64) -> f64 {
    TWO_PI * proton_larmor_mhz * (nucleus.gamma() / GAMMA_H).abs()
}

#[cfg(test)]
mod tests {
    use super::{GAMMA_C, GAMMA_H, GAMMA_N, HBAR, MU_0, Nucleus, PI, RADDEG, SQRT3, TWO_PI};
    use super::ppm_to_rads;

    #[test]
    fn constants_match_expected_relationships() {
        assert!((TWO_PI - 2.0 * PI).abs() <= 1.0e-15);
        assert!((RADDEG * PI - 180.0).abs() <= 1.0e-12);
        assert!((SQRT3 * SQRT3 - 3.0).abs() <= 1.0e-15);
        assert!((MU_0 - 4.0 * PI * 1.0e-7).abs() <= 1.0e-15);
    }

    #[test]
    fn gyromagnetic_ratios_keep_their_signs() {
        assert!(GAMMA_H > 0.0);
        assert!(GAMMA_N < 0.0);
        assert!(GAMMA_C > 0.0);
        assert!(HBAR.is_finite() && HBAR > 0.0);
    }

    #[test]
    fn proton_ppm_is_one_hertz_per_megahertz() {
        let factor = ppm_to_rads(Nucleus::H1, 600.0);
        assert!((factor - TWO_PI * 600.0).abs() <= 1.0e-9);
    }

    #[test]
    fn nitrogen_ppm_scales_with_gamma_ratio() {
        let factor = ppm_to_rads(Nucleus::N15, 600.0);
        assert!((factor - 382.258_512_781_911_2).abs() <= 1.0e-9);
        assert!(factor > 0.0);
        assert_eq!(Nucleus::N15.as_str(), "15N");
    }
}
