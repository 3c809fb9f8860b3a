use super::{ExchangeEigensystem, TwoSiteExchangeInput};
use crate::domain::{ExchangeError, ExchangeResult};
use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

/// Relative root separation below which the eigenbasis projection is undefined.
pub const DEGENERATE_ROOT_EPSILON: f64 = 1.0e-12;

/// Intensities of the major and minor peaks in the presence of exchange,
/// starting from longitudinal magnetizations `magz_a` and `magz_b`.
///
/// Each corrected value is projected on the real axis, keeping the sign of
/// its real half-plane.
pub fn correct_intensities(
    magz_a: f64,
    magz_b: f64,
    input: &TwoSiteExchangeInput,
) -> ExchangeResult<(f64, f64)> {
    let ExchangeEigensystem {
        kab,
        kba,
        k2ab,
        nu1,
        nu2,
        ..
    } = ensure_resolvable(ExchangeEigensystem::new(input)?)?;

    let separation = nu1 - nu2;
    let mut magz_a_c = ((kab - nu2 - k2ab) * magz_a + (kba + nu1 + k2ab) * magz_b) / separation;
    let mut magz_b_c = -((kab - nu1 - k2ab) * magz_a + (kba + nu2 + k2ab) * magz_b) / separation;

    if nu1.im.abs() > nu2.im.abs() {
        std::mem::swap(&mut magz_a_c, &mut magz_b_c);
    }

    Ok((signed_modulus(magz_a_c)?, signed_modulus(magz_b_c)?))
}

/// Corrected intensity of the major peak, or `None` when no intensities were
/// supplied.
pub fn calc_peak_intensity(
    pb: f64,
    kex: f64,
    dw: f64,
    intensities: Option<(f64, f64)>,
) -> ExchangeResult<Option<f64>> {
    let Some((magz_a, magz_b)) = intensities else {
        return Ok(None);
    };

    let input = TwoSiteExchangeInput::new(pb, kex, dw, 0.0, 0.0);
    let (magz_a, _) = correct_intensities(magz_a, magz_b, &input)?;
    Ok(Some(magz_a))
}

fn ensure_resolvable(eigensystem: ExchangeEigensystem) -> ExchangeResult<ExchangeEigensystem> {
    let separation = eigensystem.root_separation().norm();
    if separation <= DEGENERATE_ROOT_EPSILON * eigensystem.rate_scale() {
        return Err(ExchangeError::degenerate_exchange(
            "RUN.DEGENERATE_EXCHANGE",
            format!(
                "exchange roots coincide (|nu1 - nu2| = {separation:e}); intensities cannot be \
                 projected without exchange or a relaxation/shift difference between sites"
            ),
        ));
    }
    Ok(eigensystem)
}

fn signed_modulus(value: Complex64) -> ExchangeResult<f64> {
    if !value.is_finite() {
        return Err(ExchangeError::degenerate_exchange(
            "RUN.NON_FINITE_INTENSITY",
            format!("corrected intensity is not finite: {value}"),
        ));
    }

    if value.arg().abs() <= FRAC_PI_2 {
        Ok(value.norm())
    } else {
        Ok(-value.norm())
    }
}
