use super::{ExchangeEigensystem, TwoSiteExchangeInput};
use crate::domain::ExchangeResult;

/// Peak positions (rad/s) of the two sites in the presence of exchange.
///
/// The line closer to its unperturbed position is reported first.
pub fn calculate_shift_ex_2st(input: &TwoSiteExchangeInput) -> ExchangeResult<(f64, f64)> {
    let eigensystem = ExchangeEigensystem::new(input)?;

    let mut nu1 = eigensystem.nu1.im;
    let mut nu2 = eigensystem.nu2.im;
    if nu1.abs() > nu2.abs() {
        std::mem::swap(&mut nu1, &mut nu2);
    }

    Ok((nu1, nu2))
}
