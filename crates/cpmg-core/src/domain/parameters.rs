use super::{ExchangeError, ExchangeResult};
use std::collections::BTreeMap;

/// Resolve `name` against the fitted parameter vector first, then against the
/// fixed parameters.
pub fn get_par(
    name: &str,
    values: &[f64],
    indexes: &BTreeMap<String, usize>,
    fixed: &BTreeMap<String, f64>,
) -> ExchangeResult<f64> {
    if let Some(&index) = indexes.get(name) {
        return values.get(index).copied().ok_or_else(|| {
            ExchangeError::invalid_input(
                "INPUT.PARAMETER_INDEX",
                format!(
                    "parameter '{name}' maps to index {index} but only {} values were supplied",
                    values.len()
                ),
            )
        });
    }

    fixed.get(name).copied().ok_or_else(|| {
        ExchangeError::invalid_input(
            "INPUT.PARAMETER_NAME",
            format!("parameter '{name}' is neither fitted nor fixed"),
        )
    })
}
