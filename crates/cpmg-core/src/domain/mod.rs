pub mod errors;
pub mod parameters;

pub use errors::{ExchangeError, ExchangeErrorCategory, ExchangeResult};
pub use parameters::get_par;

use serde::{Deserialize, Serialize};

/// Physical parameters of a two-site (A <-> B) exchanging 15N-1H spin system.
///
/// Rates are in s^-1, shifts and offsets in rad/s and scalar couplings in Hz.
/// Missing fields fall back to [`ExchangeParameters::default`] when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExchangeParameters {
    /// Fractional population of state B.
    pub pb: f64,
    /// Exchange rate between states A and B.
    pub kex: f64,
    /// Chemical shift difference between states A and B.
    pub dw: f64,
    /// Transverse relaxation rate of state A.
    pub r_nxy: f64,
    /// Transverse relaxation rate difference between states B and A.
    pub dr_nxy: f64,
    /// Longitudinal relaxation rate.
    pub r_nz: f64,
    /// Two-spin order longitudinal relaxation rate.
    pub r_2hznz: f64,
    pub etaxy: f64,
    pub etaz: f64,
    /// N-HN scalar coupling.
    pub j_hn: f64,
    /// N-HN scalar coupling difference between states B and A.
    pub dj_hn: f64,
    /// Offset from the carrier.
    pub cs_offset: f64,
    /// RF field strength.
    pub w1: f64,
}

impl Default for ExchangeParameters {
    fn default() -> Self {
        Self {
            pb: 0.0,
            kex: 0.0,
            dw: 0.0,
            r_nxy: 5.0,
            dr_nxy: 0.0,
            r_nz: 1.5,
            r_2hznz: 5.0,
            etaxy: 0.0,
            etaz: 0.0,
            j_hn: -93.0,
            dj_hn: 0.0,
            cs_offset: 0.0,
            w1: 0.0,
        }
    }
}

impl ExchangeParameters {
    pub fn exchange_rates(&self) -> ExchangeRates {
        ExchangeRates::new(self.pb, self.kex)
    }

    /// Two-spin order transverse relaxation rate. Fixed by the one-spin
    /// transverse and the two longitudinal rates.
    pub fn r_2hznxy(&self) -> f64 {
        self.r_nxy + self.r_2hznz - self.r_nz
    }

    pub fn validate(&self) -> ExchangeResult<()> {
        validate_population(self.pb)?;
        validate_exchange_rate(self.kex)
    }
}

/// Forward and backward rates of the A <-> B exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRates {
    pub kab: f64,
    pub kba: f64,
}

impl ExchangeRates {
    pub fn new(pb: f64, kex: f64) -> Self {
        let kab = kex * pb;
        Self {
            kab,
            kba: kex - kab,
        }
    }

    pub fn kex(&self) -> f64 {
        self.kab + self.kba
    }
}

pub fn validate_population(pb: f64) -> ExchangeResult<()> {
    if !(0.0..=1.0).contains(&pb) {
        return Err(ExchangeError::invalid_parameter(
            "INPUT.POPULATION",
            format!("population of state B must lie in [0, 1], got {pb}"),
        ));
    }
    Ok(())
}

pub fn validate_exchange_rate(kex: f64) -> ExchangeResult<()> {
    if !kex.is_finite() || kex < 0.0 {
        return Err(ExchangeError::invalid_parameter(
            "INPUT.EXCHANGE_RATE",
            format!("exchange rate must be finite and non-negative, got {kex}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ExchangeErrorCategory, ExchangeParameters, ExchangeRates};

    #[test]
    fn defaults_describe_a_non_exchanging_amide() {
        let params = ExchangeParameters::default();
        assert_eq!(params.pb, 0.0);
        assert_eq!(params.kex, 0.0);
        assert_eq!(params.r_nxy, 5.0);
        assert_eq!(params.r_nz, 1.5);
        assert_eq!(params.r_2hznz, 5.0);
        assert_eq!(params.j_hn, -93.0);
        assert_eq!(params.r_2hznxy(), 8.5);
    }

    #[test]
    fn exchange_rates_split_kex_by_population() {
        let rates = ExchangeRates::new(0.25, 200.0);
        assert_eq!(rates.kab, 50.0);
        assert_eq!(rates.kba, 150.0);
        assert_eq!(rates.kex(), 200.0);
    }

    #[test]
    fn validate_rejects_out_of_range_population_and_rate() {
        let params = ExchangeParameters {
            pb: 1.5,
            ..ExchangeParameters::default()
        };
        let error = params.validate().expect_err("pb > 1 should be rejected");
        assert_eq!(error.category(), ExchangeErrorCategory::InvalidParameter);
        assert_eq!(error.placeholder(), "INPUT.POPULATION");

        let params = ExchangeParameters {
            kex: -1.0,
            ..ExchangeParameters::default()
        };
        let error = params.validate().expect_err("negative kex should be rejected");
        assert_eq!(error.placeholder(), "INPUT.EXCHANGE_RATE");

        let params = ExchangeParameters {
            pb: f64::NAN,
            ..ExchangeParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn deserialization_fills_missing_fields_with_defaults() {
        let params: ExchangeParameters =
            serde_json::from_str(r#"{ "pb": 0.1, "kex": 300.0 }"#).expect("params should parse");
        assert_eq!(params.pb, 0.1);
        assert_eq!(params.kex, 300.0);
        assert_eq!(params.j_hn, -93.0);

        let unknown = serde_json::from_str::<ExchangeParameters>(r#"{ "pB": 0.1 }"#);
        assert!(unknown.is_err());
    }
}
