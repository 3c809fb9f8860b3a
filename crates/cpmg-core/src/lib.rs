//! Two-site chemical exchange kernel for CPMG relaxation dispersion.
//!
//! The crate builds the Liouvillian and equilibrium state of an exchanging
//! 15N spin, projects propagated states back onto per-site magnetization, and
//! evaluates closed-form exchange corrections to peak positions and
//! intensities along with scalar-coupling multiplets. Every function is pure.

pub mod basis;
pub mod common;
pub mod domain;
pub mod exchange;
pub mod liouvillian;
pub mod multiplet;
pub mod numerics;
pub mod relaxation;

pub use basis::{BasisOperator, BasisOperatorTable, IphAphBasis};
pub use domain::{ExchangeError, ExchangeErrorCategory, ExchangeParameters, ExchangeResult};
pub use exchange::{
    TwoSiteExchangeInput, calc_peak_intensity, calculate_shift_ex_2st, correct_intensities,
};
pub use liouvillian::{
    LiouvillianBuilder, Liouvillians, compute_2hznz_eq, compute_liouvillians, get_atrz,
};
pub use multiplet::{MultipletLine, calc_multiplet};
pub use relaxation::compute_nh_etaz;
