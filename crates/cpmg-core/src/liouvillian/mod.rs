//! Liouvillian of an isolated 15N spin, scalar coupled to its amide proton,
//! exchanging between two sites (A <-> B).
//!
//! The matrices are written in the 12x12 Cartesian basis
//! {Nx, Ny, Nz, 2HzNx, 2HzNy, 2HzNz}{a,b}. Thermal equilibrium is taken as
//! zero, which holds under the +/- phase cycling of the first 90 degree pulse
//! of the CPMG block.

pub mod state;

pub use state::{compute_2hznz_eq, get_atrz};

use crate::basis::{BasisOperator, BasisOperatorTable, IphAphBasis, LIOUVILLIAN_ORDER};
use crate::common::constants::PI;
use crate::domain::ExchangeParameters;
use crate::numerics::{DenseRealMatrix, accumulate_scaled, scaled};
use std::sync::OnceLock;

/// Free-precession matrix plus the two RF matrices, which are combined with
/// it separately while pulses are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Liouvillians {
    pub free: DenseRealMatrix,
    pub w1x: DenseRealMatrix,
    pub w1y: DenseRealMatrix,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiouvillianBuilder<B = IphAphBasis> {
    basis: B,
}

impl<B: BasisOperatorTable> LiouvillianBuilder<B> {
    pub fn new(basis: B) -> Self {
        Self { basis }
    }

    pub fn basis(&self) -> &B {
        &self.basis
    }

    pub fn compute_liouvillians(&self, params: &ExchangeParameters) -> Liouvillians {
        let mut free = DenseRealMatrix::zeros(LIOUVILLIAN_ORDER, LIOUVILLIAN_ORDER);
        for (operator, weight) in free_precession_terms(params) {
            accumulate_scaled(&mut free, self.basis.operator(operator), weight);
        }

        Liouvillians {
            free,
            w1x: scaled(self.basis.operator(BasisOperator::W1x), params.w1),
            w1y: scaled(self.basis.operator(BasisOperator::W1y), params.w1),
        }
    }
}

impl Default for LiouvillianBuilder<IphAphBasis> {
    fn default() -> Self {
        Self::new(IphAphBasis::new())
    }
}

/// Coefficient of every basis operator entering the free-precession matrix.
pub fn free_precession_terms(params: &ExchangeParameters) -> [(BasisOperator, f64); 13] {
    let rates = params.exchange_rates();

    [
        (BasisOperator::RIxy, params.r_nxy),
        (BasisOperator::R2SzIxy, params.r_2hznxy()),
        (BasisOperator::DrXy, params.dr_nxy),
        (BasisOperator::RIz, params.r_nz),
        (BasisOperator::R2SzIz, params.r_2hznz),
        (BasisOperator::Cs, params.cs_offset),
        (BasisOperator::Dw, params.dw),
        (BasisOperator::J, PI * params.j_hn),
        (BasisOperator::Dj, PI * params.dj_hn),
        (BasisOperator::EtaXy, params.etaxy),
        (BasisOperator::EtaZ, params.etaz),
        (BasisOperator::Kab, rates.kab),
        (BasisOperator::Kba, rates.kba),
    ]
}

/// Builds the Liouvillians with the in-phase/anti-phase basis.
pub fn compute_liouvillians(params: &ExchangeParameters) -> Liouvillians {
    static DEFAULT_BUILDER: OnceLock<LiouvillianBuilder> = OnceLock::new();
    DEFAULT_BUILDER
        .get_or_init(LiouvillianBuilder::default)
        .compute_liouvillians(params)
}
