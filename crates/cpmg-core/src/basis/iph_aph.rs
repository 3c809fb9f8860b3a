//! In-phase/anti-phase two-state basis {Nx, Ny, Nz, 2HzNx, 2HzNy, 2HzNz}{a,b}.
//!
//! Matrices act on column state vectors as `d/dt m = L m`, so relaxation
//! terms carry a negative sign and coherent terms are antisymmetric.

use super::{
    BasisOperator, BasisOperatorTable, CartesianComponent, LIOUVILLIAN_ORDER, Site, state_index,
};
use super::CartesianComponent::{HzNx, HzNy, HzNz, Nx, Ny, Nz};
use crate::numerics::DenseRealMatrix;

const BOTH_SITES: [Site; 2] = [Site::A, Site::B];
const SITE_B: [Site; 1] = [Site::B];
const ALL_COMPONENTS: [CartesianComponent; 6] = [Nx, Ny, Nz, HzNx, HzNy, HzNz];

#[derive(Debug, Clone, PartialEq)]
pub struct IphAphBasis {
    operators: [DenseRealMatrix; 15],
}

impl IphAphBasis {
    pub fn new() -> Self {
        Self {
            operators: BasisOperator::ALL.map(build_operator),
        }
    }
}

impl Default for IphAphBasis {
    fn default() -> Self {
        Self::new()
    }
}

impl BasisOperatorTable for IphAphBasis {
    fn operator(&self, operator: BasisOperator) -> &DenseRealMatrix {
        &self.operators[operator.index()]
    }
}

fn build_operator(operator: BasisOperator) -> DenseRealMatrix {
    let mut matrix = DenseRealMatrix::zeros(LIOUVILLIAN_ORDER, LIOUVILLIAN_ORDER);

    match operator {
        BasisOperator::RIxy => relax(&mut matrix, &BOTH_SITES, &[Nx, Ny]),
        BasisOperator::R2SzIxy => relax(&mut matrix, &BOTH_SITES, &[HzNx, HzNy]),
        BasisOperator::DrXy => relax(&mut matrix, &SITE_B, &[Nx, Ny, HzNx, HzNy]),
        BasisOperator::RIz => relax(&mut matrix, &BOTH_SITES, &[Nz]),
        BasisOperator::R2SzIz => relax(&mut matrix, &BOTH_SITES, &[HzNz]),
        BasisOperator::Cs => rotate(&mut matrix, &BOTH_SITES, &[(Nx, Ny), (HzNx, HzNy)]),
        BasisOperator::Dw => rotate(&mut matrix, &SITE_B, &[(Nx, Ny), (HzNx, HzNy)]),
        BasisOperator::J => rotate(&mut matrix, &BOTH_SITES, &[(Nx, HzNy), (HzNx, Ny)]),
        BasisOperator::Dj => rotate(&mut matrix, &SITE_B, &[(Nx, HzNy), (HzNx, Ny)]),
        BasisOperator::EtaXy => cross_relax(&mut matrix, &[(Nx, HzNx), (Ny, HzNy)]),
        BasisOperator::EtaZ => cross_relax(&mut matrix, &[(Nz, HzNz)]),
        BasisOperator::Kab => exchange(&mut matrix, Site::A, Site::B),
        BasisOperator::Kba => exchange(&mut matrix, Site::B, Site::A),
        BasisOperator::W1x => rotate(&mut matrix, &BOTH_SITES, &[(Ny, Nz), (HzNy, HzNz)]),
        BasisOperator::W1y => rotate(&mut matrix, &BOTH_SITES, &[(Nz, Nx), (HzNz, HzNx)]),
    }

    matrix
}

fn relax(matrix: &mut DenseRealMatrix, sites: &[Site], components: &[CartesianComponent]) {
    for &site in sites {
        for &component in components {
            let index = state_index(site, component);
            matrix[(index, index)] = -1.0;
        }
    }
}

/// Positive rotation carrying `from` into `to`: `d(to)/dt = +from`,
/// `d(from)/dt = -to`.
fn rotate(
    matrix: &mut DenseRealMatrix,
    sites: &[Site],
    pairs: &[(CartesianComponent, CartesianComponent)],
) {
    for &site in sites {
        for &(from, to) in pairs {
            let from = state_index(site, from);
            let to = state_index(site, to);
            matrix[(to, from)] = 1.0;
            matrix[(from, to)] = -1.0;
        }
    }
}

fn cross_relax(matrix: &mut DenseRealMatrix, pairs: &[(CartesianComponent, CartesianComponent)]) {
    for site in BOTH_SITES {
        for &(lhs, rhs) in pairs {
            let lhs = state_index(site, lhs);
            let rhs = state_index(site, rhs);
            matrix[(lhs, rhs)] = -1.0;
            matrix[(rhs, lhs)] = -1.0;
        }
    }
}

fn exchange(matrix: &mut DenseRealMatrix, source: Site, target: Site) {
    for component in ALL_COMPONENTS {
        let from = state_index(source, component);
        let to = state_index(target, component);
        matrix[(from, from)] = -1.0;
        matrix[(to, from)] = 1.0;
    }
}
