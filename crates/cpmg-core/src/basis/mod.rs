//! Named basis operators of the two-state {Nx, Ny, Nz, 2HzNx, 2HzNy, 2HzNz}
//! Cartesian basis and the table abstraction the Liouvillian builder reads
//! them through.

pub mod iph_aph;

pub use iph_aph::IphAphBasis;

use crate::numerics::DenseRealMatrix;
use std::fmt::{Display, Formatter};

/// Order of the two-state Liouvillian: six Cartesian operators per site.
pub const LIOUVILLIAN_ORDER: usize = 12;
/// Offset of the site B block inside a state vector.
pub const SITE_B_OFFSET: usize = 6;

/// Position of a Cartesian operator inside one site block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartesianComponent {
    Nx = 0,
    Ny = 1,
    Nz = 2,
    HzNx = 3,
    HzNy = 4,
    HzNz = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    A,
    B,
}

impl Site {
    pub const fn offset(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => SITE_B_OFFSET,
        }
    }
}

/// Row/column of `component` on `site` in the 12-dimensional basis.
pub const fn state_index(site: Site, component: CartesianComponent) -> usize {
    site.offset() + component as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisOperator {
    RIxy,
    R2SzIxy,
    DrXy,
    RIz,
    R2SzIz,
    Cs,
    Dw,
    J,
    Dj,
    EtaXy,
    EtaZ,
    Kab,
    Kba,
    W1x,
    W1y,
}

impl BasisOperator {
    pub const ALL: [Self; 15] = [
        Self::RIxy,
        Self::R2SzIxy,
        Self::DrXy,
        Self::RIz,
        Self::R2SzIz,
        Self::Cs,
        Self::Dw,
        Self::J,
        Self::Dj,
        Self::EtaXy,
        Self::EtaZ,
        Self::Kab,
        Self::Kba,
        Self::W1x,
        Self::W1y,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RIxy => "R_IXY",
            Self::R2SzIxy => "R_2SZIXY",
            Self::DrXy => "DR_XY",
            Self::RIz => "R_IZ",
            Self::R2SzIz => "R_2SZIZ",
            Self::Cs => "CS",
            Self::Dw => "DW",
            Self::J => "J",
            Self::Dj => "DJ",
            Self::EtaXy => "ETAXY",
            Self::EtaZ => "ETAZ",
            Self::Kab => "KAB",
            Self::Kba => "KBA",
            Self::W1x => "W1X",
            Self::W1y => "W1Y",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.as_str().eq_ignore_ascii_case(name))
    }
}

impl Display for BasisOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Read-only source of the constant basis matrices.
///
/// Every operator must resolve to a `LIOUVILLIAN_ORDER` square matrix.
pub trait BasisOperatorTable {
    fn operator(&self, operator: BasisOperator) -> &DenseRealMatrix;
}
