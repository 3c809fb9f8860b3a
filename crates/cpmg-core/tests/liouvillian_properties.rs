use cpmg_core::basis::LIOUVILLIAN_ORDER;
use cpmg_core::numerics::DenseRealMatrix;
use cpmg_core::{
    BasisOperator, BasisOperatorTable, ExchangeParameters, IphAphBasis, LiouvillianBuilder,
    compute_2hznz_eq, compute_liouvillians, get_atrz,
};

fn zero_parameters() -> ExchangeParameters {
    ExchangeParameters {
        pb: 0.0,
        kex: 0.0,
        dw: 0.0,
        r_nxy: 0.0,
        dr_nxy: 0.0,
        r_nz: 0.0,
        r_2hznz: 0.0,
        etaxy: 0.0,
        etaz: 0.0,
        j_hn: 0.0,
        dj_hn: 0.0,
        cs_offset: 0.0,
        w1: 0.0,
    }
}

fn weighted_sum(basis: &IphAphBasis, terms: &[(BasisOperator, f64)]) -> DenseRealMatrix {
    DenseRealMatrix::from_fn(LIOUVILLIAN_ORDER, LIOUVILLIAN_ORDER, |row, col| {
        terms
            .iter()
            .map(|&(operator, weight)| weight * basis.operator(operator)[(row, col)])
            .sum()
    })
}

#[test]
fn equilibrium_readout_conserves_population() {
    for pb in [0.0, 0.05, 0.25, 0.5, 0.9, 1.0] {
        let state = compute_2hznz_eq(pb);
        assert_eq!(get_atrz(&state), Ok((1.0 - pb, pb)), "pb = {pb}");
    }
    assert_eq!(get_atrz(&compute_2hznz_eq(0.25)), Ok((0.75, 0.25)));
}

#[test]
fn free_liouvillian_is_linear_in_relaxation_rates() {
    let basis = IphAphBasis::new();
    let (a, b, c) = (5.0, 1.5, 5.0);
    let params = ExchangeParameters {
        r_nxy: a,
        r_nz: b,
        r_2hznz: c,
        ..zero_parameters()
    };

    let free = LiouvillianBuilder::new(basis.clone())
        .compute_liouvillians(&params)
        .free;
    let expected = weighted_sum(
        &basis,
        &[
            (BasisOperator::RIxy, a),
            (BasisOperator::R2SzIxy, a + c - b),
            (BasisOperator::RIz, b),
            (BasisOperator::R2SzIz, c),
        ],
    );

    assert_eq!(free, expected);
    assert_eq!(free[(3, 3)], -8.5);
    assert_eq!(free[(9, 9)], -8.5);
    assert_eq!(free[(0, 0)], -5.0);
    assert_eq!(free[(2, 2)], -1.5);
    assert_eq!(free[(11, 11)], -5.0);
}

#[test]
fn repeated_assembly_is_bit_identical() {
    let params = ExchangeParameters {
        pb: 0.07,
        kex: 850.0,
        dw: 1234.5,
        dr_nxy: 3.0,
        etaxy: -1.1,
        etaz: 0.4,
        dj_hn: 1.5,
        cs_offset: 321.0,
        w1: 2500.0,
        ..ExchangeParameters::default()
    };

    let first = compute_liouvillians(&params);
    let second = compute_liouvillians(&params);
    assert_eq!(first, second);
}

#[test]
fn rf_matrices_scale_with_field_strength() {
    let params = ExchangeParameters {
        w1: 1000.0,
        ..zero_parameters()
    };
    let liouvillians = compute_liouvillians(&params);

    assert_eq!(liouvillians.w1x[(2, 1)], 1000.0);
    assert_eq!(liouvillians.w1x[(1, 2)], -1000.0);
    assert_eq!(liouvillians.w1y[(0, 2)], 1000.0);
    assert_eq!(liouvillians.w1y[(2, 0)], -1000.0);
    assert_eq!(liouvillians.free, DenseRealMatrix::zeros(12, 12));
}

#[test]
fn exchange_block_conserves_total_magnetization() {
    let params = ExchangeParameters {
        pb: 0.15,
        kex: 600.0,
        ..zero_parameters()
    };
    let free = compute_liouvillians(&params).free;

    for col in 0..LIOUVILLIAN_ORDER {
        let column_sum: f64 = (0..LIOUVILLIAN_ORDER).map(|row| free[(row, col)]).sum();
        assert!(column_sum.abs() <= 1.0e-12, "column {col} sums to {column_sum}");
    }
    assert_eq!(free[(6, 0)], 90.0);
    assert_eq!(free[(0, 6)], 510.0);
}

#[test]
fn equilibrium_is_stationary_under_exchange_alone() {
    let pb = 0.2;
    let params = ExchangeParameters {
        pb,
        kex: 300.0,
        ..zero_parameters()
    };
    let free = compute_liouvillians(&params).free;
    let state = compute_2hznz_eq(pb);

    for row in 0..LIOUVILLIAN_ORDER {
        let derivative: f64 = (0..LIOUVILLIAN_ORDER)
            .map(|col| free[(row, col)] * state[(col, 0)])
            .sum();
        assert!(derivative.abs() <= 1.0e-12, "row {row} drifts by {derivative}");
    }
}
