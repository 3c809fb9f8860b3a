use faer::Mat;

pub type DenseRealMatrix = Mat<f64>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

pub fn ensure_shape(
    matrix: &DenseRealMatrix,
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), ShapeError> {
    if matrix.nrows() != expected_rows || matrix.ncols() != expected_cols {
        return Err(ShapeError::DimensionMismatch {
            expected_rows,
            expected_cols,
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    Ok(())
}

/// `target += weight * term`, element by element. Shapes must already agree.
pub fn accumulate_scaled(target: &mut DenseRealMatrix, term: &DenseRealMatrix, weight: f64) {
    debug_assert_eq!(target.nrows(), term.nrows());
    debug_assert_eq!(target.ncols(), term.ncols());

    for col in 0..target.ncols() {
        for row in 0..target.nrows() {
            target[(row, col)] += weight * term[(row, col)];
        }
    }
}

pub fn scaled(term: &DenseRealMatrix, weight: f64) -> DenseRealMatrix {
    Mat::from_fn(term.nrows(), term.ncols(), |row, col| weight * term[(row, col)])
}

pub fn matrix_rows(matrix: &DenseRealMatrix) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|row| (0..matrix.ncols()).map(|col| matrix[(row, col)]).collect())
        .collect()
}

pub fn column_entries(matrix: &DenseRealMatrix, col: usize) -> Vec<f64> {
    (0..matrix.nrows()).map(|row| matrix[(row, col)]).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        DenseRealMatrix, ShapeError, accumulate_scaled, column_entries, ensure_shape,
        matrix_rows, scaled,
    };

    fn sample() -> DenseRealMatrix {
        DenseRealMatrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64)
    }

    #[test]
    fn accumulate_scaled_adds_weighted_terms() {
        let mut target = DenseRealMatrix::zeros(2, 3);
        accumulate_scaled(&mut target, &sample(), 2.0);
        accumulate_scaled(&mut target, &sample(), -0.5);
        assert_eq!(matrix_rows(&target), vec![vec![0.0, 1.5, 3.0], vec![4.5, 6.0, 7.5]]);
    }

    #[test]
    fn scaled_leaves_input_untouched() {
        let term = sample();
        let doubled = scaled(&term, 2.0);
        assert_eq!(term[(1, 2)], 5.0);
        assert_eq!(doubled[(1, 2)], 10.0);
        assert_eq!(column_entries(&doubled, 1), vec![2.0, 8.0]);
    }

    #[test]
    fn ensure_shape_reports_actual_dimensions() {
        assert_eq!(ensure_shape(&sample(), 2, 3), Ok(()));
        assert_eq!(
            ensure_shape(&sample(), 12, 1),
            Err(ShapeError::DimensionMismatch {
                expected_rows: 12,
                expected_cols: 1,
                rows: 2,
                cols: 3,
            })
        );
    }
}
