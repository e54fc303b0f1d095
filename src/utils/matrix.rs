//! Matrix utility functions.

use faer::{Col, Mat};

/// Detect columns that are constant (zero variance).
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    let n_cols = x.ncols();
    let n_rows = x.nrows();

    if n_rows == 0 {
        return vec![true; n_cols];
    }

    (0..n_cols)
        .map(|j| {
            let first = x[(0, j)];
            (1..n_rows).all(|i| (x[(i, j)] - first).abs() < tolerance)
        })
        .collect()
}

/// Euclidean (L2) norm of every column.
pub fn column_norms(x: &Mat<f64>) -> Col<f64> {
    Col::from_fn(x.ncols(), |j| x.col(j).norm_l2())
}

/// Copy of `x` with a constant column inserted in front.
pub fn prepend_constant_column(x: &Mat<f64>, value: f64) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            value
        } else {
            x[(i, j - 1)]
        }
    })
}

/// Mean of the natural logarithm of column `j`.
///
/// The caller guarantees strictly positive entries.
pub fn mean_log_column(x: &Mat<f64>, j: usize) -> f64 {
    let n = x.nrows();
    (0..n).map(|i| x[(i, j)].ln()).sum::<f64>() / n as f64
}
