//! Singular value decomposition of the scaled design matrix.

use crate::core::VdpError;
use faer::{Col, Mat};
use log::debug;

/// Singular values and right singular vectors of a design matrix.
#[derive(Debug, Clone)]
pub struct SingularDecomposition {
    /// Singular values in non-increasing order.
    pub singular_values: Col<f64>,
    /// Right singular vectors; column `k` holds the variable loadings of
    /// component `k`, row `i` belongs to variable `i`.
    pub v: Mat<f64>,
}

/// Compute the thin SVD of `z`.
///
/// Singular values come back in non-increasing order together with the
/// matching columns of `V`. The backend already orders them this way; the
/// stable reorder below only takes effect if it ever does not.
///
/// # Errors
///
/// `DecompositionFailed` when the SVD does not converge.
pub fn decompose(z: &Mat<f64>) -> Result<SingularDecomposition, VdpError> {
    let svd = z.thin_svd().map_err(|_| VdpError::DecompositionFailed)?;
    let s = svd.S().column_vector();
    let v = svd.V();

    let mut order: Vec<usize> = (0..s.nrows()).collect();
    order.sort_by(|&a, &b| s[b].total_cmp(&s[a]));

    let singular_values = Col::from_fn(order.len(), |k| s[order[k]]);
    let v = Mat::from_fn(v.nrows(), order.len(), |i, k| v[(i, order[k])]);

    debug!(
        "svd of {}x{} matrix: singular values in [{:e}, {:e}]",
        z.nrows(),
        z.ncols(),
        singular_values.iter().copied().fold(f64::INFINITY, f64::min),
        singular_values.iter().copied().fold(0.0, f64::max),
    );

    Ok(SingularDecomposition { singular_values, v })
}
