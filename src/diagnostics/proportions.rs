//! Variance decomposition proportions and scaled condition indexes.
//!
//! With the unit-length scaled design matrix `Z = U D V'`, the variance of
//! the k-th coefficient estimate is proportional to
//!
//! ```text
//! phi_k = sum_j v_kj² / d_j²
//! ```
//!
//! and the share of that variance carried by component `j` is
//!
//! ```text
//! pi_jk = (v_kj² / d_j²) / phi_k
//! ```
//!
//! A component with a large condition index `max(d) / d_j` on which two or
//! more variables have a high proportion marks a near dependency among
//! those variables (Belsley, Kuh & Welsch, 1980; Belsley, 1991).

use crate::core::NumericalInstabilityError;
use faer::{Col, Mat};

/// Proportions and condition indexes computed from SVD factors.
#[derive(Debug, Clone)]
pub struct VarianceDecomposition {
    /// Scaled condition index per component.
    pub condition_indexes: Col<f64>,
    /// Proportions, shaped components x variables. Each column sums to 1.
    pub proportions: Mat<f64>,
}

/// Matrix of `v_ij² / d_j²`, shaped variables x components.
///
/// The caller guarantees every singular value is non-zero.
pub fn variance_components(singular_values: &Col<f64>, v: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(v.nrows(), v.ncols(), |i, j| {
        let d = singular_values[j];
        v[(i, j)] * v[(i, j)] / (d * d)
    })
}

/// `max(d) / d_j` for every component.
///
/// The caller guarantees every singular value is non-zero.
pub fn scaled_condition_indexes(singular_values: &Col<f64>) -> Col<f64> {
    let d_max = max_value(singular_values);
    Col::from_fn(singular_values.nrows(), |j| d_max / singular_values[j])
}

/// Compute proportions and condition indexes from singular values and `V`.
///
/// A singular value is treated as zero when `d_j <= tolerance * max(d)`;
/// with `tolerance = 0` only exact zeros qualify. Singular values so small
/// that `1 / d_j²` overflows are reported the same way.
///
/// # Errors
///
/// `ZeroSingularValue` naming the first offending component.
pub fn decompose_variance(
    singular_values: &Col<f64>,
    v: &Mat<f64>,
    tolerance: f64,
) -> Result<VarianceDecomposition, NumericalInstabilityError> {
    debug_assert_eq!(singular_values.nrows(), v.ncols());

    let d_max = max_value(singular_values);
    let cutoff = tolerance * d_max;
    for (component, &d) in singular_values.iter().enumerate() {
        if d <= cutoff {
            return Err(NumericalInstabilityError::ZeroSingularValue {
                component,
                value: d,
            });
        }
    }

    let components = variance_components(singular_values, v);
    for j in 0..components.ncols() {
        if (0..components.nrows()).any(|i| !components[(i, j)].is_finite()) {
            return Err(NumericalInstabilityError::ZeroSingularValue {
                component: j,
                value: singular_values[j],
            });
        }
    }

    let phi = Col::from_fn(components.nrows(), |i| {
        (0..components.ncols()).map(|j| components[(i, j)]).sum::<f64>()
    });

    // Transposed: rows are components, columns are variables.
    let proportions = Mat::from_fn(components.ncols(), components.nrows(), |j, i| {
        components[(i, j)] / phi[i]
    });

    Ok(VarianceDecomposition {
        condition_indexes: scaled_condition_indexes(singular_values),
        proportions,
    })
}

fn max_value(values: &Col<f64>) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}
