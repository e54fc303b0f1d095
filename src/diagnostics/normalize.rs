//! Unit-length column scaling.

use crate::core::{DesignTable, NumericalInstabilityError};
use crate::utils::column_norms;
use faer::Mat;
use log::debug;

/// Scale every column of the table to unit Euclidean length.
///
/// # Errors
///
/// `ZeroNormColumn` if a column is all zeros and `NonFiniteNorm` if its
/// norm overflows; the offending column is named in both cases.
pub fn normalize_columns(table: &DesignTable) -> Result<Mat<f64>, NumericalInstabilityError> {
    let x = table.data();
    let norms = column_norms(x);

    for (j, name) in table.names().iter().enumerate() {
        let norm = norms[j];
        if !norm.is_finite() {
            return Err(NumericalInstabilityError::NonFiniteNorm {
                column: name.clone(),
            });
        }
        if norm == 0.0 {
            return Err(NumericalInstabilityError::ZeroNormColumn {
                column: name.clone(),
            });
        }
    }

    debug!(
        "unit-length scaling of {}x{} matrix, column norms {:?}",
        x.nrows(),
        x.ncols(),
        norms.iter().collect::<Vec<_>>()
    );

    Ok(Mat::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] / norms[j]))
}
