//! Design matrix preprocessing: intercept injection and log variable rescaling.

use crate::core::{DesignTable, LogScaling, ValidationError};
use crate::utils::{mean_log_column, prepend_constant_column};
use log::{debug, warn};
use std::f64::consts::E;

/// Name of the injected constant column.
pub const INTERCEPT_COLUMN: &str = "intercept";

/// Rescaling factor `e / exp(mean(ln x))` for a strictly positive column.
///
/// Multiplying the column by this factor moves its geometric mean to `e`.
pub fn log_scale_factor(mean_log: f64) -> f64 {
    E / mean_log.exp()
}

/// Produce the preprocessed copy of `table`.
///
/// Log variables are rescaled from their original values according to
/// `scaling`, then an `intercept` column of ones is prepended when
/// `with_intercept` is set. The input table is never modified.
///
/// # Errors
///
/// - `UnknownLogVariable` if a log variable is not a column of `table`
/// - `NonPositiveLogValue` if a log variable holds a value <= 0
/// - `DuplicateColumn` if an intercept is requested and `table` already has
///   a column called `intercept`
pub fn preprocess(
    table: &DesignTable,
    with_intercept: bool,
    log_variables: &[String],
    scaling: LogScaling,
) -> Result<DesignTable, ValidationError> {
    let log_columns = resolve_log_columns(table, log_variables)?;

    if with_intercept && table.column_index(INTERCEPT_COLUMN).is_some() {
        return Err(ValidationError::DuplicateColumn(
            INTERCEPT_COLUMN.to_string(),
        ));
    }

    let (mut names, mut data) = table.clone().into_parts();

    for j in log_columns {
        let factor = log_scale_factor(mean_log_column(&data, j));
        debug!(
            "log variable '{}': scale factor {:.6} ({:?})",
            names[j], factor, scaling
        );
        match scaling {
            LogScaling::Rescale => {
                for i in 0..data.nrows() {
                    data[(i, j)] *= factor;
                }
            }
            LogScaling::Flatten => {
                warn!(
                    "log variable '{}' flattened to the constant {:.6}; its variation is lost",
                    names[j], factor
                );
                for i in 0..data.nrows() {
                    data[(i, j)] = factor;
                }
            }
        }
    }

    if with_intercept {
        data = prepend_constant_column(&data, 1.0);
        names.insert(0, INTERCEPT_COLUMN.to_string());
    }

    Ok(DesignTable::from_parts_unchecked(names, data))
}

/// Column indices of the log variables, deduplicated and checked for
/// positivity.
fn resolve_log_columns(
    table: &DesignTable,
    log_variables: &[String],
) -> Result<Vec<usize>, ValidationError> {
    let mut columns: Vec<usize> = Vec::with_capacity(log_variables.len());

    for name in log_variables {
        let j = table
            .column_index(name)
            .ok_or_else(|| ValidationError::UnknownLogVariable(name.clone()))?;
        if columns.contains(&j) {
            continue;
        }
        let data = table.data();
        if let Some(row) = (0..data.nrows()).find(|&i| data[(i, j)] <= 0.0) {
            return Err(ValidationError::NonPositiveLogValue {
                column: name.clone(),
                row,
            });
        }
        columns.push(j);
    }

    Ok(columns)
}
