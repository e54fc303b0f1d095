//! Named design tables.
//!
//! A `DesignTable` pairs a dense `faer` matrix (rows = observations,
//! columns = regressors) with one name per column. Construction validates
//! the table so the pipeline can assume finite values and unique names.
//!
//! # Example
//!
//! ```
//! use vdp::core::DesignTable;
//! use faer::Mat;
//!
//! let data = Mat::from_fn(5, 2, |i, j| (i + j + 1) as f64);
//! let table = DesignTable::new(vec!["x1", "x2"], data).unwrap();
//! assert_eq!(table.column_index("x2"), Some(1));
//! ```

use super::error::ValidationError;
use faer::{Col, Mat};
use std::collections::HashSet;

/// Minimum number of observations a table must hold.
pub const MIN_OBSERVATIONS: usize = 2;

/// A validated table of named continuous regressors.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTable {
    names: Vec<String>,
    data: Mat<f64>,
}

impl DesignTable {
    /// Create a table from column names and a data matrix.
    ///
    /// # Errors
    ///
    /// - `ColumnCountMismatch` if there is not exactly one name per column
    /// - `EmptyTable` if the matrix has no rows or no columns
    /// - `InsufficientObservations` if there are fewer than two rows
    /// - `DuplicateColumn` if a name repeats
    /// - `NonFiniteValue` if any entry is NaN or infinite
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        data: Mat<f64>,
    ) -> Result<Self, ValidationError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() != data.ncols() {
            return Err(ValidationError::ColumnCountMismatch {
                names: names.len(),
                columns: data.ncols(),
            });
        }
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(ValidationError::EmptyTable {
                rows: data.nrows(),
                columns: data.ncols(),
            });
        }
        if data.nrows() < MIN_OBSERVATIONS {
            return Err(ValidationError::InsufficientObservations {
                needed: MIN_OBSERVATIONS,
                got: data.nrows(),
            });
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateColumn(name.clone()));
            }
        }

        for (j, name) in names.iter().enumerate() {
            if let Some(row) = (0..data.nrows()).find(|&i| !data[(i, j)].is_finite()) {
                return Err(ValidationError::NonFiniteValue {
                    column: name.clone(),
                    row,
                });
            }
        }

        Ok(Self { names, data })
    }

    /// Create a table from `(name, values)` columns.
    pub fn from_columns<S: Into<String>>(
        columns: impl IntoIterator<Item = (S, Vec<f64>)>,
    ) -> Result<Self, ValidationError> {
        let (names, values): (Vec<String>, Vec<Vec<f64>>) = columns
            .into_iter()
            .map(|(name, values)| (name.into(), values))
            .unzip();

        let n_rows = values.first().map_or(0, Vec::len);
        for (name, column) in names.iter().zip(&values) {
            if column.len() != n_rows {
                return Err(ValidationError::RaggedColumns {
                    column: name.clone(),
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }

        let data = Mat::from_fn(n_rows, values.len(), |i, j| values[j][i]);
        Self::new(names, data)
    }

    /// Build a table without validation. Callers inside the crate use this
    /// when the invariants are preserved by construction.
    pub(crate) fn from_parts_unchecked(names: Vec<String>, data: Mat<f64>) -> Self {
        debug_assert_eq!(names.len(), data.ncols());
        Self { names, data }
    }

    /// Column names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The underlying data matrix.
    pub fn data(&self) -> &Mat<f64> {
        &self.data
    }

    /// Number of observations.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of regressors.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Copy of the column called `name`.
    pub fn column(&self, name: &str) -> Option<Col<f64>> {
        let j = self.column_index(name)?;
        Some(Col::from_fn(self.nrows(), |i| self.data[(i, j)]))
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Mat<f64>) {
        (self.names, self.data)
    }
}
