//! Variance decomposition result table.

use faer::{Col, Mat};
use std::fmt;

/// Header of the leading condition index column.
pub const CONDITION_INDEX_COLUMN: &str = "scaled_condition_index";

/// Complete result of a variance decomposition.
///
/// Laid out as a table with one row per component (singular value) and the
/// columns `scaled_condition_index`, then one proportion column per
/// variable. Rows follow singular value order, so row 0 is the component
/// with the largest singular value and a condition index of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct VdpResult {
    /// Variable names, including `intercept` when it was added.
    pub variables: Vec<String>,

    /// Singular values of the unit-length scaled design matrix.
    pub singular_values: Col<f64>,

    /// Scaled condition index `max(d) / d[j]` per component.
    pub condition_indexes: Col<f64>,

    /// Variance decomposition proportions (components x variables).
    /// Each column sums to 1.
    pub proportions: Mat<f64>,
}

impl VdpResult {
    /// Number of components (rows of the table).
    pub fn n_components(&self) -> usize {
        self.condition_indexes.nrows()
    }

    /// Variable names in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Table header: `scaled_condition_index` followed by the variables.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(CONDITION_INDEX_COLUMN)
            .chain(self.variables.iter().map(String::as_str))
            .collect()
    }

    pub fn condition_indexes(&self) -> &Col<f64> {
        &self.condition_indexes
    }

    pub fn singular_values(&self) -> &Col<f64> {
        &self.singular_values
    }

    pub fn proportions(&self) -> &Mat<f64> {
        &self.proportions
    }

    /// Proportion of `variable`'s variance attributed to `component`.
    pub fn proportion(&self, component: usize, variable: &str) -> Option<f64> {
        let j = self.variables.iter().position(|v| v == variable)?;
        (component < self.n_components()).then(|| self.proportions[(component, j)])
    }

    /// Proportions of `variable` across all components.
    pub fn variable_proportions(&self, variable: &str) -> Option<Col<f64>> {
        let j = self.variables.iter().position(|v| v == variable)?;
        Some(Col::from_fn(self.n_components(), |k| self.proportions[(k, j)]))
    }

    /// Table rows in header order.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.n_components())
            .map(|k| {
                std::iter::once(self.condition_indexes[k])
                    .chain((0..self.variables.len()).map(|j| self.proportions[(k, j)]))
                    .collect()
            })
            .collect()
    }

    /// Condition number of the scaled design matrix (largest condition index).
    pub fn condition_number(&self) -> f64 {
        self.condition_indexes
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for VdpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.column_names();
        let widths: Vec<usize> = header.iter().map(|h| h.len().max(10)).collect();

        for (name, width) in header.iter().zip(&widths) {
            write!(f, "{:>width$} ", name, width = width)?;
        }
        writeln!(f)?;

        for row in self.rows() {
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "{:>width$.4} ", value, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
