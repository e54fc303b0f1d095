//! Error types for the variance decomposition pipeline.

use super::options::OptionsError;
use thiserror::Error;

/// Malformed input detected before any heavy computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("table is empty: {rows} rows, {columns} columns")]
    EmptyTable { rows: usize, columns: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("got {names} column names for {columns} columns")]
    ColumnCountMismatch { names: usize, columns: usize },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{column}' has {got} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("non-finite value in column '{column}' at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("log variable '{0}' is not a column of the input table")]
    UnknownLogVariable(String),

    #[error("log variable '{column}' has a non-positive value at row {row}")]
    NonPositiveLogValue { column: String, row: usize },
}

/// A step of the pipeline would have divided by zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalInstabilityError {
    #[error("column '{column}' has zero Euclidean norm and cannot be scaled to unit length")]
    ZeroNormColumn { column: String },

    #[error("column '{column}' has a non-finite Euclidean norm")]
    NonFiniteNorm { column: String },

    #[error("singular value {value:e} of component {component} is zero; the design matrix is rank deficient")]
    ZeroSingularValue { component: usize, value: f64 },
}

/// Errors that can occur while computing variance decomposition proportions.
#[derive(Debug, Error)]
pub enum VdpError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("numerical instability: {0}")]
    NumericalInstability(#[from] NumericalInstabilityError),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("singular value decomposition did not converge")]
    DecompositionFailed,
}

impl VdpError {
    /// Whether the error stems from malformed input.
    pub fn is_validation(&self) -> bool {
        matches!(self, VdpError::Validation(_))
    }

    /// Whether the error stems from a division by a zero norm or singular value.
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self, VdpError::NumericalInstability(_))
    }
}
