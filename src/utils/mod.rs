//! Shared numeric helpers.

mod matrix;

pub use matrix::{column_norms, detect_constant_columns, mean_log_column, prepend_constant_column};
