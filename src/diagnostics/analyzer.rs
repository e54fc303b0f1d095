//! Variance decomposition proportions (VDP) analysis.
//!
//! Runs the full pipeline on a design table:
//!
//! 1. optional intercept column and log variable rescaling
//! 2. unit-length column scaling
//! 3. singular value decomposition
//! 4. proportions and scaled condition indexes
//! 5. result table assembly

use super::decomposition::decompose;
use super::normalize::normalize_columns;
use super::preprocess::{preprocess, INTERCEPT_COLUMN};
use super::proportions::{decompose_variance, VarianceDecomposition};
use super::screening::DEFAULT_CONDITION_THRESHOLD;
use crate::core::{DesignTable, ValidationError, VdpError, VdpOptions, VdpResult};
use crate::utils::detect_constant_columns;
use faer::Col;
use log::{debug, warn};

/// Variance decomposition analyzer.
///
/// # Example
///
/// ```
/// use vdp::prelude::*;
/// use faer::Mat;
///
/// let data = Mat::from_fn(20, 2, |i, j| (i as f64 + 1.0).powi(j as i32 + 1));
/// let table = DesignTable::new(["x", "x_sq"], data).unwrap();
///
/// let result = VdpAnalyzer::builder()
///     .with_intercept(true)
///     .build()
///     .analyze(&table)
///     .unwrap();
///
/// assert_eq!(result.n_components(), 3);
/// assert_eq!(result.variables()[0], "intercept");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VdpAnalyzer {
    options: VdpOptions,
}

impl VdpAnalyzer {
    /// Create a new analyzer with the given options.
    pub fn new(options: VdpOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the analyzer.
    pub fn builder() -> VdpAnalyzerBuilder {
        VdpAnalyzerBuilder::default()
    }

    pub fn options(&self) -> &VdpOptions {
        &self.options
    }

    /// Compute variance decomposition proportions for `table`.
    ///
    /// The table is only borrowed; all work happens on an owned copy.
    pub fn analyze(&self, table: &DesignTable) -> Result<VdpResult, VdpError> {
        self.options.validate()?;

        let prepared = preprocess(
            table,
            self.options.with_intercept,
            &self.options.log_variables,
            self.options.log_scaling,
        )?;

        // A thin SVD of a wide matrix has fewer singular values than variables.
        if prepared.nrows() < prepared.ncols() {
            return Err(ValidationError::InsufficientObservations {
                needed: prepared.ncols(),
                got: prepared.nrows(),
            }
            .into());
        }

        if self.options.with_intercept {
            warn_constant_regressors(&prepared);
        }

        debug!(
            "vdp: {} observations, variables {:?}",
            prepared.nrows(),
            prepared.names()
        );

        let z = normalize_columns(&prepared)?;
        let svd = decompose(&z)?;
        let decomposition = decompose_variance(
            &svd.singular_values,
            &svd.v,
            self.options.singular_tolerance,
        )?;

        let (names, _) = prepared.into_parts();
        let result = assemble(names, svd.singular_values, decomposition);

        let condition_number = result.condition_number();
        if condition_number >= DEFAULT_CONDITION_THRESHOLD {
            warn!(
                "condition number {:.2} indicates strong collinearity",
                condition_number
            );
        } else {
            debug!("condition number {:.2}", condition_number);
        }

        Ok(result)
    }
}

/// Builder for `VdpAnalyzer`.
#[derive(Debug, Clone, Default)]
pub struct VdpAnalyzerBuilder {
    options: VdpOptions,
}

impl VdpAnalyzerBuilder {
    /// Set whether to prepend an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Replace the set of log variables.
    pub fn log_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.log_variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the log variable rescaling mode.
    pub fn log_scaling(mut self, scaling: crate::core::LogScaling) -> Self {
        self.options.log_scaling = scaling;
        self
    }

    /// Set the relative zero tolerance for singular values.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Set all options at once.
    pub fn options(mut self, options: VdpOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the analyzer. Options are validated by `analyze`.
    pub fn build(self) -> VdpAnalyzer {
        VdpAnalyzer::new(self.options)
    }
}

/// Compute variance decomposition proportions with default log rescaling.
///
/// `log_variables` may be empty, which means no log rescaling.
pub fn variance_decomposition_proportions<S: AsRef<str>>(
    table: &DesignTable,
    with_intercept: bool,
    log_variables: &[S],
) -> Result<VdpResult, VdpError> {
    VdpAnalyzer::builder()
        .with_intercept(with_intercept)
        .log_variables(log_variables.iter().map(|s| s.as_ref().to_string()))
        .build()
        .analyze(table)
}

/// Package singular values, condition indexes and proportions into the
/// output table. Row order follows the singular values.
fn assemble(
    variables: Vec<String>,
    singular_values: Col<f64>,
    decomposition: VarianceDecomposition,
) -> VdpResult {
    debug_assert_eq!(variables.len(), decomposition.proportions.ncols());
    debug_assert_eq!(singular_values.nrows(), decomposition.proportions.nrows());

    VdpResult {
        variables,
        singular_values,
        condition_indexes: decomposition.condition_indexes,
        proportions: decomposition.proportions,
    }
}

/// Constant regressors other than the intercept duplicate it exactly.
fn warn_constant_regressors(prepared: &DesignTable) {
    let constant = detect_constant_columns(prepared.data(), 1e-12);
    for (name, _) in prepared
        .names()
        .iter()
        .zip(constant)
        .filter(|(name, is_constant)| *is_constant && name.as_str() != INTERCEPT_COLUMN)
    {
        warn!("column '{}' is constant and collinear with the intercept", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogScaling, NumericalInstabilityError};
    use approx::assert_relative_eq;
    use faer::Mat;

    fn wavy_table(n: usize) -> DesignTable {
        let data = Mat::from_fn(n, 3, |i, j| {
            let t = i as f64;
            match j {
                0 => 1.0 + t,
                1 => 2.0 + (0.7 * t).sin(),
                _ => 3.0 + (1.3 * t).cos() * 0.5 + 0.01 * t,
            }
        });
        DesignTable::new(["a", "b", "c"], data).unwrap()
    }

    #[test]
    fn test_output_shape_with_intercept() {
        let result = VdpAnalyzer::default().analyze(&wavy_table(25)).unwrap();

        assert_eq!(result.n_components(), 4);
        assert_eq!(result.variables(), &["intercept", "a", "b", "c"]);
        assert_eq!(result.proportions().nrows(), 4);
        assert_eq!(result.proportions().ncols(), 4);
        assert_eq!(result.singular_values().nrows(), 4);
    }

    #[test]
    fn test_columns_sum_to_one_and_indexes_ordered() {
        let result = VdpAnalyzer::default().analyze(&wavy_table(25)).unwrap();

        for j in 0..result.variables().len() {
            let total: f64 = (0..result.n_components())
                .map(|k| result.proportions()[(k, j)])
                .sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-9);
        }

        assert_relative_eq!(result.condition_indexes()[0], 1.0, epsilon = 1e-12);
        for k in 1..result.n_components() {
            assert!(result.condition_indexes()[k] >= result.condition_indexes()[k - 1]);
        }
    }

    #[test]
    fn test_wide_table_rejected() {
        let data = Mat::from_fn(2, 2, |i, j| (i + 2 * j + 1) as f64);
        let table = DesignTable::new(["a", "b"], data).unwrap();

        let err = VdpAnalyzer::default().analyze(&table).unwrap_err();
        assert!(matches!(
            err,
            VdpError::Validation(ValidationError::InsufficientObservations { needed: 3, got: 2 })
        ));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = VdpAnalyzer::builder()
            .singular_tolerance(-1.0)
            .build()
            .analyze(&wavy_table(10))
            .unwrap_err();
        assert!(matches!(err, VdpError::InvalidOptions(_)));
    }

    #[test]
    fn test_flatten_log_variable_collides_with_intercept() {
        // A flattened column is constant, i.e. a scaled copy of the intercept.
        let result = VdpAnalyzer::builder()
            .log_variables(["a"])
            .log_scaling(LogScaling::Flatten)
            .singular_tolerance(1e-12)
            .build()
            .analyze(&wavy_table(10));

        match result {
            Err(VdpError::NumericalInstability(
                NumericalInstabilityError::ZeroSingularValue { component, .. },
            )) => assert_eq!(component, 3),
            Ok(result) => assert!(result.condition_number() > 1e8),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_free_function_matches_analyzer() {
        let table = wavy_table(15);
        let a = variance_decomposition_proportions(&table, true, &["b"]).unwrap();
        let b = VdpAnalyzer::builder()
            .log_variables(["b"])
            .build()
            .analyze(&table)
            .unwrap();
        assert_eq!(a, b);

        let none: &[&str] = &[];
        let plain = variance_decomposition_proportions(&table, false, none).unwrap();
        assert_eq!(plain.n_components(), 3);
    }
}
