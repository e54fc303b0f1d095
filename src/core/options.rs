//! Variance decomposition options and configuration.

use thiserror::Error;

/// How designated log variables are rescaled before unit-length scaling.
///
/// Both modes use the factor `s = e / exp(mean(ln x))`, i.e. `e` divided by
/// the geometric mean of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogScaling {
    /// Multiply every entry by `s` so the geometric mean becomes `e`.
    ///
    /// Relative variation within the column is preserved.
    #[default]
    Rescale,

    /// Overwrite every entry with `s`.
    ///
    /// This collapses the column to a constant and reproduces the output of
    /// older VDP tooling. The variable then behaves like a second intercept.
    Flatten,
}

/// Configuration options for the variance decomposition.
#[derive(Debug, Clone)]
pub struct VdpOptions {
    /// Whether to prepend an `intercept` column of ones (default: true).
    pub with_intercept: bool,
    /// Input columns to rescale as log variables (default: none).
    pub log_variables: Vec<String>,
    /// Log variable rescaling mode (default: `Rescale`).
    pub log_scaling: LogScaling,
    /// Relative tolerance below which a singular value counts as zero.
    ///
    /// A singular value `d` is rejected when `d <= singular_tolerance * max(d)`.
    /// The default of 0 only rejects exact zeros.
    pub singular_tolerance: f64,
}

impl Default for VdpOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            log_variables: Vec::new(),
            log_scaling: LogScaling::Rescale,
            singular_tolerance: 0.0,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("singular_tolerance must be in [0, 1), got {0}")]
    InvalidSingularTolerance(f64),
    #[error("log variable name must not be empty")]
    EmptyLogVariableName,
}

impl VdpOptions {
    /// Create a new builder for options.
    pub fn builder() -> VdpOptionsBuilder {
        VdpOptionsBuilder::default()
    }

    /// Options matching older VDP tooling: intercept on, log variables flattened.
    pub fn legacy() -> Self {
        Self {
            log_scaling: LogScaling::Flatten,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.singular_tolerance.is_finite()
            || self.singular_tolerance < 0.0
            || self.singular_tolerance >= 1.0
        {
            return Err(OptionsError::InvalidSingularTolerance(
                self.singular_tolerance,
            ));
        }
        if self.log_variables.iter().any(|name| name.is_empty()) {
            return Err(OptionsError::EmptyLogVariableName);
        }
        Ok(())
    }
}

/// Builder for `VdpOptions`.
#[derive(Debug, Clone, Default)]
pub struct VdpOptionsBuilder {
    options: VdpOptions,
}

impl VdpOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

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

    /// Add a single log variable.
    pub fn log_variable(mut self, name: impl Into<String>) -> Self {
        self.options.log_variables.push(name.into());
        self
    }

    /// Set the log variable rescaling mode.
    pub fn log_scaling(mut self, scaling: LogScaling) -> Self {
        self.options.log_scaling = scaling;
        self
    }

    /// Set the relative zero tolerance for singular values.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<VdpOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> VdpOptions {
        self.options
    }
}
