//! Variance decomposition proportions for regression collinearity diagnostics.
//!
//! Implements the conditioning diagnostics of Belsley (1991), *Conditioning
//! Diagnostics: Collinearity and Weak Data in Regression*. For a design
//! matrix scaled to unit column length, the singular value decomposition
//! yields one scaled condition index per component and, for every variable,
//! the share of its coefficient variance carried by each component.
//!
//! # Example
//!
//! ```rust,ignore
//! use vdp::prelude::*;
//!
//! let table = DesignTable::from_columns(vec![
//!     ("income", income),
//!     ("wealth", wealth),
//! ])?;
//!
//! let result = VdpAnalyzer::builder()
//!     .with_intercept(true)
//!     .log_variables(["income"])
//!     .build()
//!     .analyze(&table)?;
//!
//! println!("{result}");
//! for dependency in collinear_components(&result, 30.0, 0.5) {
//!     println!("near dependency on component {}", dependency.component);
//! }
//! ```

pub mod core;
pub mod diagnostics;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DesignTable, LogScaling, NumericalInstabilityError, OptionsError, ValidationError,
        VdpError, VdpOptions, VdpOptionsBuilder, VdpResult,
    };
    pub use crate::diagnostics::{
        collinear_components, high_condition_components, variance_decomposition_proportions,
        CollinearComponent, VdpAnalyzer, VdpAnalyzerBuilder, DEFAULT_CONDITION_THRESHOLD,
        DEFAULT_PROPORTION_THRESHOLD,
    };
}

pub use crate::core::{
    DesignTable, LogScaling, NumericalInstabilityError, ValidationError, VdpError, VdpOptions,
    VdpResult,
};
pub use crate::diagnostics::{variance_decomposition_proportions, VdpAnalyzer};
