//! Collinearity diagnostics based on variance decomposition proportions.
//!
//! The pipeline stages are exposed individually so they can be tested and
//! reused in isolation:
//!
//! - **Preprocessing**: intercept injection and log variable rescaling
//! - **Normalization**: unit-length column scaling
//! - **Decomposition**: SVD of the scaled design matrix
//! - **Proportions**: variance decomposition proportions and condition indexes
//! - **Screening**: Belsley's rule of thumb for harmful near dependencies
//!
//! # Example
//!
//! ```rust,ignore
//! use vdp::diagnostics::{collinear_components, VdpAnalyzer};
//!
//! let result = VdpAnalyzer::builder().with_intercept(true).build().analyze(&table)?;
//! for dependency in collinear_components(&result, 30.0, 0.5) {
//!     println!("component {}: {:?}", dependency.component, dependency.variables);
//! }
//! ```

mod analyzer;
mod decomposition;
mod normalize;
mod preprocess;
mod proportions;
mod screening;

pub use analyzer::{variance_decomposition_proportions, VdpAnalyzer, VdpAnalyzerBuilder};
pub use decomposition::{decompose, SingularDecomposition};
pub use normalize::normalize_columns;
pub use preprocess::{log_scale_factor, preprocess, INTERCEPT_COLUMN};
pub use proportions::{
    decompose_variance, scaled_condition_indexes, variance_components, VarianceDecomposition,
};
pub use screening::{
    collinear_components, high_condition_components, CollinearComponent,
    DEFAULT_CONDITION_THRESHOLD, DEFAULT_PROPORTION_THRESHOLD,
};
