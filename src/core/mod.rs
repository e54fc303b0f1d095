//! Core types for variance decomposition analysis.

mod error;
mod options;
mod result;
mod table;

pub use error::{NumericalInstabilityError, ValidationError, VdpError};
pub use options::{LogScaling, OptionsError, VdpOptions, VdpOptionsBuilder};
pub use result::{VdpResult, CONDITION_INDEX_COLUMN};
pub use table::{DesignTable, MIN_OBSERVATIONS};
