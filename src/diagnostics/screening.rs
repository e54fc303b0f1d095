//! Screening of VDP tables for harmful collinearity.
//!
//! Belsley's rule of thumb: a near dependency is present on a component
//! whose scaled condition index is high (30 or more) when two or more
//! variables have at least half of their variance on that component.

use crate::core::VdpResult;

/// Condition index at or above which a component is considered weak.
pub const DEFAULT_CONDITION_THRESHOLD: f64 = 30.0;

/// Proportion at or above which a variable is considered involved.
pub const DEFAULT_PROPORTION_THRESHOLD: f64 = 0.5;

/// A weak component together with the variables it degrades.
#[derive(Debug, Clone, PartialEq)]
pub struct CollinearComponent {
    /// Row of the component in the result table.
    pub component: usize,
    /// Scaled condition index of the component.
    pub condition_index: f64,
    /// Involved variables and their variance proportions, in table order.
    pub variables: Vec<(String, f64)>,
}

/// Components whose scaled condition index is at least `threshold`.
pub fn high_condition_components(result: &VdpResult, threshold: f64) -> Vec<usize> {
    result
        .condition_indexes()
        .iter()
        .enumerate()
        .filter(|(_, &ci)| ci >= threshold)
        .map(|(k, _)| k)
        .collect()
}

/// Components with a high condition index on which at least two variables
/// have a high variance proportion.
pub fn collinear_components(
    result: &VdpResult,
    index_threshold: f64,
    proportion_threshold: f64,
) -> Vec<CollinearComponent> {
    high_condition_components(result, index_threshold)
        .into_iter()
        .filter_map(|k| {
            let variables: Vec<(String, f64)> = result
                .variables()
                .iter()
                .enumerate()
                .map(|(j, name)| (name.clone(), result.proportions()[(k, j)]))
                .filter(|(_, p)| *p >= proportion_threshold)
                .collect();

            (variables.len() >= 2).then(|| CollinearComponent {
                component: k,
                condition_index: result.condition_indexes()[k],
                variables,
            })
        })
        .collect()
}
