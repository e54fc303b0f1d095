//! Input validation and numerical instability tests.

mod common;

use common::{approx_eq, generate_independent_table, init_logging};
use faer::Mat;
use vdp::prelude::*;

// ============================================================================
// Validation Errors
// ============================================================================

#[test]
fn test_unknown_log_variable_fails() {
    init_logging();
    let table = generate_independent_table(20, 3, 1);

    let err = variance_decomposition_proportions(&table, true, &["x4"]).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(
        err,
        VdpError::Validation(ValidationError::UnknownLogVariable(ref name)) if name == "x4"
    ));
}

#[test]
fn test_non_positive_log_variable_fails() {
    let x = Mat::from_fn(6, 2, |i, j| if j == 0 { i as f64 - 2.0 } else { 1.0 + i as f64 });
    let table = DesignTable::new(["signed", "positive"], x).unwrap();

    let err = variance_decomposition_proportions(&table, false, &["signed"]).unwrap_err();
    assert!(matches!(
        err,
        VdpError::Validation(ValidationError::NonPositiveLogValue { row: 0, .. })
    ));

    // The strictly positive column is accepted.
    assert!(variance_decomposition_proportions(&table, false, &["positive"]).is_ok());
}

#[test]
fn test_missing_values_rejected_at_construction() {
    let x = Mat::from_fn(5, 2, |i, j| if i == 3 && j == 0 { f64::NAN } else { 1.0 + (i + j) as f64 });
    let err = DesignTable::new(["a", "b"], x).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonFiniteValue {
            column: "a".to_string(),
            row: 3
        }
    );
}

#[test]
fn test_duplicate_intercept_name_rejected() {
    let x = Mat::from_fn(5, 2, |i, j| 1.0 + (i * (j + 1)) as f64);
    let table = DesignTable::new(["intercept", "x"], x).unwrap();

    let err = VdpAnalyzer::default().analyze(&table).unwrap_err();
    assert!(matches!(
        err,
        VdpError::Validation(ValidationError::DuplicateColumn(_))
    ));
}

#[test]
fn test_fewer_rows_than_variables_rejected() {
    let x = Mat::from_fn(3, 3, |i, j| 1.0 + ((i + 1) * (j + 2)) as f64);
    let table = DesignTable::new(["a", "b", "c"], x).unwrap();

    let err = VdpAnalyzer::default().analyze(&table).unwrap_err();
    assert!(matches!(
        err,
        VdpError::Validation(ValidationError::InsufficientObservations { needed: 4, got: 3 })
    ));
}

// ============================================================================
// Numerical Instability Errors
// ============================================================================

#[test]
fn test_zero_column_fails_in_normalization() {
    let x = Mat::from_fn(10, 3, |i, j| if j == 1 { 0.0 } else { 1.0 + i as f64 * (j + 1) as f64 });
    let table = DesignTable::new(["a", "zero", "c"], x).unwrap();

    let err = VdpAnalyzer::default().analyze(&table).unwrap_err();
    assert!(err.is_numerical_instability());
    match err {
        VdpError::NumericalInstability(NumericalInstabilityError::ZeroNormColumn { column }) => {
            assert_eq!(column, "zero")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_produces_no_partial_result() {
    let table = generate_independent_table(10, 2, 2);
    let result = variance_decomposition_proportions(&table, true, &["x1", "nope"]);
    assert!(result.is_err());
}

#[test]
fn test_single_column_without_intercept() {
    let x = Mat::from_fn(4, 1, |i, _| (i + 1) as f64);
    let table = DesignTable::new(["only"], x).unwrap();

    let result = variance_decomposition_proportions(&table, false, &[] as &[&str]).unwrap();
    assert_eq!(result.n_components(), 1);
    assert!(approx_eq(result.condition_indexes()[0], 1.0, 1e-12));
    assert!(approx_eq(result.proportions()[(0, 0)], 1.0, 1e-12));
}
