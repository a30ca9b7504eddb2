#![cfg(feature = "dev")]
//! Tests for time-delay embedding.
//!
//! ## Test Organization
//!
//! 1. **Lag Schedules** - tau = 0, inclusive and shifted schedules
//! 2. **Embedding Values** - cell contents for known series
//! 3. **Column Pruning** - all-missing columns and their removal
//! 4. **Parameter Errors** - too-long schedules and invalid dimensions

use smap_rs::internals::algorithms::embedding::{LagStyle, embed, lag_at, lag_schedule, max_lag};
use smap_rs::internals::primitives::errors::SmapError;

// ============================================================================
// Lag Schedules
// ============================================================================

#[test]
fn test_lag_schedule_tau_zero_ignores_style() {
    assert_eq!(lag_schedule(3, 0, LagStyle::Inclusive), vec![0, 1, 2]);
    assert_eq!(lag_schedule(3, 0, LagStyle::Shifted), vec![0, 1, 2]);
}

#[test]
fn test_lag_schedule_inclusive() {
    assert_eq!(lag_schedule(4, 2, LagStyle::Inclusive), vec![0, 2, 4, 6]);
}

#[test]
fn test_lag_schedule_shifted() {
    assert_eq!(lag_schedule(4, 2, LagStyle::Shifted), vec![2, 4, 6, 8]);
}

#[test]
fn test_max_lag() {
    assert_eq!(max_lag(3, 0, LagStyle::Shifted), Some(2));
    assert_eq!(max_lag(5, 1, LagStyle::Shifted), Some(5));
    assert_eq!(max_lag(5, 1, LagStyle::Inclusive), Some(4));
    assert_eq!(max_lag(0, 1, LagStyle::Inclusive), None);
}

#[test]
fn test_lag_at_saturates() {
    let tau = usize::MAX / 2 + 1;
    assert_eq!(lag_at(1, tau, LagStyle::Shifted), usize::MAX);
    assert_eq!(lag_at(3, tau, LagStyle::Inclusive), usize::MAX);
    assert_eq!(lag_at(1, tau, LagStyle::Inclusive), tau);
    assert_eq!(max_lag(2, tau, LagStyle::Shifted), Some(usize::MAX));
}

#[test]
fn test_lag_style_codes() {
    assert_eq!(LagStyle::try_from(0), Ok(LagStyle::Inclusive));
    assert_eq!(LagStyle::try_from(1), Ok(LagStyle::Shifted));
    assert_eq!(LagStyle::try_from(2), Err(SmapError::InvalidLagStyle(2)));
    assert_eq!(LagStyle::try_from(-1), Err(SmapError::InvalidLagStyle(-1)));
    assert_eq!(LagStyle::Shifted.code(), 1);
    assert_eq!(LagStyle::default(), LagStyle::Inclusive);
}

// ============================================================================
// Embedding Values
// ============================================================================

#[test]
fn test_embed_tau_zero_documented_example() {
    let m = embed(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, 0, LagStyle::Inclusive).unwrap();

    assert_eq!(m.nrows(), 5);
    assert_eq!(m.ncols(), 3);
    assert_eq!(m.row(0), &[Some(1.0), None, None]);
    assert_eq!(m.row(1), &[Some(2.0), Some(1.0), None]);
    assert_eq!(m.row(2), &[Some(3.0), Some(2.0), Some(1.0)]);
    assert_eq!(m.row(3), &[Some(4.0), Some(3.0), Some(2.0)]);
    assert_eq!(m.row(4), &[Some(5.0), Some(4.0), Some(3.0)]);
}

#[test]
fn test_embed_inclusive_tau_one_matches_tau_zero() {
    let series = [0.5, 1.5, -2.0, 3.25, 4.0, 0.0];
    let a = embed(&series, 3, 0, LagStyle::Shifted).unwrap();
    let b = embed(&series, 3, 1, LagStyle::Inclusive).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_embed_shifted_tau_two() {
    let m = embed(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 2, LagStyle::Shifted).unwrap();

    assert_eq!(m.lags(), &[2, 4]);
    assert_eq!(m.row(0), &[None, None]);
    assert_eq!(m.row(1), &[None, None]);
    assert_eq!(m.row(2), &[Some(1.0), None]);
    assert_eq!(m.row(3), &[Some(2.0), None]);
    assert_eq!(m.row(4), &[Some(3.0), Some(1.0)]);
    assert_eq!(m.row(5), &[Some(4.0), Some(2.0)]);
}

#[test]
fn test_embed_inclusive_tau_three() {
    let series: Vec<f64> = (1..=8).map(f64::from).collect();
    let m = embed(&series, 2, 3, LagStyle::Inclusive).unwrap();

    assert_eq!(m.lags(), &[0, 3]);
    assert_eq!(m.row(2), &[Some(3.0), None]);
    assert_eq!(m.row(3), &[Some(4.0), Some(1.0)]);
    assert_eq!(m.row(7), &[Some(8.0), Some(5.0)]);
}

#[test]
fn test_embed_missing_observation_propagates() {
    let m = embed(&[1.0, f64::NAN, 3.0, 4.0], 2, 1, LagStyle::Inclusive).unwrap();

    assert_eq!(m.row(1), &[None, Some(1.0)]);
    assert_eq!(m.row(2), &[Some(3.0), None]);
    assert_eq!(m.row(3), &[Some(4.0), Some(3.0)]);
}

#[test]
fn test_embed_f32() {
    let m = embed(&[1.0f32, 2.0, 3.0], 2, 1, LagStyle::Inclusive).unwrap();
    assert_eq!(m.row(2), &[Some(3.0f32), Some(2.0)]);
}

#[test]
fn test_embed_is_deterministic() {
    let series: Vec<f64> = (0..50).map(|t| (t as f64 * 0.7).cos()).collect();
    let a = embed(&series, 4, 2, LagStyle::Shifted).unwrap();
    let b = embed(&series, 4, 2, LagStyle::Shifted).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Column Pruning
// ============================================================================

#[test]
fn test_embed_retained_columns_have_data() {
    let series: Vec<f64> = (0..12).map(|t| t as f64).collect();
    for dimension in 1..=4 {
        for tau in 0..=3 {
            for style in [LagStyle::Inclusive, LagStyle::Shifted] {
                let Ok(m) = embed(&series, dimension, tau, style) else {
                    continue;
                };
                for col in 0..m.ncols() {
                    assert!(
                        m.column_has_data(col),
                        "E={} tau={} style={:?} column {} is empty",
                        dimension,
                        tau,
                        style,
                        col
                    );
                }
            }
        }
    }
}

#[test]
fn test_embed_prunes_empty_columns() {
    // Only index 3 is observed, so lags 2 and 3 never see a value.
    let series = [f64::NAN, f64::NAN, f64::NAN, 5.0, f64::NAN];
    let m = embed(&series, 3, 1, LagStyle::Shifted).unwrap();

    assert_eq!(m.ncols(), 1);
    assert_eq!(m.lags(), &[1]);
    assert_eq!(m.row(4), &[Some(5.0)]);
    assert_eq!(m.row(3), &[None]);
}

#[test]
fn test_embed_all_columns_missing() {
    let series = [f64::NAN, f64::NAN, f64::NAN];
    let err = embed(&series, 2, 1, LagStyle::Inclusive).unwrap_err();
    assert_eq!(
        err,
        SmapError::InsufficientEmbeddingDimension {
            dimension: 2,
            tau: 1
        }
    );
}

// ============================================================================
// Parameter Errors
// ============================================================================

#[test]
fn test_embed_max_lag_exceeds_series() {
    let err = embed(&[1.0, 2.0, 3.0], 5, 1, LagStyle::Shifted).unwrap_err();
    assert_eq!(
        err,
        SmapError::InvalidParameters {
            max_lag: 5,
            series_len: 3
        }
    );
}

#[test]
fn test_embed_max_lag_boundary() {
    // max_lag = N - 1 is allowed
    assert!(embed(&[1.0, 2.0, 3.0], 3, 1, LagStyle::Inclusive).is_ok());

    // max_lag = N is rejected
    let err = embed(&[1.0, 2.0, 3.0], 3, 1, LagStyle::Shifted).unwrap_err();
    assert_eq!(
        err,
        SmapError::InvalidParameters {
            max_lag: 3,
            series_len: 3
        }
    );
}

#[test]
fn test_embed_huge_tau_rejected() {
    let series = [1.0, 2.0, 3.0, 4.0];
    let tau = usize::MAX / 2 + 1;

    let err = embed(&series, 2, tau, LagStyle::Shifted).unwrap_err();
    assert_eq!(
        err,
        SmapError::InvalidParameters {
            max_lag: usize::MAX,
            series_len: 4
        }
    );

    let err = embed(&series, 2, tau, LagStyle::Inclusive).unwrap_err();
    assert_eq!(
        err,
        SmapError::InvalidParameters {
            max_lag: tau,
            series_len: 4
        }
    );
}

#[test]
fn test_embed_zero_dimension() {
    let err = embed(&[1.0, 2.0, 3.0], 0, 1, LagStyle::Inclusive).unwrap_err();
    assert_eq!(err, SmapError::InvalidEmbeddingDimension(0));
}

#[test]
fn test_embed_empty_series() {
    let err = embed::<f64>(&[], 2, 1, LagStyle::Inclusive).unwrap_err();
    assert_eq!(err, SmapError::EmptyInput);
}
