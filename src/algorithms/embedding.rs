//! Time-delay embedding of a scalar series.
//!
//! ## Purpose
//!
//! This module reconstructs a state space from a univariate series: row `t`
//! holds lagged copies `x[t - L₁], x[t - L₂], …` for a schedule of lags.
//!
//! ## Design notes
//!
//! * **Fail early**: The lag schedule is checked against the series length
//!   before anything is allocated.
//! * **Missing cells**: Time indices before the start of the series, and
//!   non-finite observations, become missing cells rather than errors.
//! * **Pruning**: Columns that end up entirely missing are dropped; the
//!   survivors keep their schedule order.
//!
//! ## Key concepts
//!
//! * **τ = 0**: Legacy schedule `0, 1, …, E-1`, regardless of style.
//! * **Inclusive (style 0)**: `0, τ, 2τ, …, (E-1)τ`.
//! * **Shifted (style 1)**: `τ, 2τ, …, Eτ` (the current value is excluded).
//!
//! ## Invariants
//!
//! * The output has one row per series point.
//! * Every retained column has at least one non-missing cell.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SmapError;
use crate::primitives::matrix::EmbeddingMatrix;

// ============================================================================
// Lag Style
// ============================================================================

/// Where the lag schedule starts when `tau > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LagStyle {
    /// `0, τ, 2τ, …, (E-1)τ` (style code 0).
    #[default]
    Inclusive,

    /// `τ, 2τ, …, Eτ` (style code 1).
    Shifted,
}

impl LagStyle {
    /// Numeric style code.
    pub fn code(self) -> i64 {
        match self {
            LagStyle::Inclusive => 0,
            LagStyle::Shifted => 1,
        }
    }
}

impl TryFrom<i64> for LagStyle {
    type Error = SmapError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LagStyle::Inclusive),
            1 => Ok(LagStyle::Shifted),
            other => Err(SmapError::InvalidLagStyle(other)),
        }
    }
}

impl Display for LagStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LagStyle::Inclusive => write!(f, "Inclusive"),
            LagStyle::Shifted => write!(f, "Shifted"),
        }
    }
}

// ============================================================================
// Lag Schedule
// ============================================================================

/// Lag of column `j` (0-based) of the schedule.
///
/// Saturates at `usize::MAX`, which no series can accommodate.
#[inline]
pub fn lag_at(j: usize, tau: usize, style: LagStyle) -> usize {
    match (tau, style) {
        (0, _) => j,
        (_, LagStyle::Shifted) => j.saturating_add(1).saturating_mul(tau),
        (_, LagStyle::Inclusive) => j.saturating_mul(tau),
    }
}

/// Full lag schedule for embedding dimension `dimension`.
pub fn lag_schedule(dimension: usize, tau: usize, style: LagStyle) -> Vec<usize> {
    (0..dimension).map(|j| lag_at(j, tau, style)).collect()
}

/// Largest lag of the schedule, `None` for an empty schedule.
#[inline]
pub fn max_lag(dimension: usize, tau: usize, style: LagStyle) -> Option<usize> {
    dimension.checked_sub(1).map(|last| lag_at(last, tau, style))
}

// ============================================================================
// Embedding
// ============================================================================

/// Embed `series` with dimension `dimension`, lag spacing `tau` and `style`.
///
/// Non-finite observations are recorded as missing cells.
///
/// # Errors
///
/// * [`SmapError::EmptyInput`] for an empty series.
/// * [`SmapError::InvalidEmbeddingDimension`] for `dimension == 0`.
/// * [`SmapError::InvalidParameters`] if the largest lag is `>= series.len()`.
/// * [`SmapError::InsufficientEmbeddingDimension`] if every column is missing.
pub fn embed<T: Float>(
    series: &[T],
    dimension: usize,
    tau: usize,
    style: LagStyle,
) -> Result<EmbeddingMatrix<T>, SmapError> {
    let n = series.len();
    if n == 0 {
        return Err(SmapError::EmptyInput);
    }
    let largest =
        max_lag(dimension, tau, style).ok_or(SmapError::InvalidEmbeddingDimension(dimension))?;
    if largest >= n {
        return Err(SmapError::InvalidParameters {
            max_lag: largest,
            series_len: n,
        });
    }

    let lags = lag_schedule(dimension, tau, style);
    let mut matrix = EmbeddingMatrix::missing(n, lags.clone());

    for t in 0..n {
        for (j, &lag) in lags.iter().enumerate() {
            if let Some(source) = t.checked_sub(lag) {
                let value = series[source];
                if value.is_finite() {
                    matrix.set(t, j, Some(value));
                }
            }
        }
    }

    let keep: Vec<bool> = (0..dimension).map(|j| matrix.column_has_data(j)).collect();
    let retained = keep.iter().filter(|&&k| k).count();
    if retained == 0 {
        return Err(SmapError::InsufficientEmbeddingDimension { dimension, tau });
    }
    if retained == dimension {
        log::debug!(
            "embedded {} points with E={}, tau={}, style={}",
            n,
            dimension,
            tau,
            style
        );
        return Ok(matrix);
    }

    log::debug!(
        "embedded {} points with E={}, tau={}, style={}; pruned {} empty column(s)",
        n,
        dimension,
        tau,
        style,
        dimension - retained
    );
    Ok(matrix.retain_columns(&keep))
}
