//! Forecast skill summary for S-Map predictions.
//!
//! ## Purpose
//!
//! This module condenses a prediction vector into correlation and error
//! scores against the target series.
//!
//! ## Invariants
//!
//! * With fewer than [`MIN_SCORED_PREDICTIONS`] present predictions every
//!   score is `None`; one or two points do not make a meaningful correlation.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::evaluation::metrics::{
    count_non_missing, mean_absolute_error, pearson_correlation, root_mean_square_error,
};

/// Minimum number of present predictions before any score is reported.
pub const MIN_SCORED_PREDICTIONS: usize = 3;

/// Correlation and error scores of one prediction run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillScores<T> {
    /// Pearson correlation between predictions and observations.
    pub rho: Option<T>,
    /// Mean absolute error.
    pub mae: Option<T>,
    /// Root mean square error.
    pub rmse: Option<T>,
}

impl<T: Float> SkillScores<T> {
    /// All scores missing.
    pub fn missing() -> Self {
        Self {
            rho: None,
            mae: None,
            rmse: None,
        }
    }

    /// Score `predicted` against `observed`, applying the minimum-count gate.
    pub fn compute(predicted: &[Option<T>], observed: &[T]) -> Self {
        if !has_enough_predictions(predicted) {
            return Self::missing();
        }
        Self {
            rho: pearson_correlation(predicted, observed),
            mae: mean_absolute_error(predicted, observed),
            rmse: root_mean_square_error(predicted, observed),
        }
    }

    /// Scores as `[rho, mae, rmse]`.
    pub fn to_array(&self) -> [Option<T>; 3] {
        [self.rho, self.mae, self.rmse]
    }
}

/// Gated correlation only.
pub fn correlation<T: Float>(predicted: &[Option<T>], observed: &[T]) -> Option<T> {
    if !has_enough_predictions(predicted) {
        return None;
    }
    pearson_correlation(predicted, observed)
}

#[inline]
fn has_enough_predictions<T>(predicted: &[Option<T>]) -> bool {
    count_non_missing(predicted) >= MIN_SCORED_PREDICTIONS
}

impl<T: Float + Display> Display for SkillScores<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fn line<T: Display>(
            f: &mut Formatter<'_>,
            label: &str,
            value: &Option<T>,
        ) -> fmt::Result {
            match value {
                Some(v) => writeln!(f, "  {:<6}{:>12.6}", label, v),
                None => writeln!(f, "  {:<6}{:>12}", label, "NA"),
            }
        }

        writeln!(f, "S-Map Skill:")?;
        line(f, "Rho:", &self.rho)?;
        line(f, "MAE:", &self.mae)?;
        line(f, "RMSE:", &self.rmse)
    }
}
