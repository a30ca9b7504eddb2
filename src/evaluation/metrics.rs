//! Pairwise skill statistics between predictions and observations.
//!
//! ## Purpose
//!
//! This module provides the summary statistics used to score a prediction
//! vector against its target: non-missing count, Pearson correlation, mean
//! absolute error and root mean square error.
//!
//! ## Design notes
//!
//! * **Pairwise skipping**: A pair contributes only when the prediction is
//!   present and the observation is finite.
//! * **Undefined results**: Statistics with no usable pair (or, for the
//!   correlation, zero variance) are `None`.
//!
//! ## Non-goals
//!
//! * This module does not apply a minimum-sample gate (see `skill`).

// External dependencies
use num_traits::Float;

/// Iterate over the usable `(prediction, observation)` pairs.
#[inline]
fn pairs<'a, T: Float>(
    predicted: &'a [Option<T>],
    observed: &'a [T],
) -> impl Iterator<Item = (T, T)> + 'a {
    debug_assert_eq!(predicted.len(), observed.len());
    predicted
        .iter()
        .zip(observed.iter())
        .filter_map(|(&p, &o)| p.filter(|_| o.is_finite()).map(|p| (p, o)))
}

/// Number of present values.
#[inline]
pub fn count_non_missing<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|v| v.is_some()).count()
}

/// Pearson correlation over usable pairs.
pub fn pearson_correlation<T: Float>(predicted: &[Option<T>], observed: &[T]) -> Option<T> {
    let (n, sum_p, sum_o) = pairs(predicted, observed).fold(
        (0usize, T::zero(), T::zero()),
        |(n, sp, so), (p, o)| (n + 1, sp + p, so + o),
    );
    if n == 0 {
        return None;
    }
    let count = T::from(n)?;
    let mean_p = sum_p / count;
    let mean_o = sum_o / count;

    let (cov, var_p, var_o) = pairs(predicted, observed).fold(
        (T::zero(), T::zero(), T::zero()),
        |(c, vp, vo), (p, o)| {
            let dp = p - mean_p;
            let d_o = o - mean_o;
            (c + dp * d_o, vp + dp * dp, vo + d_o * d_o)
        },
    );

    let denom = (var_p * var_o).sqrt();
    if denom <= T::zero() || !denom.is_finite() {
        return None;
    }
    let r = cov / denom;
    Some(r.max(-T::one()).min(T::one()))
}

/// Mean absolute error over usable pairs.
pub fn mean_absolute_error<T: Float>(predicted: &[Option<T>], observed: &[T]) -> Option<T> {
    let (n, sum) = pairs(predicted, observed)
        .fold((0usize, T::zero()), |(n, s), (p, o)| (n + 1, s + (p - o).abs()));
    if n == 0 {
        return None;
    }
    Some(sum / T::from(n)?)
}

/// Root mean square error over usable pairs.
pub fn root_mean_square_error<T: Float>(predicted: &[Option<T>], observed: &[T]) -> Option<T> {
    let (n, sum_sq) = pairs(predicted, observed).fold((0usize, T::zero()), |(n, s), (p, o)| {
        let diff = p - o;
        (n + 1, s + diff * diff)
    });
    if n == 0 {
        return None;
    }
    Some((sum_sq / T::from(n)?).sqrt())
}
