//! Exponential similarity kernel for S-Map weighting.
//!
//! ## Purpose
//!
//! This module turns neighbor distances into regression weights. Distances are
//! first scaled by their mean so `theta` is independent of the units of the
//! series.
//!
//! ## Key concepts
//!
//! * **Weight**: `w = exp(-θ · d / d̄)` where `d̄` is the mean candidate distance.
//! * **θ = 0**: Every neighbor gets weight 1 (a global linear fit over the
//!   selected neighbors).
//! * **Large θ**: Weight concentrates on the closest neighbors.
//!
//! ## Invariants
//!
//! * Weights lie in `(0, 1]` for `θ >= 0`.
//! * A zero mean distance (all candidates coincide with the query) yields
//!   uniform weights.

// External dependencies
use num_traits::Float;

/// Arithmetic mean of the candidate distances, `None` for no candidates.
#[inline]
pub fn mean_distance<T: Float>(distances: impl IntoIterator<Item = T>) -> Option<T> {
    let (sum, count) = distances
        .into_iter()
        .fold((T::zero(), 0usize), |(s, n), d| (s + d, n + 1));
    if count == 0 {
        return None;
    }
    Some(sum / T::from(count)?)
}

/// S-Map locality kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialKernel<T> {
    /// Locality parameter θ.
    pub theta: T,
}

impl<T: Float> ExponentialKernel<T> {
    /// Create a kernel with locality `theta`.
    pub fn new(theta: T) -> Self {
        Self { theta }
    }

    /// Weight of a neighbor at `distance` given the mean candidate distance.
    #[inline]
    pub fn weight(&self, distance: T, mean_distance: T) -> T {
        if mean_distance <= T::zero() {
            return T::one();
        }
        (-self.theta * distance / mean_distance).exp()
    }
}
