//! Distances between partially observed state vectors.
//!
//! ## Purpose
//!
//! This module measures how far apart two rows of a state space are when
//! either row may have missing cells. Only dimensions observed in both rows
//! contribute.
//!
//! ## Key concepts
//!
//! * **Shared dimensions**: Columns where both cells are present.
//! * **Overlap RMS**: `sqrt(Σ (aⱼ - bⱼ)² / m)` over the `m` shared dimensions,
//!   which keeps rows with different amounts of overlap on the same scale.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is undefined (`None`) when no dimension is shared.

// External dependencies
use num_traits::Float;

/// Root-mean-square difference over the dimensions observed in both rows.
///
/// Returns `None` when the rows share no observed dimension.
#[inline]
pub fn overlap_rms<T: Float>(a: &[Option<T>], b: &[Option<T>]) -> Option<T> {
    debug_assert_eq!(a.len(), b.len(), "Rows must have same dimension");

    let (sum_sq, count) = a
        .iter()
        .zip(b.iter())
        .filter_map(|(&ai, &bi)| Some(ai? - bi?))
        .fold((T::zero(), 0usize), |(acc, n), diff| (acc + diff * diff, n + 1));

    if count == 0 {
        return None;
    }
    let count = T::from(count)?;
    Some((sum_sq / count).sqrt())
}
