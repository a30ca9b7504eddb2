//! Neighbor search over a library of state-space rows.
//!
//! ## Purpose
//!
//! For one query row, this module collects every library row with a
//! computable distance, then keeps the `k` nearest together with their
//! kernel weights. The result feeds the local regression.
//!
//! ## Design notes
//!
//! * **Exhaustive scan**: Partial-overlap distances are not a metric, so the
//!   library is scanned linearly instead of being indexed spatially.
//! * **Selection**: `select_nth_unstable_by` isolates the `k` nearest in
//!   O(n); only those `k` are then sorted.
//! * **Buffers**: Candidates and the neighborhood are written into caller
//!   storage so workers can reuse them across points.
//!
//! ## Invariants
//!
//! * The query row never appears among its own candidates.
//! * Candidates are ordered by `(distance, row index)`, so selection is
//!   deterministic even with tied distances.
//! * `mean_distance` is taken over all candidates, not only the selected ones.
//!
//! ## Non-goals
//!
//! * This module does not decide what happens to a query without neighbors
//!   (the executor leaves it missing).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::{self, Equal};
use num_traits::Float;

// Internal dependencies
use crate::math::distance::overlap_rms;
use crate::math::kernel::{ExponentialKernel, mean_distance};
use crate::primitives::buffer::SearchBuffer;
use crate::primitives::matrix::EmbeddingMatrix;

// ============================================================================
// Candidate
// ============================================================================

/// A library row with a computable distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T> {
    /// Row index in the state space.
    pub index: usize,
    /// Overlap RMS distance to the query.
    pub distance: T,
}

impl<T: Float> Candidate<T> {
    /// Total order by distance, then by row index.
    #[inline]
    pub fn nearest_first(a: &Self, b: &Self) -> Ordering {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Equal)
            .then(a.index.cmp(&b.index))
    }
}

/// Collect the candidates of `query` from `library` into `buffer`.
///
/// The query row itself is skipped, as is any library row that shares no
/// observed dimension with it. Returns the number of candidates found.
pub fn collect_candidates<T: Float>(
    matrix: &EmbeddingMatrix<T>,
    query: usize,
    library: &[usize],
    buffer: &mut SearchBuffer<Candidate<T>>,
) -> usize {
    buffer.clear();
    let query_row = matrix.row(query);

    for &index in library {
        if index == query {
            continue;
        }
        if let Some(distance) = overlap_rms(matrix.row(index), query_row) {
            buffer.candidates.push(Candidate { index, distance });
        }
    }

    buffer.candidates.len()
}

// ============================================================================
// Neighborhood
// ============================================================================

/// The `k` nearest candidates of a query and their kernel weights.
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    /// Row indices, nearest first.
    pub indices: Vec<usize>,
    /// Distances matching `indices`.
    pub distances: Vec<T>,
    /// Kernel weights matching `indices`.
    pub weights: Vec<T>,
    /// Mean distance over all candidates (before selection).
    pub mean_distance: T,
}

impl<T: Float> Neighborhood<T> {
    /// Create a new empty neighborhood.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate buffers for a neighborhood of size k.
    pub fn with_capacity(k: usize) -> Self {
        Self {
            indices: Vec::with_capacity(k),
            distances: Vec::with_capacity(k),
            weights: Vec::with_capacity(k),
            mean_distance: T::zero(),
        }
    }

    /// Returns the number of neighbors currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no neighbors are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reset to an empty neighborhood.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.distances.clear();
        self.weights.clear();
        self.mean_distance = T::zero();
    }

    /// Keep the `k` nearest candidates and weight them with `kernel`.
    ///
    /// Reorders `candidates` in place. Uses `min(k, candidates.len())`
    /// neighbors; the neighborhood is empty when either is zero.
    pub fn select(
        &mut self,
        candidates: &mut [Candidate<T>],
        k: usize,
        kernel: &ExponentialKernel<T>,
    ) {
        self.clear();
        let k = k.min(candidates.len());
        if k == 0 {
            return;
        }

        let mean = mean_distance(candidates.iter().map(|c| c.distance)).unwrap_or(T::zero());

        if k < candidates.len() {
            candidates.select_nth_unstable_by(k - 1, Candidate::nearest_first);
        }
        let nearest = &mut candidates[..k];
        nearest.sort_unstable_by(Candidate::nearest_first);

        for c in nearest.iter() {
            self.indices.push(c.index);
            self.distances.push(c.distance);
            self.weights.push(kernel.weight(c.distance, mean));
        }
        self.mean_distance = mean;
    }
}

impl<T: Float> Default for Neighborhood<T> {
    fn default() -> Self {
        Self::new()
    }
}
