//! Workspace for reusable S-Map buffers.
//!
//! This module bundles the per-point scratch storage so one allocation serves
//! every prediction index handled by a worker.

use num_traits::Float;

use crate::math::neighborhood::{Candidate, Neighborhood};
use crate::primitives::buffer::{FittingBuffer, SearchBuffer};

/// Pre-allocated buffers for one S-Map worker.
pub struct SMapWorkspace<T: Float> {
    /// Candidate distances for the current query.
    pub search_buffer: SearchBuffer<Candidate<T>>,
    /// Selected neighbors and weights.
    pub neighborhood: Neighborhood<T>,
    /// Weighted linear system.
    pub fitting_buffer: FittingBuffer<T>,
}

impl<T: Float> SMapWorkspace<T> {
    /// Create a workspace for a library of `n_library` rows, `k` neighbors
    /// and `dim` state dimensions.
    ///
    /// A query never has more neighbors than library rows, so `k` is capped
    /// at `n_library` before anything is allocated.
    pub fn new(n_library: usize, k: usize, dim: usize) -> Self {
        let k = k.min(n_library);
        Self {
            search_buffer: SearchBuffer::new(n_library),
            neighborhood: Neighborhood::with_capacity(k),
            fitting_buffer: FittingBuffer::new(k, dim),
        }
    }
}
