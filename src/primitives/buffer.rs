//! Scratch buffers recycled across prediction points.
//!
//! ## Purpose
//!
//! Every prediction index runs its own neighbor search and local solve. This
//! module provides the reusable storage those steps write into, so a worker
//! allocates once and then only clears logical lengths between points.
//!
//! ## Design notes
//!
//! * **Slot**: A thin `Vec` wrapper that grows on demand and never shrinks.
//! * **Generic candidates**: `SearchBuffer` is generic over the candidate type
//!   so this layer stays independent of the neighbor search in `math`.
//! * **One per worker**: Buffers are passed explicitly; parallel execution
//!   creates one set per rayon worker.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between points, never deallocated.
//! * Capacity is monotonically increasing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Ensure the slot has at least the given capacity.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Search and Fitting Buffers
// ============================================================================

/// Candidate storage for one neighbor search.
#[derive(Debug, Clone)]
pub struct SearchBuffer<C> {
    /// Every library row with a computable distance to the query.
    pub candidates: Slot<C>,
}

impl<C> SearchBuffer<C> {
    /// Create a search buffer sized for a library of `n_library` rows.
    pub fn new(n_library: usize) -> Self {
        Self {
            candidates: Slot::new(n_library),
        }
    }

    /// Clear all candidates for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.candidates.clear();
    }
}

/// Storage for the weighted linear system of one local fit.
#[derive(Debug, Clone)]
pub struct FittingBuffer<T> {
    /// Row-major design matrix, `k x (dim + 1)`.
    pub design: Slot<T>,
    /// Weighted response vector, length `k`.
    pub response: Slot<T>,
    /// Complete state vector of the query row.
    pub query: Slot<T>,
}

impl<T> FittingBuffer<T> {
    /// Create a fitting buffer for `k` neighbors in `dim` dimensions.
    pub fn new(k: usize, dim: usize) -> Self {
        Self {
            design: Slot::new(k * (dim + 1)),
            response: Slot::new(k),
            query: Slot::new(dim),
        }
    }

    /// Grow the buffers for `k` neighbors in `dim` dimensions.
    pub fn ensure_capacity(&mut self, k: usize, dim: usize) {
        self.design.ensure_capacity(k * (dim + 1));
        self.response.ensure_capacity(k);
        self.query.ensure_capacity(dim);
    }

    /// Clear all buffers for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.design.clear();
        self.response.clear();
        self.query.clear();
    }
}
