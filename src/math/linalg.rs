//! Linear algebra backend for the local S-Map solve.
//!
//! ## Purpose
//!
//! This module solves the weighted least-squares system of one local fit
//! through a truncated singular value decomposition. It is the only place the
//! crate touches nalgebra.
//!
//! ## Design notes
//!
//! * Works on any rectangular system: over-determined, square or
//!   under-determined (fewer neighbors than coefficients).
//! * Singular values below `rtol · max(S)` have their inverse set to zero,
//!   damping ill-conditioned directions instead of amplifying noise.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Relative singular value cutoff used by S-Map.
pub const SINGULAR_VALUE_RTOL: f64 = 1e-5;

/// Iteration cap for the SVD; a non-converging decomposition is a failed fit.
pub const MAX_SVD_ITERATIONS: usize = 10_000;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Least-squares solution of the row-major `rows x cols` system `a · x ≈ b`
    /// via an SVD pseudo-inverse truncated at `rtol · max(S)`.
    ///
    /// Returns `None` if the decomposition fails or the matrix is zero.
    fn solve_truncated_svd(
        a: &[Self],
        b: &[Self],
        rows: usize,
        cols: usize,
        rtol: Self,
    ) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_truncated_svd(
        a: &[Self],
        b: &[Self],
        rows: usize,
        cols: usize,
        rtol: Self,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_truncated_svd(a, b, rows, cols, rtol, f64::EPSILON)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_truncated_svd(
        a: &[Self],
        b: &[Self],
        rows: usize,
        cols: usize,
        rtol: Self,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_truncated_svd(a, b, rows, cols, rtol, f32::EPSILON)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Solve `a · x ≈ b` as `x = V · S⁺ · Uᵀ · b`.
    ///
    /// `eps` is the convergence tolerance of the SVD iteration.
    pub fn solve_truncated_svd<T: RealField + Copy>(
        a: &[T],
        b: &[T],
        rows: usize,
        cols: usize,
        rtol: T,
        eps: T,
    ) -> Option<Vec<T>> {
        debug_assert_eq!(a.len(), rows * cols);
        debug_assert_eq!(b.len(), rows);
        if rows == 0 || cols == 0 {
            return None;
        }

        let matrix = DMatrix::from_row_slice(rows, cols, a);
        let rhs = DVector::from_column_slice(b);

        let svd = matrix.try_svd(true, true, eps, MAX_SVD_ITERATIONS)?;
        let u = svd.u.as_ref()?;
        let v_t = svd.v_t.as_ref()?;
        let singular = &svd.singular_values;

        let max_s = singular
            .iter()
            .copied()
            .fold(T::zero(), |acc, s| if s > acc { s } else { acc });
        if max_s <= T::zero() {
            return None;
        }
        let cutoff = max_s * rtol;

        let mut projected = u.transpose() * rhs;
        for (p, &s) in projected.iter_mut().zip(singular.iter()) {
            *p = if s >= cutoff { *p / s } else { T::zero() };
        }

        let coefficients = v_t.transpose() * projected;
        Some(coefficients.as_slice().to_vec())
    }
}
