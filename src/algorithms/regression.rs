//! Locally weighted linear regression for one S-Map query.
//!
//! ## Purpose
//!
//! Given a query row and its weighted neighborhood, this module fits a linear
//! model with intercept over the neighbors' state vectors and evaluates it at
//! the query.
//!
//! ## Design notes
//!
//! * **Weighted system**: Row `i` of the design matrix is `wᵢ · [xᵢ ; 1]` and
//!   the response is `wᵢ · yᵢ`, so ordinary least squares on the scaled system
//!   is the weighted fit.
//! * **Truncated SVD**: The system is solved through `FloatLinalg`, which
//!   zeroes the inverse of singular values below `1e-5 · max(S)`. Rank
//!   deficiency, duplicated neighbors and `k < dim + 1` need no special case.
//! * **Complete data**: A fit needs complete state vectors and finite targets
//!   for the query and every selected neighbor; otherwise there is no model.
//!
//! ## Invariants
//!
//! * Coefficient vectors have length `dim + 1`; the last entry is the intercept.
//! * A returned prediction is always finite.
//!
//! ## Non-goals
//!
//! * This module does not select neighbors or compute weights.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{FloatLinalg, SINGULAR_VALUE_RTOL};
use crate::math::neighborhood::Neighborhood;
use crate::primitives::buffer::FittingBuffer;
use crate::primitives::matrix::EmbeddingMatrix;

// ============================================================================
// Local Linear Model
// ============================================================================

/// Linear model `ŷ = Σ cⱼ xⱼ + c₀` fitted around one query point.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalLinearModel<T> {
    /// Slopes followed by the intercept.
    pub coefficients: Vec<T>,
}

impl<T: Float> LocalLinearModel<T> {
    /// Number of state dimensions the model expects.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Slope coefficients, one per state dimension.
    #[inline]
    pub fn slopes(&self) -> &[T] {
        &self.coefficients[..self.dimension()]
    }

    /// Intercept term.
    #[inline]
    pub fn intercept(&self) -> T {
        self.coefficients
            .last()
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Evaluate the model at `state`.
    pub fn predict(&self, state: &[T]) -> T {
        debug_assert_eq!(state.len(), self.dimension());
        self.slopes()
            .iter()
            .zip(state)
            .fold(self.intercept(), |acc, (&c, &x)| acc + c * x)
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to fit and evaluate the local model of one query row.
pub struct LocalRegression<'a, T: FloatLinalg> {
    /// State space holding query and neighbors.
    pub matrix: &'a EmbeddingMatrix<T>,
    /// Values to predict, aligned with the matrix rows.
    pub target: &'a [T],
    /// Row being predicted.
    pub query_idx: usize,
    /// Selected neighbors with their weights.
    pub neighborhood: &'a Neighborhood<T>,
}

impl<'a, T: FloatLinalg> LocalRegression<'a, T> {
    /// Create a regression context for one query row.
    pub fn new(
        matrix: &'a EmbeddingMatrix<T>,
        target: &'a [T],
        query_idx: usize,
        neighborhood: &'a Neighborhood<T>,
    ) -> Self {
        Self {
            matrix,
            target,
            query_idx,
            neighborhood,
        }
    }

    /// Fit the local model and return the prediction at the query row.
    pub fn fit(&self, buffer: &mut FittingBuffer<T>) -> Option<T> {
        let model = self.fit_model(buffer)?;
        let prediction = model.predict(&buffer.query);
        prediction.is_finite().then_some(prediction)
    }

    /// Fit the local model around the query row.
    ///
    /// On success `buffer.query` holds the query state vector.
    pub fn fit_model(&self, buffer: &mut FittingBuffer<T>) -> Option<LocalLinearModel<T>> {
        let k = self.neighborhood.len();
        if k == 0 {
            return None;
        }

        let dim = self.matrix.ncols();
        buffer.clear();
        buffer.ensure_capacity(k, dim);

        for cell in self.matrix.row(self.query_idx) {
            buffer.query.push((*cell)?);
        }

        self.build_system(buffer)?;

        let rtol = T::from(SINGULAR_VALUE_RTOL)?;
        let coefficients =
            T::solve_truncated_svd(&buffer.design, &buffer.response, k, dim + 1, rtol)?;
        Some(LocalLinearModel { coefficients })
    }

    /// Fill the weighted design matrix and response vector.
    ///
    /// Returns `None` if a neighbor has a missing cell or a non-finite target.
    fn build_system(&self, buffer: &mut FittingBuffer<T>) -> Option<()> {
        let nbh = self.neighborhood;

        for (&idx, &w) in nbh.indices.iter().zip(nbh.weights.iter()) {
            let y = self.target[idx];
            if !y.is_finite() {
                return None;
            }
            for cell in self.matrix.row(idx) {
                buffer.design.push((*cell)? * w);
            }
            buffer.design.push(w);
            buffer.response.push(y * w);
        }

        Some(())
    }
}
