//! Execution engine for S-Map prediction.
//!
//! ## Purpose
//!
//! This module orchestrates a prediction run: for every prediction index it
//! runs the neighbor search, weighting and local regression, and assembles
//! the results into a vector aligned with the target series.
//!
//! ## Design notes
//!
//! * **Degenerate input**: Zero neighbors, an empty library or an empty
//!   prediction set return an all-missing vector before any validation or
//!   computation.
//! * **Independent points**: Each prediction index reads only the shared
//!   state space, target and library and writes one output slot.
//! * **Parallel execution**: With the `parallel` feature and the hint on,
//!   indices are dispatched through rayon with one workspace per worker.
//!   Results do not depend on the execution mode.
//!
//! ## Invariants
//!
//! * The output has `target.len()` entries.
//! * Entries outside the prediction set are missing.
//! * A query row is never its own neighbor.
//!
//! ## Non-goals
//!
//! * This module does not score predictions (see `evaluation`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::regression::{LocalLinearModel, LocalRegression};
use crate::engine::validator::Validator;
use crate::engine::workspace::SMapWorkspace;
use crate::math::kernel::ExponentialKernel;
use crate::math::linalg::FloatLinalg;
use crate::math::neighborhood::collect_candidates;
use crate::primitives::errors::SmapError;
use crate::primitives::matrix::EmbeddingMatrix;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of one S-Map run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SMapConfig<T> {
    /// Number of nearest neighbors per local fit.
    pub num_neighbors: usize,
    /// Locality parameter θ of the exponential kernel.
    pub theta: T,
    /// Evaluate prediction indices in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl<T: FloatLinalg> SMapConfig<T> {
    /// Configuration with `num_neighbors`, `theta` and parallel execution on.
    pub fn new(num_neighbors: usize, theta: T) -> Self {
        Self {
            num_neighbors,
            theta,
            parallel: true,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless S-Map execution engine.
pub struct SMapExecutor;

impl SMapExecutor {
    /// Predict `target` at every index of `prediction`.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite `theta`, a target whose length differs from the
    /// number of rows, or an out-of-range index. Degenerate input is not an
    /// error.
    pub fn run<T>(
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
        config: &SMapConfig<T>,
    ) -> Result<Vec<Option<T>>, SmapError>
    where
        T: FloatLinalg + Debug + Send + Sync,
    {
        let mut output = vec![None; target.len()];

        if config.num_neighbors == 0 || library.is_empty() || prediction.is_empty() {
            log::debug!(
                "S-Map skipped: num_neighbors={}, library={}, prediction={}",
                config.num_neighbors,
                library.len(),
                prediction.len()
            );
            return Ok(output);
        }

        Validator::validate_theta(config.theta)?;
        Validator::validate_prediction_inputs(matrix, target, library, prediction)?;

        let kernel = ExponentialKernel::new(config.theta);
        let values = Self::dispatch(matrix, target, library, prediction, config, &kernel);

        for (&p, value) in prediction.iter().zip(values) {
            output[p] = value;
        }

        let produced = output.iter().filter(|v| v.is_some()).count();
        log::debug!(
            "S-Map predicted {} of {} indices (library={}, k={}, theta={:?}, parallel={})",
            produced,
            prediction.len(),
            library.len(),
            config.num_neighbors,
            config.theta,
            Self::runs_parallel(config)
        );

        Ok(output)
    }

    /// Fit the local model of a single query row.
    ///
    /// Returns `None` when the query has no usable neighbors or no valid fit.
    pub fn local_model<T>(
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        query: usize,
        config: &SMapConfig<T>,
    ) -> Result<Option<LocalLinearModel<T>>, SmapError>
    where
        T: FloatLinalg + Debug + Send + Sync,
    {
        if config.num_neighbors == 0 || library.is_empty() {
            return Ok(None);
        }
        Validator::validate_theta(config.theta)?;
        Validator::validate_prediction_inputs(matrix, target, library, &[query])?;

        let kernel = ExponentialKernel::new(config.theta);
        let k = config.num_neighbors;
        let mut workspace = SMapWorkspace::new(library.len(), k, matrix.ncols());
        if !Self::select_neighbors(matrix, library, query, k, &kernel, &mut workspace) {
            return Ok(None);
        }

        let SMapWorkspace {
            neighborhood,
            fitting_buffer,
            ..
        } = &mut workspace;
        let regression = LocalRegression::new(matrix, target, query, neighborhood);
        Ok(regression.fit_model(fitting_buffer))
    }

    /// Predict one query row using the given workspace.
    pub fn predict_point<T>(
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        query: usize,
        num_neighbors: usize,
        kernel: &ExponentialKernel<T>,
        workspace: &mut SMapWorkspace<T>,
    ) -> Option<T>
    where
        T: FloatLinalg,
    {
        if !Self::select_neighbors(matrix, library, query, num_neighbors, kernel, workspace) {
            return None;
        }

        let SMapWorkspace {
            neighborhood,
            fitting_buffer,
            ..
        } = workspace;
        let value = LocalRegression::new(matrix, target, query, neighborhood).fit(fitting_buffer);
        if value.is_none() {
            log::trace!("row {}: no valid local fit", query);
        }
        value
    }

    /// Collect candidates and keep the nearest; false if none are usable.
    fn select_neighbors<T>(
        matrix: &EmbeddingMatrix<T>,
        library: &[usize],
        query: usize,
        num_neighbors: usize,
        kernel: &ExponentialKernel<T>,
        workspace: &mut SMapWorkspace<T>,
    ) -> bool
    where
        T: FloatLinalg,
    {
        let SMapWorkspace {
            search_buffer,
            neighborhood,
            ..
        } = workspace;

        if collect_candidates(matrix, query, library, search_buffer) == 0 {
            log::trace!("row {}: no library row shares an observed dimension", query);
            neighborhood.clear();
            return false;
        }
        neighborhood.select(&mut search_buffer.candidates, num_neighbors, kernel);
        !neighborhood.is_empty()
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    #[cfg(feature = "parallel")]
    fn runs_parallel<T>(config: &SMapConfig<T>) -> bool {
        config.parallel
    }

    #[cfg(not(feature = "parallel"))]
    fn runs_parallel<T>(_config: &SMapConfig<T>) -> bool {
        false
    }

    /// Evaluate every prediction index, returning values in `prediction` order.
    fn dispatch<T>(
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
        config: &SMapConfig<T>,
        kernel: &ExponentialKernel<T>,
    ) -> Vec<Option<T>>
    where
        T: FloatLinalg + Debug + Send + Sync,
    {
        let k = config.num_neighbors;
        let dim = matrix.ncols();

        #[cfg(feature = "parallel")]
        if config.parallel {
            return prediction
                .par_iter()
                .map_init(
                    || SMapWorkspace::new(library.len(), k, dim),
                    |workspace, &p| {
                        Self::predict_point(matrix, target, library, p, k, kernel, workspace)
                    },
                )
                .collect();
        }

        let mut workspace = SMapWorkspace::new(library.len(), k, dim);
        prediction
            .iter()
            .map(|&p| Self::predict_point(matrix, target, library, p, k, kernel, &mut workspace))
            .collect()
    }
}
