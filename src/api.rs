//! High-level API for embedding and S-Map prediction.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: fluent builders for the
//! embedding and the S-Map model, and free functions mirroring the classic
//! `embed` / `smap` call signatures.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless models**: Built models only hold configuration; every call
//!   is a pure function of its inputs.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Embed::new()` or `SMap::new()`.
//! 2. Chain configuration methods (`.dimension()`, `.theta()`, etc.).
//! 3. Call `.build()` to validate and obtain the model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SMapConfig, SMapExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::skill;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::embedding::{LagStyle, embed};
pub use crate::algorithms::regression::LocalLinearModel;
pub use crate::evaluation::skill::SkillScores;
pub use crate::primitives::errors::SmapError;
pub use crate::primitives::matrix::EmbeddingMatrix;

/// Default embedding dimension.
pub const DEFAULT_DIMENSION: usize = 3;

/// Default lag spacing.
pub const DEFAULT_TAU: usize = 1;

/// Default number of neighbors (`E + 1` for the default dimension).
pub const DEFAULT_NUM_NEIGHBORS: usize = DEFAULT_DIMENSION + 1;

/// Default locality parameter.
pub const DEFAULT_THETA: f64 = 1.0;

// ============================================================================
// Embedding Builder
// ============================================================================

/// Fluent builder for time-delay embedding.
#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    /// Embedding dimension E.
    pub dimension: Option<usize>,

    /// Lag spacing tau (0 selects the legacy `0..E` schedule).
    pub tau: Option<usize>,

    /// Lag schedule style when tau > 0.
    pub style: Option<LagStyle>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl EmbedBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        if self.dimension.is_some() {
            self.duplicate_param = Some("dimension");
        }
        self.dimension = Some(dimension);
        self
    }

    /// Set the lag spacing.
    pub fn tau(mut self, tau: usize) -> Self {
        if self.tau.is_some() {
            self.duplicate_param = Some("tau");
        }
        self.tau = Some(tau);
        self
    }

    /// Set the lag style.
    pub fn style(mut self, style: LagStyle) -> Self {
        if self.style.is_some() {
            self.duplicate_param = Some("style");
        }
        self.style = Some(style);
        self
    }

    /// Validate the configuration and build the embedder.
    pub fn build(self) -> Result<Embedder, SmapError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SmapError::DuplicateParameter { parameter });
        }

        let dimension = self.dimension.unwrap_or(DEFAULT_DIMENSION);
        Validator::validate_dimension(dimension)?;

        Ok(Embedder {
            dimension,
            tau: self.tau.unwrap_or(DEFAULT_TAU),
            style: self.style.unwrap_or_default(),
        })
    }
}

/// Validated embedding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embedder {
    /// Embedding dimension E.
    pub dimension: usize,
    /// Lag spacing tau.
    pub tau: usize,
    /// Lag schedule style.
    pub style: LagStyle,
}

impl Embedder {
    /// Embed a series.
    pub fn embed<T: Float>(&self, series: &[T]) -> Result<EmbeddingMatrix<T>, SmapError> {
        embed(series, self.dimension, self.tau, self.style)
    }
}

// ============================================================================
// S-Map Builder
// ============================================================================

/// Fluent builder for S-Map prediction.
#[derive(Debug, Clone)]
pub struct SMapBuilder<T> {
    /// Number of nearest neighbors per local fit.
    pub num_neighbors: Option<usize>,

    /// Locality parameter θ.
    pub theta: Option<T>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + Debug + Send + Sync> Default for SMapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + Debug + Send + Sync> SMapBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            num_neighbors: None,
            theta: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of nearest neighbors.
    ///
    /// Zero is accepted and makes every prediction missing.
    pub fn neighbors(mut self, num_neighbors: usize) -> Self {
        if self.num_neighbors.is_some() {
            self.duplicate_param = Some("neighbors");
        }
        self.num_neighbors = Some(num_neighbors);
        self
    }

    /// Set the locality parameter θ.
    pub fn theta(mut self, theta: T) -> Self {
        if self.theta.is_some() {
            self.duplicate_param = Some("theta");
        }
        self.theta = Some(theta);
        self
    }

    /// Enable or disable parallel execution (default: enabled).
    ///
    /// Has no effect without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<SMapModel<T>, SmapError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SmapError::DuplicateParameter { parameter });
        }

        let theta = match self.theta {
            Some(theta) => theta,
            None => T::from(DEFAULT_THETA).ok_or_else(|| {
                SmapError::InvalidNumericValue("default theta not representable".into())
            })?,
        };
        Validator::validate_theta(theta)?;

        Ok(SMapModel {
            config: SMapConfig {
                num_neighbors: self.num_neighbors.unwrap_or(DEFAULT_NUM_NEIGHBORS),
                theta,
                parallel: self.parallel.unwrap_or(true),
            },
        })
    }
}

/// Validated S-Map model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SMapModel<T> {
    config: SMapConfig<T>,
}

impl<T: FloatLinalg + Debug + Send + Sync> SMapModel<T> {
    /// The model configuration.
    pub fn config(&self) -> &SMapConfig<T> {
        &self.config
    }

    /// Predict `target` at the `prediction` rows of `matrix` from `library` rows.
    ///
    /// The result has `target.len()` entries; rows outside `prediction`, or
    /// without a valid local fit, are `None`.
    pub fn predict(
        &self,
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
    ) -> Result<Vec<Option<T>>, SmapError> {
        SMapExecutor::run(matrix, target, library, prediction, &self.config)
    }

    /// Pearson correlation of the predictions, `None` below three predictions.
    pub fn correlation(
        &self,
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
    ) -> Result<Option<T>, SmapError> {
        let predicted = self.predict(matrix, target, library, prediction)?;
        Ok(skill::correlation(&predicted, target))
    }

    /// Correlation, MAE and RMSE of the predictions.
    pub fn behavior(
        &self,
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
    ) -> Result<SkillScores<T>, SmapError> {
        let predicted = self.predict(matrix, target, library, prediction)?;
        Ok(SkillScores::compute(&predicted, target))
    }

    /// Local linear model fitted around a single `query` row.
    pub fn local_model(
        &self,
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        query: usize,
    ) -> Result<Option<LocalLinearModel<T>>, SmapError> {
        SMapExecutor::local_model(matrix, target, library, query, &self.config)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// S-Map predictions for `prediction` rows using `library` rows as neighbors.
pub fn predict_smap<T: FloatLinalg + Debug + Send + Sync>(
    matrix: &EmbeddingMatrix<T>,
    target: &[T],
    library: &[usize],
    prediction: &[usize],
    num_neighbors: usize,
    theta: T,
) -> Result<Vec<Option<T>>, SmapError> {
    SMapExecutor::run(
        matrix,
        target,
        library,
        prediction,
        &SMapConfig::new(num_neighbors, theta),
    )
}

/// Pearson correlation of S-Map predictions with `target`.
pub fn correlation_score<T: FloatLinalg + Debug + Send + Sync>(
    matrix: &EmbeddingMatrix<T>,
    target: &[T],
    library: &[usize],
    prediction: &[usize],
    num_neighbors: usize,
    theta: T,
) -> Result<Option<T>, SmapError> {
    let predicted = predict_smap(matrix, target, library, prediction, num_neighbors, theta)?;
    Ok(skill::correlation(&predicted, target))
}

/// Correlation, MAE and RMSE of S-Map predictions against `target`.
pub fn behavior_score<T: FloatLinalg + Debug + Send + Sync>(
    matrix: &EmbeddingMatrix<T>,
    target: &[T],
    library: &[usize],
    prediction: &[usize],
    num_neighbors: usize,
    theta: T,
) -> Result<SkillScores<T>, SmapError> {
    let predicted = predict_smap(matrix, target, library, prediction, num_neighbors, theta)?;
    Ok(SkillScores::compute(&predicted, target))
}
