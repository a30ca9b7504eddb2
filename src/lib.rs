//! # S-Map: Time-Delay Embedding and Nonlinear Forecasting for Rust
//!
//! A compact implementation of the two workhorse primitives of empirical
//! dynamic modeling: reconstructing a state space from a scalar time series
//! (time-delay embedding) and forecasting on that state space with locally
//! weighted linear regression (S-Map).
//!
//! ## What is S-Map?
//!
//! S-Map (Sequential Locally Weighted Global Linear Maps) predicts a value
//! for a query state by fitting a linear model to the library states around
//! it. Neighbors are weighted by `exp(-θ · d / d̄)`, where `d̄` is the mean
//! distance from the query to the library:
//!
//! * `θ = 0` gives every neighbor the same weight (a global linear model).
//! * Larger `θ` concentrates the fit on the nearest states, exposing
//!   state-dependent (nonlinear) dynamics.
//!
//! Each local system is solved through a singular value decomposition whose
//! small singular values (below `1e-5 · max(S)`) are discarded, so duplicated
//! or collinear neighbors never blow up a prediction.
//!
//! **How it works:**
//!
//! 1. Embed the series: row `t` holds `x[t - L₁], x[t - L₂], …`
//! 2. For every prediction row, find the `k` nearest library rows (never the
//!    row itself)
//! 3. Weight them with the exponential kernel and solve the local regression
//! 4. Evaluate the local model at the query row
//!
//! ## Quick Start
//!
//! ```rust
//! use smap_rs::prelude::*;
//!
//! let series: Vec<f64> = (0..120).map(|t| (t as f64 * 0.3).sin()).collect();
//!
//! // One-step-ahead target: target[t] = series[t + 1]
//! let target: Vec<f64> = series[1..].iter().copied().chain([f64::NAN]).collect();
//!
//! // Reconstruct the state space
//! let matrix = Embed::new()
//!     .dimension(3)      // E = 3 lagged copies
//!     .tau(1)            // spacing between lags
//!     .build()?
//!     .embed(&series)?;
//!
//! // Build the model
//! let model = SMap::new()
//!     .neighbors(4)      // k nearest library states
//!     .theta(2.0)        // locality
//!     .build()?;
//!
//! let library: Vec<usize> = (2..80).collect();
//! let prediction: Vec<usize> = (80..119).collect();
//!
//! let predicted = model.predict(&matrix, &target, &library, &prediction)?;
//! assert_eq!(predicted.len(), target.len());
//! assert!(predicted[100].is_some());
//! assert!(predicted[10].is_none()); // not a prediction row
//!
//! let skill = model.behavior(&matrix, &target, &library, &prediction)?;
//! println!("{}", skill);
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ```text
//! S-Map Skill:
//!   Rho:      0.999999
//!   MAE:      0.000216
//!   RMSE:     0.000291
//! ```
//!
//! ### Free Functions
//!
//! The classic call signatures are available as free functions:
//!
//! ```rust
//! use smap_rs::prelude::*;
//!
//! let series = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let matrix = embed(&series, 3, 0, Inclusive)?;
//!
//! assert_eq!(matrix.row(0), &[Some(1.0), None, None]);
//! assert_eq!(matrix.row(2), &[Some(3.0), Some(2.0), Some(1.0)]);
//!
//! let predicted = predict_smap(&matrix, &series, &[0, 1], &[3, 4], 0, 1.0)?;
//! assert!(predicted.iter().all(Option::is_none)); // zero neighbors
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Embedding and prediction return `Result<_, SmapError>`. Errors are
//! reserved for configuration problems: a lag schedule that does not fit the
//! series, an embedding whose columns are all missing, a non-finite `theta`,
//! or an index outside the state space.
//!
//! Data sparsity is *not* an error. A prediction row with no usable neighbor
//! or no valid local fit is simply `None` in the output, and the rest of the
//! series is still predicted.
//!
//! ```rust
//! use smap_rs::prelude::*;
//!
//! match embed(&[1.0, 2.0, 3.0], 5, 1, Shifted) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(
//!         e,
//!         SmapError::InvalidParameters { max_lag: 5, series_len: 3 }
//!     ),
//! }
//! ```
//!
//! ## Parameters
//!
//! | Parameter     | Default   | Range              | Description                                   |
//! |---------------|-----------|--------------------|-----------------------------------------------|
//! | **dimension** | 3         | ≥ 1                | Embedding dimension E                         |
//! | **tau**       | 1         | ≥ 0                | Lag spacing (0 = legacy `0..E` schedule)      |
//! | **style**     | Inclusive | Inclusive, Shifted | Whether the schedule starts at 0 or at tau    |
//! | **neighbors** | 4         | ≥ 0                | Nearest neighbors per local fit (0 = no-op)   |
//! | **theta**     | 1.0       | finite             | Locality of the exponential kernel            |
//! | **parallel**  | true      | true/false         | Evaluate prediction rows with rayon           |
//!
//! ### Lag Schedules
//!
//! | tau  | style     | Lags                        |
//! |------|-----------|-----------------------------|
//! | 0    | any       | `0, 1, …, E-1`              |
//! | > 0  | Inclusive | `0, τ, 2τ, …, (E-1)τ`       |
//! | > 0  | Shifted   | `τ, 2τ, …, Eτ`              |
//!
//! Numeric style codes convert with `LagStyle::try_from(code)`; only 0 and 1
//! are accepted.
//!
//! ## Missing Values
//!
//! Cells of an [`EmbeddingMatrix`](prelude::EmbeddingMatrix) are
//! `Option<T>`. Time indices before the start of the series and non-finite
//! observations become `None`, and columns left entirely missing are
//! pruned. Distances use only the dimensions observed in both rows. A local
//! fit needs complete state vectors and finite targets for the query and every
//! selected neighbor.
//!
//! ## Features
//!
//! * `std` (default): standard library support.
//! * `parallel` (default): rayon-based parallel prediction.
//! * `serde`: `Serialize`/`Deserialize` for matrices, styles and scores.
//! * `dev`: exposes internal modules for testing.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! smap-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Sugihara, G. (1994). "Nonlinear forecasting for the classification of
//!   natural time series". *Phil. Trans. R. Soc. A*, 348(1688), 477-495.
//! - Takens, F. (1981). "Detecting strange attractors in turbulence".
//!   *Lecture Notes in Mathematics*, 898, 366-381.
//!
//! ## License
//!
//! Dual-licensed under MIT or Apache-2.0.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the state-space matrix and scratch buffers.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains partial-overlap distances, the exponential kernel, neighbor
// selection and the truncated-SVD solve.
mod math;

// Layer 3: Algorithms - core algorithms.
//
// Contains time-delay embedding and the local weighted regression.
mod algorithms;

// Layer 4: Evaluation - prediction skill.
//
// Contains pairwise statistics and gated skill summaries.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, workspaces and sequential/parallel dispatch.
mod engine;

// High-level fluent API.
//
// Provides the `Embed` and `SMap` builders and the free functions.
mod api;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use api::{
    DEFAULT_DIMENSION, DEFAULT_NUM_NEIGHBORS, DEFAULT_TAU, DEFAULT_THETA, EmbedBuilder, Embedder,
    EmbeddingMatrix, LagStyle, LocalLinearModel, SMapBuilder, SMapModel, SkillScores, SmapError,
    behavior_score, correlation_score, embed, predict_smap,
};
pub use engine::executor::SMapConfig;

// ============================================================================
// Prelude
// ============================================================================

/// Standard S-Map prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use smap_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        EmbedBuilder as Embed, Embedder, EmbeddingMatrix,
        LagStyle::{self, Inclusive, Shifted},
        LocalLinearModel, SMapBuilder as SMap, SMapModel, SkillScores, SmapError, behavior_score,
        correlation_score, embed, predict_smap,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
