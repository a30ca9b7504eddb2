//! Error types for embedding and S-Map prediction.
//!
//! ## Purpose
//!
//! This module defines the single error enum shared by every fallible
//! operation in the crate. Errors are raised at construction time (embedding
//! parameters, builder options, index validation); per-point data sparsity
//! during prediction is never an error and is reported as a missing value.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented on `core::fmt`; `std::error::Error`
//!   is only implemented when the `std` feature is enabled.
//! * **Comparable**: Errors derive `PartialEq` so tests can match them exactly.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors or suggest corrected parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

/// Errors raised by embedding, prediction and builder validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SmapError {
    /// The input series is empty.
    EmptyInput,

    /// The embedding dimension must be at least 1.
    InvalidEmbeddingDimension(usize),

    /// Lag style codes other than 0 and 1 are rejected.
    InvalidLagStyle(i64),

    /// The largest lag of the schedule does not fit inside the series.
    InvalidParameters {
        /// Largest lag required by the schedule.
        max_lag: usize,
        /// Number of points in the series.
        series_len: usize,
    },

    /// Every lag column was entirely missing and got pruned.
    InsufficientEmbeddingDimension {
        /// Requested embedding dimension.
        dimension: usize,
        /// Requested lag spacing.
        tau: usize,
    },

    /// The state space and the target series have different lengths.
    MismatchedInputs {
        /// Number of state-space rows.
        rows: usize,
        /// Length of the target series.
        target_len: usize,
    },

    /// A library or prediction index does not address a state-space row.
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of addressable rows.
        len: usize,
    },

    /// A scalar parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// Malformed input that does not fit any other category.
    InvalidInput(String),

    /// A builder option was configured more than once.
    DuplicateParameter {
        /// Name of the repeated option.
        parameter: &'static str,
    },
}

impl fmt::Display for SmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmapError::EmptyInput => write!(f, "Input series is empty"),
            SmapError::InvalidEmbeddingDimension(e) => {
                write!(f, "Invalid embedding dimension: {} (must be at least 1)", e)
            }
            SmapError::InvalidLagStyle(style) => {
                write!(f, "Invalid lag style: {} (must be 0 or 1)", style)
            }
            SmapError::InvalidParameters {
                max_lag,
                series_len,
            } => write!(
                f,
                "Invalid embedding parameters: maximum lag {} requires more than {} points",
                max_lag, series_len
            ),
            SmapError::InsufficientEmbeddingDimension { dimension, tau } => write!(
                f,
                "Insufficient embedding dimension: no non-missing column for E={}, tau={}",
                dimension, tau
            ),
            SmapError::MismatchedInputs { rows, target_len } => write!(
                f,
                "Length mismatch: state space has {} rows, target has {} points",
                rows, target_len
            ),
            SmapError::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} (rows: {})", index, len)
            }
            SmapError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            SmapError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SmapError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SmapError {}
