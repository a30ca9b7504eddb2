//! Input validation for embedding and S-Map configuration.
//!
//! ## Purpose
//!
//! This module checks parameters and index sets before any computation runs,
//! so the engine can index rows without further checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not treat empty index sets or zero neighbors as errors;
//!   those produce an all-missing prediction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmapError;
use crate::primitives::matrix::EmbeddingMatrix;

/// Validation utility for embedding and prediction inputs.
pub struct Validator;

impl Validator {
    /// Validate the embedding dimension.
    pub fn validate_dimension(dimension: usize) -> Result<(), SmapError> {
        if dimension == 0 {
            return Err(SmapError::InvalidEmbeddingDimension(dimension));
        }
        Ok(())
    }

    /// Validate the S-Map locality parameter.
    pub fn validate_theta<T: Float>(theta: T) -> Result<(), SmapError> {
        if !theta.is_finite() {
            return Err(SmapError::InvalidNumericValue(format!(
                "theta={}",
                theta.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate state space, target and index sets for prediction.
    pub fn validate_prediction_inputs<T: Float>(
        matrix: &EmbeddingMatrix<T>,
        target: &[T],
        library: &[usize],
        prediction: &[usize],
    ) -> Result<(), SmapError> {
        // Check 1: Target aligned with state space
        if matrix.nrows() != target.len() {
            return Err(SmapError::MismatchedInputs {
                rows: matrix.nrows(),
                target_len: target.len(),
            });
        }

        // Check 2: Every index addresses a row
        let len = matrix.nrows();
        for &index in library.iter().chain(prediction.iter()) {
            if index >= len {
                return Err(SmapError::IndexOutOfBounds { index, len });
            }
        }

        Ok(())
    }
}
