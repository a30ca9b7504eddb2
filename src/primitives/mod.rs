//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The crate-wide error type
//! - The state-space matrix with explicit missing cells
//! - Reusable scratch buffers for per-point work
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// State-space matrix.
pub mod matrix;

/// Reusable scratch buffers.
pub mod buffer;
