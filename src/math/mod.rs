//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks of S-Map:
//! - Partial-overlap distances between state vectors
//! - The exponential similarity kernel
//! - Deterministic k-nearest neighbor selection
//! - The truncated-SVD least-squares solve
//!
//! These are reusable mathematical building blocks with no orchestration logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distances between partially observed rows.
pub mod distance;

/// Similarity kernel.
pub mod kernel;

/// Neighbor search and selection.
pub mod neighborhood;

/// SVD-based least squares.
pub mod linalg;
