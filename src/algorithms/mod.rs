//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the two core algorithms:
//! - Time-delay embedding with lag scheduling and column pruning
//! - The locally weighted linear regression behind each S-Map prediction
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// State-space reconstruction.
pub mod embedding;

/// Local weighted regression.
pub mod regression;
