//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores prediction vectors against observed values:
//! - Pairwise statistics that skip missing predictions
//! - Gated skill summaries (correlation, MAE, RMSE)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pairwise statistics.
pub mod metrics;

/// Skill summaries.
pub mod skill;
