//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer runs S-Map prediction end to end:
//! - Validation of parameters and index sets
//! - Per-worker scratch workspaces
//! - Sequential or parallel dispatch over prediction indices
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Prediction orchestration.
pub mod executor;

/// Input validation.
pub mod validator;

/// Reusable per-worker buffers.
pub mod workspace;
