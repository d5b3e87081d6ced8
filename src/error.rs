//! Error types for bin packing operations.

use thiserror::Error;

/// Errors raised while building instances or mutating solutions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BinPackingError {
    /// Bin capacity is not a positive finite number.
    #[error("invalid bin capacity: {0}")]
    InvalidCapacity(f64),

    /// Item weight is not a positive finite number.
    #[error("item weight must be bigger than zero, got {0}")]
    InvalidItem(f64),

    /// Item can never fit into an empty bin.
    #[error("item {item} exceeds bin capacity {capacity}")]
    OversizedItem { item: f64, capacity: f64 },

    /// Instance without items.
    #[error("instance has no items")]
    EmptyInstance,

    /// A bin or solution whose stored state breaks a packing invariant.
    #[error("invalid solution: {0}")]
    InvalidSolution(String),

    /// A move whose preconditions do not hold on the solution it is applied to.
    #[error("infeasible move: {0}")]
    InfeasibleMove(String),

    /// Invalid search configuration.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Result type alias for bin packing operations.
pub type Result<T> = std::result::Result<T, BinPackingError>;
