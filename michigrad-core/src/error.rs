use thiserror::Error;

/// Custom error type for the Michigrad engine.
///
/// Numeric degeneracies (division by zero, overflow in `pow`) are *not*
/// errors: they propagate as IEEE `inf`/`NaN` through both the forward value
/// and the gradients. Only malformed operation calls and internal
/// inconsistencies of the graph end up here.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MichigradError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Backward pass failed: {0}")]
    BackwardError(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown activation function: {0:?} (expected Linear, ReLU, Sigmoid or Tanh)")]
    UnknownActivation(String),
}
