use crate::error::MichigradError;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf [`Value`](crate::Value) stores an
/// implementation of this trait in the output's `grad_fn`. The struct carries
/// whatever the forward pass computed that the derivative needs (an exponent,
/// an operand value, the output itself).
pub trait BackwardOp: Debug {
    /// Computes the contribution to each operand's gradient, given
    /// `grad_output` = d(root)/d(output).
    ///
    /// For `output = f(x_1, ..., x_n)` this returns
    /// `[grad_output * df/dx_1, ..., grad_output * df/dx_n]`.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one entry per operand. The order **must** match the
    ///   order of the output's operands. The driver adds these to the operands'
    ///   gradients; implementations never write gradients themselves.
    /// * `Err(MichigradError)`: if the rule cannot be evaluated.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError>;
}
