use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use num_traits::{Float, One};
use std::rc::Rc;

/// Backward context for tanh. Keeps the forward output `t`:
/// `d tanh(x)/dx = 1 - t^2`.
#[derive(Debug)]
struct TanhBackward {
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![(f64::one() - self.output * self.output) * grad_output])
    }
}

/// Applies the hyperbolic tangent.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        <f64 as Float>::tanh,
        |_, t| Rc::new(TanhBackward { output: t }),
        "tanh",
    )
}

impl Value {
    /// Hyperbolic tangent of this node.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
