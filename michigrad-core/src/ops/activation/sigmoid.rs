use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use num_traits::{Float, One};
use std::rc::Rc;

/// Backward context for the logistic function. Keeps the forward output `s`:
/// `d sigmoid(x)/dx = s * (1 - s)`.
#[derive(Debug)]
struct SigmoidBackward {
    output: f64,
}

impl BackwardOp for SigmoidBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        let s = self.output;
        Ok(vec![s * (f64::one() - s) * grad_output])
    }
}

/// `1 / (1 + e^-x)`.
fn sigmoid(x: f64) -> f64 {
    f64::one() / (f64::one() + Float::exp(-x))
}

/// Applies the logistic sigmoid.
pub fn sigmoid_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        sigmoid,
        |_, s| Rc::new(SigmoidBackward { output: s }),
        "sigmoid",
    )
}

impl Value {
    /// Logistic sigmoid of this node.
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
