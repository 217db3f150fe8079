use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use num_traits::{One, Zero};
use std::rc::Rc;

// --- Backward Operation ---

/// Backward context for ReLU. The gradient passes only where the input was
/// strictly positive; the derivative at exactly `0.0` is taken as `0`. A NaN
/// input yields a NaN gradient.
#[derive(Debug)]
struct ReluBackward {
    input: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        let mask = if self.input.is_nan() {
            f64::NAN
        } else if self.input > f64::zero() {
            f64::one()
        } else {
            f64::zero()
        };
        Ok(vec![mask * grad_output])
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, x)`.
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        // NaN fails the comparison and passes through unchanged.
        |x| if x < f64::zero() { f64::zero() } else { x },
        |x, _| Rc::new(ReluBackward { input: x }),
        "ReLU",
    )
}

impl Value {
    /// ReLU of this node.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
