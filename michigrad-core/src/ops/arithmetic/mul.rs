use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_binary_op;
use crate::value::Value;
use std::rc::Rc;

/// Backward pass structure for multiplication.
///
/// Stores both operand values: `d(a*b)/da = b`, `d(a*b)/db = a`.
#[derive(Debug)]
struct MulBackward {
    a: f64,
    b: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![self.b * grad_output, self.a * grad_output])
    }
}

/// Multiplies two nodes: `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(
        a,
        b,
        |x, y| x * y,
        |x, y, _| Rc::new(MulBackward { a: x, b: y }),
        "*",
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
