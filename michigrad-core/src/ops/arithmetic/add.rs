// michigrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_binary_op;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward operation context for addition. `d(a+b)/da = d(a+b)/db = 1`.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![grad_output, grad_output])
    }
}

// --- Forward Operation ---

/// Adds two nodes: `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x + y, |_, _, _| Rc::new(AddBackward), "+")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
