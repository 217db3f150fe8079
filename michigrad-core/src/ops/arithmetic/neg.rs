use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use std::rc::Rc;

// --- NegBackward Definition ---

#[derive(Debug)]
struct NegBackward;

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![-grad_output])
    }
}

// --- neg_op Implementation ---

/// Negates a node: `-a`.
pub fn neg_op(a: &Value) -> Value {
    apply_unary_op(a, |x| -x, |_, _| Rc::new(NegBackward), "neg")
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
