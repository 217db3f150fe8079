// michigrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::ops::apply_unary_op;
use crate::value::Value;
use num_traits::Float;
use std::rc::Rc;

/// Exponent of a power operation.
///
/// Only constant exponents are differentiable. `Exponent::Value` exists so a
/// graph node can be passed where the caller has one, and is rejected by
/// [`pow_op`] with [`MichigradError::UnsupportedOperation`].
#[derive(Debug, Clone)]
pub enum Exponent {
    Constant(f64),
    Value(Value),
}

impl From<f64> for Exponent {
    fn from(p: f64) -> Self {
        Exponent::Constant(p)
    }
}

impl From<i32> for Exponent {
    fn from(p: i32) -> Self {
        Exponent::Constant(f64::from(p))
    }
}

impl From<Value> for Exponent {
    fn from(v: Value) -> Self {
        Exponent::Value(v)
    }
}

impl From<&Value> for Exponent {
    fn from(v: &Value) -> Self {
        Exponent::Value(v.clone())
    }
}

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // d(x^p)/dx = p * x^(p-1)
        let local = self.exponent * self.base.powf(self.exponent - 1.0);
        Ok(vec![local * grad_output])
    }
}

// --- Forward Operation ---

/// Raises `base` to a constant power. The exponent does not enter the graph.
pub fn pow_scalar_op(base: &Value, exponent: f64) -> Value {
    apply_unary_op(
        base,
        |x| Float::powf(x, exponent),
        |x, _| Rc::new(PowBackward { base: x, exponent }),
        "**",
    )
}

/// Raises `base` to `exponent`.
///
/// # Errors
/// [`MichigradError::UnsupportedOperation`] if the exponent is a graph node:
/// only constant exponents are supported.
pub fn pow_op(base: &Value, exponent: impl Into<Exponent>) -> Result<Value, MichigradError> {
    match exponent.into() {
        Exponent::Constant(p) => Ok(pow_scalar_op(base, p)),
        Exponent::Value(v) => Err(MichigradError::UnsupportedOperation(format!(
            "pow with a Value exponent ({:?}); only constant exponents are supported",
            v
        ))),
    }
}

// --- Value Methods ---

impl Value {
    /// Raises this node to a constant power.
    pub fn powf(&self, exponent: f64) -> Value {
        pow_scalar_op(self, exponent)
    }

    /// Fallible form of [`powf`](Self::powf) accepting any [`Exponent`].
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Result<Value, MichigradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
