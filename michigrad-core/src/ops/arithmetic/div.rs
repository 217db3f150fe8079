use crate::ops::arithmetic::{mul_op, pow_scalar_op};
use crate::value::Value;

/// Divides two nodes: `a / b`, built as `a * b^(-1)`.
///
/// Division by zero is not trapped: `b == 0` yields `±inf` (or `NaN` for
/// `0/0`) in the forward value and in the gradients, as IEEE arithmetic does.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_scalar_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
