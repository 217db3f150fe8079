use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts two nodes: `a - b`, built as `a + (-b)`.
///
/// The result is an addition node whose second operand is the negation of
/// `b`, so `d/da = 1` and `d/db = -1` fall out of the two existing rules.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
