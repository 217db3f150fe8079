//! # Scalar Operations Module (`ops`)
//!
//! The closed set of differentiable operations a [`Value`] graph is built from.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `tanh_op`, ...)
//!   that computes the forward value and attaches the backward rule. These are
//!   what the operator overloads and the `Value` methods call.
//! - **`Backward` Structs:** Each operation has a struct (e.g. `AddBackward`,
//!   `TanhBackward`) implementing [`BackwardOp`]. It stores the context
//!   from the forward pass needed by the local derivative.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`activation`]: tanh, sigmoid, relu.
//!
//! The operator tag stored on every result is for display only; nothing in
//! the differentiation path reads it.

pub mod activation;
pub mod arithmetic;

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::rc::Rc;

/// Applies a unary operation to a node.
///
/// # Arguments
/// * `a`: The operand.
/// * `forward`: Computes the output value from `a.data()`.
/// * `backward_builder`: Builds the `BackwardOp` from `(input, output)` values.
/// * `op_name`: Operator tag of the result.
pub(crate) fn apply_unary_op<F, B>(
    a: &Value,
    forward: F,
    backward_builder: B,
    op_name: &'static str,
) -> Value
where
    F: Fn(f64) -> f64,
    B: FnOnce(f64, f64) -> Rc<dyn BackwardOp>,
{
    let input = a.data();
    let output = forward(input);
    let grad_fn = backward_builder(input, output);
    Value::from_data(ValueData::from_op(output, vec![a.clone()], op_name, grad_fn))
}

/// Applies a binary operation to two nodes. Operand order is preserved.
///
/// `backward_builder` receives `(a, b, output)` values.
pub(crate) fn apply_binary_op<F, B>(
    a: &Value,
    b: &Value,
    forward: F,
    backward_builder: B,
    op_name: &'static str,
) -> Value
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(f64, f64, f64) -> Rc<dyn BackwardOp>,
{
    let (a_val, b_val) = (a.data(), b.data());
    let output = forward(a_val, b_val);
    let grad_fn = backward_builder(a_val, b_val, output);
    Value::from_data(ValueData::from_op(
        output,
        vec![a.clone(), b.clone()],
        op_name,
        grad_fn,
    ))
}
