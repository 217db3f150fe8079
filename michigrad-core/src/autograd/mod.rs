//! # Automatic Differentiation (`autograd`)
//!
//! Reverse-mode automatic differentiation over the scalar graph built by the
//! [`ops`](crate::ops) layer.
//!
//! - [`BackwardOp`]: the local-derivative rule attached to every non-leaf node.
//! - [`graph::topological_sort`]: orders the DAG reachable from a root so that
//!   every node appears after all of its operands.
//! - [`backward`]: the driver. Seeds the root, walks the order in reverse and
//!   accumulates gradients into operands.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;

use crate::error::MichigradError;
use crate::value::Value;
use graph::topological_sort;
use num_traits::One;

/// Runs the backward pass from `root`.
///
/// 1. Seeds `root.grad = 1.0`.
/// 2. Sorts the graph reachable from `root` topologically.
/// 3. Visits that order in reverse, calling each node's `grad_fn` exactly once
///    and adding (`+=`) the returned contributions to its operands.
///
/// Because a node is visited only after all of its consumers, it has received
/// every contribution before its own rule fires.
///
/// Gradients of non-root nodes are not reset first; see [`zero_grad`].
pub fn backward(root: &Value) -> Result<(), MichigradError> {
    root.set_grad(f64::one());

    if root.is_leaf() {
        log::debug!("backward() called on a leaf value. No operation to perform.");
        return Ok(());
    }

    let sorted = topological_sort(root);
    log::debug!("backward: {} nodes reachable from root", sorted.len());

    for node in sorted.iter().rev() {
        // Clone out of the borrow: the rule updates other nodes.
        let (grad_fn, operands, grad_output) = {
            let guard = node.read_data();
            match guard.grad_fn.as_ref() {
                Some(op) => (op.clone(), guard.operands.clone(), guard.grad),
                None => continue,
            }
        };

        let input_grads = grad_fn.backward(grad_output)?;
        if input_grads.len() != operands.len() {
            return Err(MichigradError::BackwardError(format!(
                "{:?} returned {} gradients for {} operands",
                grad_fn,
                input_grads.len(),
                operands.len()
            )));
        }
        log::trace!("applied {:?} with upstream grad {}", grad_fn, grad_output);

        for (operand, grad) in operands.iter().zip(input_grads) {
            operand.acc_grad(grad);
        }
    }

    log::debug!("backward finished");
    Ok(())
}

/// Resets the gradient of every given node to `0.0`.
pub fn zero_grad(values: &[Value]) {
    for value in values {
        value.zero_grad();
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
