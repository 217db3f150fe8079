// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd;
mod debug;
mod operators;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** every downstream node that lists a `Value` as an
///     operand keeps it alive, and cloning a `Value` only clones the handle.
/// 2.  **Interior Mutability:** the gradient accumulator can be updated through
///     a shared handle during the backward pass.
///
/// Cycles cannot be formed: a node's operands always exist before the node
/// itself, so plain `Rc` ownership never leaks.
///
/// Graph identity is pointer identity: `PartialEq` and `Hash` compare handles,
/// not `data`.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new leaf node holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(data))),
        }
    }

    /// Wraps freshly built `ValueData` into a handle.
    pub(crate) fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Builder-style label setter.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Sets the diagnostic label. Has no effect on computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Borrows the node data immutably.
    ///
    /// Panics if the node is currently mutably borrowed, which only happens
    /// when called from inside a gradient update.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// The forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// The accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Handles to the direct inputs of the operation that produced this node.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    /// Operator tag of the producing operation, `None` for leaves.
    pub fn op(&self) -> Option<&'static str> {
        self.read_data().op
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }

    /// Returns a clone of the `Rc` pointing to the local-derivative rule.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Stable identity of the node, used as key for graph traversal.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}

impl From<f64> for Value {
    /// Promotes a raw scalar to a zero-operand leaf.
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
