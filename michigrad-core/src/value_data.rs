use crate::autograd::BackwardOp;
use crate::value::Value;
use std::fmt::Debug;
use std::rc::Rc;

/// The shared, interior-mutable payload behind every [`Value`] handle.
///
/// `operands` and `grad_fn` are fixed at construction; `grad` is the only
/// field that changes afterwards, and only through the backward driver or an
/// explicit reset.
pub struct ValueData {
    /// Forward result of the operation (or the raw input for leaves).
    pub(crate) data: f64,
    /// Accumulator for `d(root)/d(self)`.
    pub(crate) grad: f64,
    /// Direct inputs that produced this node, in operation order.
    pub(crate) operands: Vec<Value>,
    /// Name of the producing operation. Display only.
    pub(crate) op: Option<&'static str>,
    pub(crate) label: Option<String>,
    /// Local-derivative rule, `None` for leaves.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates the data of a leaf node (input or constant).
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operands: Vec::new(),
            op: None,
            label: None,
            grad_fn: None,
        }
    }

    /// Creates the data of a node produced by an operation.
    pub(crate) fn from_op(
        data: f64,
        operands: Vec<Value>,
        op: &'static str,
        grad_fn: Rc<dyn BackwardOp>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operands,
            op: Some(op),
            label: None,
            grad_fn: Some(grad_fn),
        }
    }
}

/// Frees the operand chain with an explicit worklist. Dropping the operands
/// field by field would recurse once per graph level and overflow the stack
/// on long chains such as a `Sum` over many terms.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            // Only nodes owned solely by this chain are unlinked here; shared
            // ones stay alive through their other handles.
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut inner = cell.into_inner();
                pending.append(&mut inner.operands);
            }
        }
    }
}

impl Debug for ValueData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("label", &self.label)
            .field("num_operands", &self.operands.len())
            .field("has_grad_fn", &self.grad_fn.is_some())
            .finish()
    }
}
