// src/value/autograd.rs

use crate::autograd;
use crate::error::MichigradError;
use crate::value::Value;
use num_traits::Zero;

impl Value {
    /// Computes the gradient of this node w.r.t. every node it depends on.
    ///
    /// Seeds `self.grad` with `1.0`, then applies every local-derivative rule
    /// of the graph in reverse topological order.
    ///
    /// Gradients of all other nodes **accumulate**: calling `backward` twice
    /// without [`zero_grad`](Self::zero_grad) in between adds the second
    /// pass on top of the first. Resetting between independent passes is the
    /// caller's responsibility.
    pub fn backward(&self) -> Result<(), MichigradError> {
        autograd::backward(self)
    }

    /// Resets the gradient of this node to zero. `data` and operands are
    /// left untouched.
    pub fn zero_grad(&self) {
        self.write_data().grad = f64::zero();
    }

    /// Adds `grad` to the gradient accumulator.
    pub(crate) fn acc_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Overwrites the gradient. Only the backward driver seeds the root
    /// through this.
    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }
}
