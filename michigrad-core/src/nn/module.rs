use crate::error::MichigradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module only composes the core's arithmetic: its forward pass builds an
/// ordinary `Value` graph, and calling `backward` on any output fills the
/// gradients of [`parameters`](Module::parameters).
pub trait Module: std::fmt::Debug + std::fmt::Display {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: One `Value` per input feature.
    ///
    /// # Returns
    /// One `Value` per output, or a `MichigradError` if `input` has the wrong
    /// number of features.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MichigradError>;

    /// Returns handles to all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
