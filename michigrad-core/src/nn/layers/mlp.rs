use crate::error::MichigradError;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Output size and activation of one MLP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: Activation,
}

impl LayerSpec {
    pub fn new(size: usize, activation: Activation) -> Self {
        LayerSpec { size, activation }
    }

    /// A layer without non-linearity.
    pub fn linear(size: usize) -> Self {
        LayerSpec::new(size, Activation::Linear)
    }
}

impl From<usize> for LayerSpec {
    fn from(size: usize) -> Self {
        LayerSpec::linear(size)
    }
}

impl From<(usize, Activation)> for LayerSpec {
    fn from((size, activation): (usize, Activation)) -> Self {
        LayerSpec::new(size, activation)
    }
}

/// A multi-layer perceptron: layers applied in sequence.
#[derive(Debug, Clone)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Builds an MLP taking `nin` inputs; layer `i` maps the previous size
    /// to `specs[i].size`.
    pub fn new<R: Rng + ?Sized>(nin: usize, specs: &[LayerSpec], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(specs.len());
        let mut fan_in = nin;
        for spec in specs {
            layers.push(Layer::new(fan_in, spec.size, spec.activation, rng));
            fan_in = spec.size;
        }
        log::debug!("built MLP with {} layers", layers.len());
        MLP { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for MLP {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MichigradError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl fmt::Display for MLP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
