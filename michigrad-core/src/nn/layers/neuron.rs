use crate::error::MichigradError;
use crate::nn::activation::Activation;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single neuron: `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    w: Vec<Value>,
    b: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn uniformly from `[-1, 1)` and
    /// a zero bias.
    pub fn new<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        Neuron {
            w: init::uniform(nin, -1.0, 1.0, rng),
            b: Value::new(0.0),
            activation,
        }
    }

    /// Creates a neuron from explicit weights and bias.
    pub fn from_parts(w: Vec<Value>, b: Value, activation: Activation) -> Self {
        Neuron { w, b, activation }
    }

    pub fn weights(&self) -> &[Value] {
        &self.w
    }

    pub fn bias(&self) -> &Value {
        &self.b
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Number of inputs.
    pub fn nin(&self) -> usize {
        self.w.len()
    }

    /// Computes the neuron output for one sample.
    pub fn call(&self, x: &[Value]) -> Result<Value, MichigradError> {
        if x.len() != self.w.len() {
            return Err(MichigradError::DimensionMismatch {
                expected: self.w.len(),
                actual: x.len(),
            });
        }
        // The sum starts from the bias node itself.
        let act = self
            .w
            .iter()
            .zip(x)
            .fold(self.b.clone(), |acc, (wi, xi)| &acc + &(wi * xi));
        Ok(self.activation.apply(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, MichigradError> {
        Ok(vec![self.call(input)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.w.clone();
        params.push(self.b.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Neuron({})", self.activation, self.w.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
