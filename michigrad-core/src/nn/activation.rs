use crate::error::MichigradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied at the output of a neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity.
    #[default]
    Linear,
    ReLU,
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Applies the activation to a pre-activation value.
    pub fn apply(self, x: &Value) -> Value {
        match self {
            Activation::Linear => x.clone(),
            Activation::ReLU => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Tanh => x.tanh(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Linear => "Linear",
            Activation::ReLU => "ReLU",
            Activation::Sigmoid => "Sigmoid",
            Activation::Tanh => "Tanh",
        };
        f.write_str(name)
    }
}

impl FromStr for Activation {
    type Err = MichigradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" => Ok(Activation::Linear),
            "ReLU" => Ok(Activation::ReLU),
            "Sigmoid" => Ok(Activation::Sigmoid),
            "Tanh" => Ok(Activation::Tanh),
            other => Err(MichigradError::UnknownActivation(other.to_string())),
        }
    }
}
