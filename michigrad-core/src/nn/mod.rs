// src/nn/mod.rs
// Neurons, layers and multi-layer perceptrons built from `Value` arithmetic.

pub mod activation;
pub mod init;
pub mod layers;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, LayerSpec, Neuron, MLP};
pub use module::Module;
