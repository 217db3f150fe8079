// Runs one forward/backward pass through a small MLP and reports the
// gradient of a squared-error loss with respect to every parameter.

use michigrad_core::nn::{Activation, LayerSpec, Module, MLP};
use michigrad_core::{MichigradError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MichigradError> {
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = MLP::new(
        3,
        &[
            LayerSpec::new(4, Activation::Tanh),
            LayerSpec::new(4, Activation::ReLU),
            LayerSpec::new(1, Activation::Sigmoid),
        ],
        &mut rng,
    );
    println!("{}", mlp);

    let xs = [[2.0, 3.0, -1.0], [3.0, -1.0, 0.5], [0.5, 1.0, 1.0], [1.0, 1.0, -1.0]];
    let ys = [1.0, 0.0, 0.0, 1.0];

    let mut losses = Vec::with_capacity(xs.len());
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let input: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let pred = mlp.forward(&input)?.remove(0);
        losses.push((&pred - y).powf(2.0));
    }
    let loss: Value = losses.into_iter().sum();

    mlp.zero_grad();
    loss.backward()?;

    println!("loss = {:.6}", loss.data());
    for (i, p) in mlp.parameters().iter().enumerate() {
        println!("param {:>2}: data={:+.4} grad={:+.6}", i, p.data(), p.grad());
    }
    Ok(())
}
