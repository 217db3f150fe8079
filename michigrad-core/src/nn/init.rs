use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Creates `n` leaf parameters drawn uniformly from `[low, high)`.
pub fn uniform<R: Rng + ?Sized>(n: usize, low: f64, high: f64, rng: &mut R) -> Vec<Value> {
    let dist = Uniform::new(low, high);
    (0..n).map(|_| Value::new(dist.sample(rng))).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
