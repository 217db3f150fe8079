use michigrad_core::Value;

// Helper functions shared by the integration test crates.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Creates labelled leaves from `(label, value)` pairs.
#[allow(dead_code)]
pub fn leaves(specs: &[(&str, f64)]) -> Vec<Value> {
    specs
        .iter()
        .map(|&(label, v)| Value::new(v).with_label(label))
        .collect()
}

/// Symmetric finite-difference estimate of `df/dx_index` at `point`.
#[allow(dead_code)]
pub fn numerical_grad<F>(f: F, point: &[f64], index: usize, h: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let eval = |shift: f64| {
        let xs: Vec<Value> = point
            .iter()
            .enumerate()
            .map(|(i, &v)| Value::new(if i == index { v + shift } else { v }))
            .collect();
        f(&xs).data()
    };
    (eval(h) - eval(-h)) / (2.0 * h)
}
