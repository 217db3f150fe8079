use crate::value::Value;

/// Checks that a value's forward result is within `tolerance` of `expected`.
/// Panics with the offending numbers otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of several values at once.
/// Panics on length mismatch or on the first gradient outside `tolerance`.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Gradient count mismatch");

    for (i, (v, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let grad = v.grad();
        let diff = (grad - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, grad, e, diff, tolerance
            );
        }
    }
}
