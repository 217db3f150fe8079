use crate::autograd::zero_grad;
use crate::error::MichigradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MichigradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MichigradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+h): {loss_plus:?}, f(x-h): {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf node (no operands). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

/// Step size and tolerances used by [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width `h` of the symmetric difference `(f(x+h) - f(x-h)) / 2h`.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-5,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` builds the expression from the leaves it is given. It is called once
/// with `inputs` themselves (followed by `backward`) and twice per input with
/// freshly created leaves in which that single input is shifted by `±epsilon`.
/// The perturbed evaluations never touch `inputs`, so the caller's graph and
/// values are unchanged; only the gradients of `inputs` are reset and
/// recomputed.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    config: GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MichigradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- 1. Analytical gradients ---
    zero_grad(inputs);
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    let base: Vec<f64> = inputs.iter().map(Value::data).collect();
    let eval_shifted = |index: usize, shift: f64| -> Result<f64, GradCheckError> {
        let shifted: Vec<Value> = base
            .iter()
            .enumerate()
            .map(|(j, &x)| Value::new(if j == index { x + shift } else { x }))
            .collect();
        func(&shifted)
            .map(|out| out.data())
            .map_err(GradCheckError::ForwardPassError)
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = eval_shifted(i, config.epsilon)?;
        let loss_minus = eval_shifted(i, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        );
        if !close {
            let difference = (analytical_grad - numerical_grad).abs();
            log::debug!(
                "grad check mismatch on input {}: analytical={} numerical={}",
                i,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
