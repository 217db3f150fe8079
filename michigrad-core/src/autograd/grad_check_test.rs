use super::*;
use crate::ops::arithmetic::mul_op;

#[test]
fn test_check_grad_passes_for_composite_expression() -> Result<(), GradCheckError> {
    let inputs = [Value::new(0.4), Value::new(-1.3), Value::new(2.2)];
    check_grad(
        |x: &[Value]| {
            let h = (&x[0] * &x[1] + &x[2]).tanh();
            let s = (&x[2] / &x[0]).sigmoid();
            Ok(&h * &s - x[1].powf(2.0))
        },
        &inputs,
        GradCheckConfig::default(),
    )
}

#[test]
fn test_check_grad_leaves_input_values_untouched() -> Result<(), GradCheckError> {
    let a = Value::new(1.5);
    let b = Value::new(0.5);
    check_grad(
        |x: &[Value]| Ok(mul_op(&x[0], &x[1])),
        &[a.clone(), b.clone()],
        GradCheckConfig::default(),
    )?;
    assert_eq!(a.data(), 1.5);
    assert_eq!(b.data(), 0.5);
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), 1.5);
    Ok(())
}

#[test]
fn test_check_grad_rejects_non_leaf_input() {
    let a = Value::new(1.0);
    let not_leaf = &a + 1.0;
    let result = check_grad(
        |x: &[Value]| Ok(x[0].clone()),
        &[not_leaf],
        GradCheckConfig::default(),
    );
    assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
}

/// Forward computes `x^2`, backward claims the derivative is `x`.
#[derive(Debug)]
struct WrongSquareBackward {
    x: f64,
}

impl crate::autograd::BackwardOp for WrongSquareBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![self.x * grad_output])
    }
}

#[test]
fn test_check_grad_detects_wrong_rule() {
    let wrong_square = |x: &[Value]| {
        let v = x[0].data();
        Ok(Value::from_data(crate::value_data::ValueData::from_op(
            v * v,
            vec![x[0].clone()],
            "wrong",
            std::rc::Rc::new(WrongSquareBackward { x: v }),
        )))
    };
    let result = check_grad(wrong_square, &[Value::new(3.0)], GradCheckConfig::default());
    match result {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 3.0);
        }
        other => panic!("expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_propagates_forward_errors() {
    let result = check_grad(
        |x: &[Value]| x[0].pow(&x[1]),
        &[Value::new(2.0), Value::new(3.0)],
        GradCheckConfig::default(),
    );
    assert!(matches!(result, Err(GradCheckError::ForwardPassError(_))));
}

#[test]
fn test_check_grad_reports_non_finite_numerical_grad() {
    let result = check_grad(
        |x: &[Value]| Ok(x[0].powf(-1.0)),
        &[Value::new(1e-6)],
        GradCheckConfig::default(),
    );
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_reports_non_finite_analytical_grad() {
    let result = check_grad(
        |x: &[Value]| Ok(x[0].powf(-1.0)),
        &[Value::new(0.0)],
        GradCheckConfig::default(),
    );
    assert!(matches!(
        result,
        Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}
