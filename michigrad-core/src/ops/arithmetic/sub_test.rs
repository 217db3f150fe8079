use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};

#[test]
fn test_sub_forward_backward() {
    let a = Value::new(7.0);
    let b = Value::new(2.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.data(), 5.0);
    c.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_is_add_of_negation() {
    let a = Value::new(7.0);
    let b = Value::new(2.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.op(), Some("+"));
    let operands = c.operands();
    assert_eq!(operands[0], a);
    assert_eq!(operands[1].op(), Some("neg"));
    assert_eq!(operands[1].operands(), vec![b]);
}

#[test]
fn test_sub_operand_order_with_scalars() {
    let x = Value::new(4.0);
    let left = &x - 1.0;
    let right = 1.0 - &x;
    assert_eq!(left.data(), 3.0);
    assert_eq!(right.data(), -3.0);
    right.backward().unwrap();
    assert_eq!(x.grad(), -1.0);
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    check_grad(
        |inputs: &[Value]| Ok(sub_op(&inputs[0], &inputs[1])),
        &[Value::new(-2.0), Value::new(0.75)],
        GradCheckConfig::default(),
    )
}
