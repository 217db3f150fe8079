use approx::assert_relative_eq;
use michigrad_core::autograd::graph::topological_sort;
use michigrad_core::autograd::{backward, zero_grad};
use michigrad_core::utils::testing::{check_grads_near, check_value_near};
use michigrad_core::{MichigradError, Value};

// Include the common helper module
mod common;
use common::leaves;

#[test]
fn test_affine_relu_scenario() {
    let v = leaves(&[("a", 2.0), ("b", -3.0), ("c", 10.0)]);
    let d = &v[0] * &v[1] + &v[2];
    let e = d.relu();
    backward(&e).unwrap();

    assert_eq!(d.data(), 4.0);
    assert_eq!(e.data(), 4.0);
    check_grads_near(&v, &[-3.0, 2.0, 1.0], 0.0);
}

#[test]
fn test_relu_at_zero_scenario() {
    let x = Value::new(0.0);
    let y = x.relu();
    y.backward().unwrap();
    assert_eq!(y.data(), 0.0);
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_sigmoid_scenario() {
    let x = Value::new(1.0);
    let y = x.sigmoid();
    y.backward().unwrap();
    check_value_near(&y, 0.7310586, 1e-7);
    assert_relative_eq!(x.grad(), 0.1966119, epsilon = 1e-7);
    assert_relative_eq!(x.grad(), y.data() * (1.0 - y.data()), epsilon = 1e-15);
}

#[test]
fn test_root_gradient_is_seeded_to_one() {
    let x = Value::new(0.3);
    let roots = vec![
        x.clone(),
        &x * 5.0,
        x.tanh(),
        (&x - 1.0).powf(3.0) / 2.0,
    ];
    for root in roots {
        root.backward().unwrap();
        assert_eq!(root.grad(), 1.0);
    }
}

#[test]
fn test_x_times_x_plus_x() {
    let x = Value::new(-1.25);
    let root = &x * &x + &x;
    root.backward().unwrap();
    assert_eq!(x.grad(), 2.0 * -1.25 + 1.0);
}

#[test]
fn test_classic_micrograd_expression() {
    // The expression used in the original micrograd sanity check.
    let a = Value::new(-4.0);
    let b = Value::new(2.0);
    let mut c = &a + &b;
    let mut d = &a * &b + b.powf(3.0);
    c = &c + &(&c + 1.0);
    c = &c + &(1.0 + &c + (-&a));
    d = &d + &(&d * 2.0 + (&b + &a).relu());
    d = &d + &(3.0 * &d + (&b - &a).relu());
    let e = &c - &d;
    let f = e.powf(2.0);
    let mut g = &f / 2.0;
    g = &g + &(10.0 / &f);
    g.backward().unwrap();

    assert_relative_eq!(g.data(), 24.70408163265306, epsilon = 1e-6);
    assert_relative_eq!(a.grad(), 138.83381924198252, epsilon = 1e-6);
    assert_relative_eq!(b.grad(), 645.5772594752186, epsilon = 1e-6);
}

#[test]
fn test_reset_then_recompute_matches_fresh_pass() {
    let v = leaves(&[("w", 0.7), ("x", -1.1)]);
    let out = (&v[0] * &v[1]).tanh();
    out.backward().unwrap();
    let first: Vec<f64> = v.iter().map(Value::grad).collect();

    // Without a reset the intermediate `w*x` node keeps its first gradient
    // too, so the second pass adds twice the first contribution on top.
    out.backward().unwrap();
    assert_relative_eq!(v[0].grad(), 3.0 * first[0], epsilon = 1e-12);

    let all = topological_sort(&out);
    assert_eq!(all.len(), 4);
    zero_grad(&all);
    assert!(all.iter().all(|n| n.grad() == 0.0));
    assert_eq!(v[0].data(), 0.7);

    out.backward().unwrap();
    check_grads_near(&v, &first, 0.0);
}

#[test]
fn test_value_exponent_is_rejected() {
    let x = Value::new(2.0);
    let n = Value::new(2.0);
    assert!(matches!(x.pow(&n), Err(MichigradError::UnsupportedOperation(_))));
}

#[test]
fn test_large_sum_backward_then_drop() {
    let xs: Vec<Value> = (0..100_000).map(|i| Value::new(i as f64)).collect();
    let total: Value = xs.iter().sum();
    total.backward().unwrap();
    assert!(xs.iter().all(|x| x.grad() == 1.0));

    drop(total);
    // Leaves survive through the caller's handles.
    assert_eq!(xs[99_999].data(), 99_999.0);
    assert!(xs.iter().all(Value::is_leaf));
}

#[test]
fn test_drop_keeps_shared_subgraph_alive() {
    let x = Value::new(3.0);
    let shared = &x * &x;
    let mut chain = shared.clone();
    for _ in 0..50_000 {
        chain = &chain + 1.0;
    }
    drop(chain);
    assert_eq!(shared.operands().len(), 2);
    shared.backward().unwrap();
    assert_eq!(x.grad(), 6.0);
}
