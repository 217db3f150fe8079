// Builds a small expression, runs the backward pass and prints the graph
// as Graphviz DOT (pipe into `dot -Tsvg` to render it).

use michigrad_core::viz::{draw_dot, DotOptions, RankDir};
use michigrad_core::{MichigradError, Value};

fn main() -> Result<(), MichigradError> {
    let x1 = Value::new(2.0).with_label("x1");
    let x2 = Value::new(0.0).with_label("x2");
    let w1 = Value::new(-3.0).with_label("w1");
    let w2 = Value::new(1.0).with_label("w2");
    let b = Value::new(6.881_373_587_019_543).with_label("b");

    let x1w1 = (&x1 * &w1).with_label("x1*w1");
    let x2w2 = (&x2 * &w2).with_label("x2*w2");
    let n = (&x1w1 + &x2w2 + &b).with_label("n");
    let o = n.tanh().with_label("o");

    o.backward()?;

    for v in [&x1, &x2, &w1, &w2] {
        println!("{}: {}", v.label().unwrap_or_default(), v);
    }
    println!();
    print!("{}", draw_dot(&o, DotOptions { rankdir: RankDir::LR }));
    Ok(())
}
