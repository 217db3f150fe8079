use super::*;

#[test]
fn test_trace_collects_nodes_and_edges() {
    let a = Value::new(2.0).with_label("a");
    let b = Value::new(-3.0).with_label("b");
    let c = (&a * &b).with_label("c");
    let d = c.tanh().with_label("d");

    let (nodes, edges) = trace(&d);
    assert_eq!(nodes.len(), 4);
    assert_eq!(edges.len(), 3);
    assert!(edges.contains(&(a.clone(), c.clone())));
    assert!(edges.contains(&(b, c.clone())));
    assert!(edges.contains(&(c, d)));
}

#[test]
fn test_trace_deduplicates_repeated_operand() {
    let x = Value::new(3.0);
    let y = &x * &x;
    let (nodes, edges) = trace(&y);
    assert_eq!(nodes.len(), 2);
    assert_eq!(edges, vec![(x, y)]);
}

#[test]
fn test_trace_does_not_mutate() {
    let a = Value::new(1.0);
    let b = &a + 2.0;
    b.backward().unwrap();
    let _ = draw_dot(&b, DotOptions::default());
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.data(), 3.0);
}

#[test]
fn test_draw_dot_output() {
    let a = Value::new(2.0).with_label("a");
    let b = Value::new(4.0).with_label("b");
    let c = (&a + &b).with_label("c");
    c.backward().unwrap();

    let dot = draw_dot(&c, DotOptions { rankdir: RankDir::TB });
    assert!(dot.starts_with("digraph {\n    rankdir=TB;\n"));
    assert!(dot.contains("n0 [label=\"{ a | data 2.0000 | grad 1.0000 }\", shape=record];"));
    assert!(dot.contains("n2 [label=\"{ c | data 6.0000 | grad 1.0000 }\", shape=record];"));
    assert!(dot.contains("n2_op [label=\"+\"];"));
    assert!(dot.contains("n2_op -> n2;"));
    assert!(dot.contains("n0 -> n2_op;"));
    assert!(dot.contains("n1 -> n2_op;"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_sanitize_labels() {
    assert_eq!(sanitize("peso ñ"), "peso ");
    assert_eq!(sanitize("a|b"), "a\\|b");
    assert_eq!(sanitize("{x}"), "\\{x\\}");
}

#[test]
fn test_write_dot_matches_draw_dot() {
    let a = Value::new(1.5).with_label("a");
    let y = (&a + 2.0).relu().with_label("y");
    let mut sink = String::new();
    write_dot(&mut sink, &y, DotOptions::default()).unwrap();
    assert_eq!(sink, draw_dot(&y, DotOptions::default()));
    assert!(sink.ends_with("}\n"));
}

struct FailingSink;

impl Write for FailingSink {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_write_dot_propagates_sink_error() {
    let a = Value::new(1.0);
    assert!(write_dot(&mut FailingSink, &a, DotOptions::default()).is_err());
}
