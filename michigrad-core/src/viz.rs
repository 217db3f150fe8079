//! Read-only inspection of a computation graph.
//!
//! [`trace`] collects the nodes and edges reachable from a root, and
//! [`draw_dot`] renders them as Graphviz DOT source. Nothing here mutates the
//! graph; rendering the DOT text to an image is left to external tooling.

use crate::autograd::graph::{topological_sort, NodeId};
use crate::value::Value;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Write};

/// Layout direction of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Left to right.
    #[default]
    LR,
    /// Top to bottom.
    TB,
}

impl RankDir {
    fn as_str(self) -> &'static str {
        match self {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotOptions {
    pub rankdir: RankDir,
}

/// Collects every node reachable from `root` and every `operand -> result`
/// edge. Nodes are listed operands-first; both lists are free of duplicates.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let nodes = topological_sort(root);
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        for operand in node.operands() {
            if seen.insert((operand.node_id(), node.node_id())) {
                edges.push((operand, node.clone()));
            }
        }
    }
    (nodes, edges)
}

/// Drops non-ASCII characters and escapes the characters that are
/// structural in DOT record labels.
fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(char::is_ascii) {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders the graph rooted at `root` as Graphviz DOT source.
///
/// Each value becomes a `record` node labelled `{ label | data | grad }`;
/// each non-leaf also gets a small node carrying its operator tag, wired
/// operand -> op -> result.
pub fn draw_dot(root: &Value, options: DotOptions) -> String {
    let mut dot = String::new();
    write_dot(&mut dot, root, options).expect("writing to a String cannot fail");
    dot
}

/// Writes the DOT source produced by [`draw_dot`] into any `fmt::Write` sink.
pub fn write_dot<W: Write>(out: &mut W, root: &Value, options: DotOptions) -> fmt::Result {
    let (nodes, edges) = trace(root);
    let names: HashMap<NodeId, String> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.node_id(), format!("n{}", i)))
        .collect();

    writeln!(out, "digraph {{")?;
    writeln!(out, "    rankdir={};", options.rankdir.as_str())?;

    for node in &nodes {
        let name = &names[&node.node_id()];
        let label = sanitize(node.label().as_deref().unwrap_or(""));
        writeln!(
            out,
            "    {} [label=\"{{ {} | data {:.4} | grad {:.4} }}\", shape=record];",
            name,
            label,
            node.data(),
            node.grad()
        )?;
        if let Some(op) = node.op() {
            writeln!(out, "    {}_op [label=\"{}\"];", name, sanitize(op))?;
            writeln!(out, "    {}_op -> {};", name, name)?;
        }
    }

    for (operand, result) in &edges {
        writeln!(
            out,
            "    {} -> {}_op;",
            names[&operand.node_id()],
            names[&result.node_id()]
        )?;
    }

    writeln!(out, "}}")
}

#[cfg(test)]
#[path = "viz_test.rs"]
mod tests;
