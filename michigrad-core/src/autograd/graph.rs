use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Stable for as long as any handle to the node is alive, and independent of
/// the node's `data`.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a topological order of the graph reachable from `root`.
///
/// Every node appears after all of its operands, `root` last. Iterative
/// post-order DFS with a visited set keyed by [`NodeId`], so a shared
/// sub-expression is listed once no matter how many consumers it has. No
/// cycle check is needed: operands always predate their consumers.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Value> = Vec::new();
    // (node, operands_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        log::trace!("[topological_sort] visiting node {:?}", node.node_id());

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are emitted in their natural order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
