//! Isolated-node placement (§4.9).
//!
//! A node with neither `targets` nor `sources` participates in no edge, so none of the earlier
//! stages give it special treatment beyond the blanket root handling in [`crate::rank`] (it
//! qualifies as a root, since its `targets` set is empty, same as any real top node). This stage
//! gives it a final, deliberate home: to the right of every referenced top-level node, so it never
//! reads as part of the connected graph above it.

use depgraph_model::Graph;

/// Parks every fully-isolated node (no targets, no sources) one step to the right of the previous
/// frontier, starting just past the rightmost "top" node (no targets, at least one source).
///
/// The frontier starts at `-1` rather than `0`: with no top node in the graph at all (e.g. a
/// single isolated node), this keeps the first isolated node at `x = 0` rather than `x = 1`,
/// matching the single-node boundary case (§8) — see DESIGN.md for the full rationale.
pub fn place_isolated_nodes(graph: &mut Graph) {
    let mut frontier: i64 = -1;
    for ix in graph.indices_by_name() {
        let node = graph.node(ix);
        if node.targets.is_empty() && !node.sources.is_empty() {
            frontier = frontier.max(node.x);
        }
    }

    for ix in graph.indices_by_name() {
        let node = graph.node(ix);
        if node.targets.is_empty() && node.sources.is_empty() {
            frontier += 1;
            let node = graph.node_mut(ix);
            node.y = node.y.max(0);
            node.x = frontier;
        }
    }
}
