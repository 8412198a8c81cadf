//! Longest-path level assignment (§4.4).
//!
//! Roots (nodes with no `targets`) sit at `y = 0`; every other node's level is the length of the
//! longest path back to a root, which the propagation below establishes by always preferring a
//! *higher* level over a lower one when a node is reachable by more than one path.

use depgraph_model::{Graph, NodeIx};

/// Sets `y = 0` on every root and recursively pushes each root's `sources` one level down,
/// repeating until every reachable node has settled on its longest-path level.
pub fn assign_levels(graph: &mut Graph) {
    let roots: Vec<NodeIx> = graph
        .indices_by_name()
        .into_iter()
        .filter(|&ix| graph.node(ix).targets.is_empty())
        .collect();

    for root in roots {
        graph.node_mut(root).y = 0;
        propagate(graph, root, 0);
    }

    assign_x_sequentially(graph);
}

/// `assign(target, target_level)`: every source of `target` belongs at least one level below it.
/// A source already settled at a level at or below `assign_level` is bumped down and revisited;
/// one already strictly below keeps its (longer-path) level untouched.
fn propagate(graph: &mut Graph, target: NodeIx, target_level: i64) {
    let assign_level = target_level + 1;
    let sources: Vec<NodeIx> = graph.node(target).sources.iter().copied().collect();
    for source in sources {
        // -1 (unassigned) is always <= assign_level (>= 1), so both spec cases collapse here.
        if graph.node(source).y <= assign_level {
            graph.node_mut(source).y = assign_level;
            propagate(graph, source, assign_level);
        }
    }
}

/// Assigns consecutive integer `x` values within each level, in ascending-name order. A seed
/// placement; crossing reduction (§4.6) and coordinate refinement (§4.8) do the real work.
pub fn assign_x_sequentially(graph: &mut Graph) {
    let mut next_x: std::collections::HashMap<i64, i64> = std::collections::HashMap::new();
    for ix in graph.indices_by_name() {
        let y = graph.node(ix).y;
        let x = next_x.entry(y).or_insert(0);
        graph.node_mut(ix).x = *x;
        *x += 1;
    }
}
