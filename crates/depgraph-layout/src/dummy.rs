//! Dummy-node insertion (§4.5).
//!
//! Replaces every edge that spans more than one level with a chain of dummy nodes, so that after
//! this stage every edge in the graph spans exactly one level (invariant 4). Crossing reduction
//! and coordinate refinement both depend on that invariant holding.

use depgraph_model::{Graph, NodeIx};

use crate::rank::assign_x_sequentially;

/// Walks a worklist of edges whose endpoints are more than one level apart, cutting each down to
/// a single-level hop by inserting one dummy at a time. The counter is local to this call: it is
/// the layout run's own monotone-name state, not a shared global.
pub fn insert_dummies(graph: &mut Graph) {
    let mut worklist: Vec<(NodeIx, NodeIx)> = Vec::new();
    for s in graph.indices_by_name() {
        for t in graph.node(s).targets.iter().copied().collect::<Vec<_>>() {
            if graph.node(s).y - graph.node(t).y > 1 {
                worklist.push((s, t));
            }
        }
    }

    let mut counter: u64 = 1;
    while let Some((s, t)) = worklist.pop() {
        graph.remove_edge(s, t);

        let dummy_y = graph.node(s).y - 1;
        let d = graph.add_dummy(format!("dummy{counter}"), dummy_y);
        counter += 1;
        graph.add_edge(s, d);
        graph.add_edge(d, t);

        if graph.node(d).y - graph.node(t).y > 1 {
            worklist.push((d, t));
        }
    }

    assign_x_sequentially(graph);
}
