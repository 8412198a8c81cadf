//! Self-reference removal (§4.2).

use depgraph_model::Graph;

/// Removes every node from its own `targets` and `sources`. Idempotent; runs once, right after
/// ingest and before pruning, so later stages never have to special-case `n == n`.
pub fn remove_self_references(graph: &mut Graph) {
    for ix in graph.indices() {
        graph.remove_edge(ix, ix);
    }
}
