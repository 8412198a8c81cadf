//! Transitive-edge pruning (§4.3).
//!
//! Removes every edge `a -> b` for which a longer path `a -> ... -> b` also exists, so the later
//! layered drawing does not carry redundant direct edges alongside the paths that already imply
//! them.

use rustc_hash::{FxHashMap, FxHashSet};

use depgraph_model::{Graph, NodeIx};

use crate::error::{Error, Result};

/// `ancestors(n)`: every node reachable from `n` by following `targets` transitively, excluding
/// `n` itself. Memoized per node; a node re-entered while its own computation is still in
/// progress means the input describes a cycle, which this stage cannot terminate on (self-loops
/// are already gone by §4.2, so any remaining cycle spans two or more nodes).
fn ancestors_of(
    graph: &Graph,
    ix: NodeIx,
    cache: &mut FxHashMap<NodeIx, FxHashSet<NodeIx>>,
    in_progress: &mut FxHashSet<NodeIx>,
) -> Result<FxHashSet<NodeIx>> {
    if let Some(cached) = cache.get(&ix) {
        return Ok(cached.clone());
    }
    if !in_progress.insert(ix) {
        return Err(Error::InvalidInput {
            reason: format!(
                "cycle detected at node {:?}; pruning requires an acyclic graph",
                graph.node(ix).name
            ),
        });
    }

    let mut result = FxHashSet::default();
    for &target in &graph.node(ix).targets {
        result.insert(target);
        let target_ancestors = ancestors_of(graph, target, cache, in_progress)?;
        result.extend(target_ancestors);
    }

    in_progress.remove(&ix);
    cache.insert(ix, result.clone());
    Ok(result)
}

/// Removes every edge `n -> t` where `t` is also reachable from `n` through another of `n`'s
/// targets. Iteration order does not affect the result: pruning only ever looks at `targets` sets,
/// which are unordered, and each removable edge is identified independently of the others.
pub fn prune_transitive_edges(graph: &mut Graph) -> Result<()> {
    let mut cache = FxHashMap::default();
    let mut in_progress = FxHashSet::default();
    for ix in graph.indices_by_name() {
        ancestors_of(graph, ix, &mut cache, &mut in_progress)?;
    }

    for ix in graph.indices_by_name() {
        let targets: Vec<NodeIx> = graph.node(ix).targets.iter().copied().collect();
        let mut union = FxHashSet::default();
        for &t in &targets {
            union.extend(cache[&t].iter().copied());
        }
        for t in targets {
            if union.contains(&t) {
                graph.remove_edge(ix, t);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundant_direct_edge_is_removed() {
        // a -> b -> c, a -> c (redundant: a reaches c via b already).
        let mut g = Graph::new();
        let a = g.add_node("a", None).unwrap();
        let b = g.add_node("b", None).unwrap();
        let c = g.add_node("c", None).unwrap();
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(a, c);

        prune_transitive_edges(&mut g).unwrap();

        assert!(g.node(a).targets.contains(&b));
        assert!(!g.node(a).targets.contains(&c));
        assert!(g.node(b).targets.contains(&c));
    }

    #[test]
    fn diamond_keeps_both_direct_edges() {
        // a -> b -> d, a -> c -> d; neither a->b nor a->c is implied by the other.
        let mut g = Graph::new();
        let a = g.add_node("a", None).unwrap();
        let b = g.add_node("b", None).unwrap();
        let c = g.add_node("c", None).unwrap();
        let d = g.add_node("d", None).unwrap();
        g.add_edge(a, b);
        g.add_edge(a, c);
        g.add_edge(b, d);
        g.add_edge(c, d);

        prune_transitive_edges(&mut g).unwrap();

        assert!(g.node(a).targets.contains(&b));
        assert!(g.node(a).targets.contains(&c));
        assert!(g.node(b).targets.contains(&d));
        assert!(g.node(c).targets.contains(&d));
    }

    #[test]
    fn cycle_is_rejected() {
        let mut g = Graph::new();
        let a = g.add_node("a", None).unwrap();
        let b = g.add_node("b", None).unwrap();
        g.add_edge(a, b);
        g.add_edge(b, a);

        let err = prune_transitive_edges(&mut g).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
