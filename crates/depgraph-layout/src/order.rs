//! Crossing reduction via barycenter sweeps (§4.6).
//!
//! Alternates an upward half-sweep (order each level by the mean `x` of its `sources`) with a
//! downward half-sweep (order by the mean `x` of its `targets`), `reduce_times` times — the same
//! order the original runs its two half-sweeps in. Neither sweep computes an exact
//! minimum-crossing ordering; it is the same O(iterations · edges) heuristic Dagre/Sugiyama
//! implementations use, here without the compound-graph machinery `dugong::order` carries for
//! subgraph constraints, since this graph has none.

use std::collections::BTreeMap;

use depgraph_model::{Graph, NodeIx};

/// Runs `reduce_times` iterations of (upward sweep, downward sweep).
pub fn reduce_crossings(graph: &mut Graph, reduce_times: usize) {
    for _ in 0..reduce_times {
        sweep(graph, false);
        sweep(graph, true);
    }
}

fn levels_by_y(graph: &Graph) -> BTreeMap<i64, Vec<NodeIx>> {
    let mut levels: BTreeMap<i64, Vec<NodeIx>> = BTreeMap::new();
    for ix in graph.indices_by_name() {
        levels.entry(graph.node(ix).y).or_default().push(ix);
    }
    for nodes in levels.values_mut() {
        nodes.sort_by_key(|&ix| graph.node(ix).x);
    }
    levels
}

/// `downward`: barycenters come from `targets`, levels visited ascending `y`. Otherwise from
/// `sources`, levels visited descending `y`.
fn sweep(graph: &mut Graph, downward: bool) {
    let mut levels: Vec<(i64, Vec<NodeIx>)> = levels_by_y(graph).into_iter().collect();
    if !downward {
        levels.reverse();
    }

    for (_y, mut nodes) in levels {
        let neighbours = |ix: NodeIx| -> f64 {
            let node = graph.node(ix);
            let set = if downward { &node.targets } else { &node.sources };
            if set.is_empty() {
                f64::INFINITY
            } else {
                let sum: i64 = set.iter().map(|&n| graph.node(n).x).sum();
                sum as f64 / set.len() as f64
            }
        };

        let barycenters: Vec<f64> = nodes.iter().map(|&ix| neighbours(ix)).collect();
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        // Stable sort: ties keep the pre-sort (current-x) order established in `levels_by_y`.
        order.sort_by(|&a, &b| barycenters[a].partial_cmp(&barycenters[b]).unwrap());
        nodes = order.into_iter().map(|i| nodes[i]).collect();

        for (x, &ix) in nodes.iter().enumerate() {
            graph.node_mut(ix).x = x as i64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_leaves_dense_consecutive_x_per_level() {
        let mut g = Graph::new();
        let r1 = g.add_node("r1", None).unwrap();
        let r2 = g.add_node("r2", None).unwrap();
        let c1 = g.add_node("c1", None).unwrap();
        let c2 = g.add_node("c2", None).unwrap();
        g.node_mut(r1).y = 0;
        g.node_mut(r2).y = 0;
        g.node_mut(c1).y = 1;
        g.node_mut(c2).y = 1;
        g.node_mut(r1).x = 0;
        g.node_mut(r2).x = 1;
        g.node_mut(c1).x = 0;
        g.node_mut(c2).x = 1;
        g.add_edge(c1, r2);
        g.add_edge(c2, r1);

        reduce_crossings(&mut g, 1);

        let mut level0: Vec<i64> = [r1, r2].iter().map(|&ix| g.node(ix).x).collect();
        level0.sort();
        assert_eq!(level0, vec![0, 1]);
        let mut level1: Vec<i64> = [c1, c2].iter().map(|&ix| g.node(ix).x).collect();
        level1.sort();
        assert_eq!(level1, vec![0, 1]);
    }

    #[test]
    fn uncrossing_swaps_children_to_match_parent_order() {
        // c1 -> r2, c2 -> r1: an x crossing that a downward sweep should resolve by swapping.
        let mut g = Graph::new();
        let r1 = g.add_node("r1", None).unwrap();
        let r2 = g.add_node("r2", None).unwrap();
        let c1 = g.add_node("c1", None).unwrap();
        let c2 = g.add_node("c2", None).unwrap();
        g.node_mut(r1).y = 0;
        g.node_mut(r2).y = 0;
        g.node_mut(c1).y = 1;
        g.node_mut(c2).y = 1;
        g.node_mut(r1).x = 0;
        g.node_mut(r2).x = 1;
        g.node_mut(c1).x = 0;
        g.node_mut(c2).x = 1;
        g.add_edge(c1, r2);
        g.add_edge(c2, r1);

        reduce_crossings(&mut g, 50);

        assert!(g.node(c1).x > g.node(c2).x);
    }
}
