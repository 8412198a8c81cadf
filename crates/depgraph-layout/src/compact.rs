//! Dummy removal and gap compaction (§4.7).
//!
//! Restores the original long edges a dummy chain stood in for, deletes every dummy, and closes
//! the per-level gaps the departed dummies leave behind in the `x` ordering.

use std::collections::BTreeMap;

use depgraph_model::{Graph, NodeIx};

/// Restores `r1 -> r2` for every pair of real nodes that were connected through a dummy chain,
/// then deletes all dummies and renumbers each level's surviving nodes to consecutive `x` values.
pub fn remove_dummies_and_compact(graph: &mut Graph) {
    restore_chain_edges(graph);
    drop_dummies(graph);
    leave_no_space(graph);
}

/// Scans levels top-down; for every real node `n`, walks back through any dummy source chain to
/// the real node that originated it and records the direct edge to restore.
fn restore_chain_edges(graph: &mut Graph) {
    let mut levels: BTreeMap<i64, Vec<NodeIx>> = BTreeMap::new();
    for ix in graph.indices_by_name() {
        levels.entry(graph.node(ix).y).or_default().push(ix);
    }

    let mut restores: Vec<(NodeIx, NodeIx)> = Vec::new();
    for (_y, nodes) in levels {
        for n in nodes {
            if graph.node(n).is_dummy {
                continue;
            }
            let sources: Vec<NodeIx> = graph.node(n).sources.iter().copied().collect();
            for s in sources {
                if !graph.node(s).is_dummy {
                    continue;
                }
                let mut cur = s;
                while graph.node(cur).is_dummy {
                    cur = *graph
                        .node(cur)
                        .sources
                        .iter()
                        .next()
                        .expect("a dummy has exactly one source");
                }
                restores.push((cur, n));
            }
        }
    }

    for (r, n) in restores {
        graph.add_edge(r, n);
    }
}

fn drop_dummies(graph: &mut Graph) {
    let dummies: Vec<NodeIx> = graph
        .indices()
        .into_iter()
        .filter(|&ix| graph.node(ix).is_dummy)
        .collect();

    for d in dummies {
        let targets: Vec<NodeIx> = graph.node(d).targets.iter().copied().collect();
        let sources: Vec<NodeIx> = graph.node(d).sources.iter().copied().collect();
        for t in targets {
            graph.remove_edge(d, t);
        }
        for s in sources {
            graph.remove_edge(s, d);
        }
        graph.remove_node(d);
    }

    graph.compact();
}

fn leave_no_space(graph: &mut Graph) {
    let mut levels: BTreeMap<i64, Vec<NodeIx>> = BTreeMap::new();
    for ix in graph.indices_by_name() {
        levels.entry(graph.node(ix).y).or_default().push(ix);
    }

    for (_y, mut nodes) in levels {
        nodes.sort_by_key(|&ix| graph.node(ix).x);
        for (x, ix) in nodes.into_iter().enumerate() {
            graph.node_mut(ix).x = x as i64;
        }
    }
}
