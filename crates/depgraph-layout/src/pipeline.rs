//! Runs the full layered pipeline end to end (§4) and produces the output table (§4.10).

use depgraph_model::Graph;

use crate::compact::remove_dummies_and_compact;
use crate::config::LayoutConfig;
use crate::dummy::insert_dummies;
use crate::error::Result;
use crate::ingest::{IngestMap, ingest};
use crate::isolated::place_isolated_nodes;
use crate::order::reduce_crossings;
use crate::output::{LayoutOutput, NodeAttrs};
use crate::position::refine_coordinates;
use crate::prune::prune_transitive_edges;
use crate::rank::assign_levels;
use crate::self_loops::remove_self_references;

/// Ingests `input` and runs the layered pipeline with `config`, returning the finished
/// node-attribute table. `seed`, when given, is forwarded to [`crate::ingest::ingest`] to
/// permute build order (§6 "Ingest order control"); it has no effect beyond ingest.
pub fn layout_layered(input: &IngestMap, config: &LayoutConfig, seed: Option<u64>) -> Result<LayoutOutput> {
    let mut graph = ingest(input, seed)?;
    run_layered(&mut graph, config)?;
    Ok(to_output(&graph))
}

/// Runs the pipeline stages on an already-ingested graph, in place. Exposed separately from
/// [`layout_layered`] so [`crate::backend`] can dispatch to it without re-ingesting, and so
/// tests can build a graph directly and run the pipeline on it.
pub fn run_layered(graph: &mut Graph, config: &LayoutConfig) -> Result<()> {
    remove_self_references(graph);
    prune_transitive_edges(graph)?;
    assign_levels(graph);
    insert_dummies(graph);
    reduce_crossings(graph, config.reduce_times);
    remove_dummies_and_compact(graph);
    refine_coordinates(graph, config.coord_iters, config.dummy_priority);
    place_isolated_nodes(graph);
    Ok(())
}

fn to_output(graph: &Graph) -> LayoutOutput {
    graph
        .indices_by_name()
        .into_iter()
        .map(|ix| {
            let node = graph.node(ix);
            (
                node.name.clone(),
                NodeAttrs {
                    href: node.href.clone().unwrap_or_default(),
                    x: node.x,
                    y: node.y,
                    is_dummy: node.is_dummy,
                },
            )
        })
        .collect()
}

/// Dispatches to whichever backend [`crate::backend`] selects, then ingests and lays out.
pub fn layout(
    input: &IngestMap,
    backend: &dyn crate::backend::LayoutBackend,
    config: &LayoutConfig,
    seed: Option<u64>,
) -> Result<LayoutOutput> {
    let mut graph = ingest(input, seed)?;
    remove_self_references(&mut graph);
    prune_transitive_edges(&mut graph)?;
    backend.layout(&mut graph, config)?;
    Ok(to_output(&graph))
}
