//! Pluggable layout back-ends (§5, "Alternate layout backends").
//!
//! Mirrors `manatee`'s `Algorithm` dispatch: one trait object per back-end, selected by name at
//! the edge (a CLI flag, a config key) rather than by `match`ing a closed enum inside the core.
//! `depgraph-layout-force` registers a second implementation of this trait; nothing in this
//! crate depends on that crate, only the reverse.

use depgraph_model::Graph;

use crate::config::LayoutConfig;
use crate::error::{Error, Result};

/// A layout algorithm that mutates a graph's `x`/`y` in place. Implementors may assume
/// self-loops and transitive edges are already removed (§4.2, §4.3); [`crate::pipeline::layout`]
/// runs those stages before dispatching.
pub trait LayoutBackend {
    fn layout(&self, graph: &mut Graph, config: &LayoutConfig) -> Result<()>;
}

/// The layered (Sugiyama-style) pipeline this crate implements: level assignment, dummy
/// insertion, crossing reduction, compaction, coordinate refinement, isolated-node placement.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayeredBackend;

impl LayoutBackend for LayeredBackend {
    fn layout(&self, graph: &mut Graph, config: &LayoutConfig) -> Result<()> {
        crate::rank::assign_levels(graph);
        crate::dummy::insert_dummies(graph);
        crate::order::reduce_crossings(graph, config.reduce_times);
        crate::compact::remove_dummies_and_compact(graph);
        crate::position::refine_coordinates(graph, config.coord_iters, config.dummy_priority);
        crate::isolated::place_isolated_nodes(graph);
        Ok(())
    }
}

/// Resolves a back-end by name for a caller that only has a string (a CLI flag, a config
/// value). `"layered"` is the only name this crate registers; `depgraph-layout-force` registers
/// `"force-directed"` the same way, in its own `resolve`. `"spectral"` and `"graphviz"` are named
/// in the broader design but never implemented here (§5 Open Question); both fall through to
/// [`Error::UnknownLayout`] like any other unrecognised name.
pub fn resolve(name: &str) -> Result<Box<dyn LayoutBackend>> {
    match name {
        "layered" => Ok(Box::new(LayeredBackend)),
        other => Err(Error::UnknownLayout {
            name: other.to_string(),
        }),
    }
}
