//! Node arena and directed-graph primitives shared by the `depgraph-layout` crates.
//!
//! Baseline: `dugong-graphlib` (see the workspace's dagre-derived layout crates). Unlike a
//! generic multigraph container, this arena is purpose-built for one shape: named nodes with
//! `targets`/`sources` adjacency sets, addressed by small integer indices rather than shared
//! pointers, so the layout pipeline never needs interior mutability or reference counting to
//! walk a cyclic-by-construction (bidirectional) structure.

mod error;
mod graph;
mod node;

pub use error::{Error, Result};
pub use graph::Graph;
pub use node::{Node, NodeIx};
