//! A layered (Sugiyama-style) layout engine for directed dependency graphs.
//!
//! Baseline: `dugong`, the dagre-derived layout crate this workspace otherwise ships (see the
//! teacher crate under the same organization). Where `dugong` targets general diagram layout
//! (compound subgraphs, rank direction, network-simplex ranking, edge labels), this crate targets
//! one narrower shape: a directed graph of named articles with cross-references, laid out with
//! longest-path ranking and a priority-based coordinate cascade. The pipeline is otherwise the
//! same family of algorithm and mirrors `dugong`'s module-per-stage layout.
//!
//! Pipeline, in order: [`ingest`] -> [`self_loops`] -> [`prune`] -> [`rank`] -> [`dummy`] ->
//! [`order`] -> [`compact`] -> [`position`] -> [`isolated`]. [`pipeline::layout`] runs all of
//! them and hands back the finished node-attribute table.

pub mod backend;
pub mod compact;
pub mod config;
pub mod dummy;
pub mod error;
pub mod ingest;
pub mod isolated;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod position;
pub mod prune;
pub mod rank;
pub mod self_loops;

pub use backend::{LayeredBackend, LayoutBackend};
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use ingest::{IngestMap, IngestRecord};
pub use output::{LayoutOutput, NodeAttrs};
pub use pipeline::{layout, layout_layered};

pub use depgraph_model::{Graph, Node, NodeIx};
