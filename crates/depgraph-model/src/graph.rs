//! The node arena.
//!
//! Nodes are stored in tombstoned slots (`Vec<Option<Node>>`) so that a stage which removes
//! nodes mid-scan (dummy removal, see `depgraph-layout::compact`) can finish the scan before any
//! index is invalidated. [`Graph::compact`] rebuilds a dense arena and remaps every surviving
//! edge once the tombstones are no longer needed.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::node::{Node, NodeIx};

#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    index: FxHashMap<String, NodeIx>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: impl Into<String>, href: Option<String>) -> Result<NodeIx> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateNode { name });
        }
        let ix = NodeIx(self.nodes.len());
        self.index.insert(name.clone(), ix);
        self.nodes.push(Some(Node::new(name, href, false)));
        Ok(ix)
    }

    pub fn add_dummy(&mut self, name: impl Into<String>, y: i64) -> NodeIx {
        let name = name.into();
        let ix = NodeIx(self.nodes.len());
        let mut node = Node::new(name.clone(), None, true);
        node.y = y;
        self.index.insert(name, ix);
        self.nodes.push(Some(node));
        ix
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIx> {
        self.index.get(name).copied()
    }

    pub fn node(&self, ix: NodeIx) -> &Node {
        self.nodes[ix.0]
            .as_ref()
            .unwrap_or_else(|| panic!("{:?} was removed before this access", ix))
    }

    pub fn node_mut(&mut self, ix: NodeIx) -> &mut Node {
        self.nodes[ix.0]
            .as_mut()
            .unwrap_or_else(|| panic!("{:?} was removed before this access", ix))
    }

    pub fn contains(&self, ix: NodeIx) -> bool {
        matches!(self.nodes.get(ix.0), Some(Some(_)))
    }

    /// All live indices, in arena order (insertion order, modulo tombstones).
    pub fn indices(&self) -> Vec<NodeIx> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].is_some())
            .map(NodeIx)
            .collect()
    }

    /// Live indices sorted by node name; the deterministic iteration order required wherever the
    /// spec does not otherwise name a tie-breaker.
    pub fn indices_by_name(&self) -> Vec<NodeIx> {
        let mut ixs = self.indices();
        ixs.sort_by(|&a, &b| self.node(a).name.cmp(&self.node(b).name));
        ixs
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Adds the edge `v -> w`, maintaining bidirectional consistency (`w ∈ v.targets ⇔
    /// v ∈ w.sources`). Self-loops are permitted here; removing them is a distinct pipeline
    /// stage (`depgraph_layout::self_loops`).
    pub fn add_edge(&mut self, v: NodeIx, w: NodeIx) {
        self.node_mut(v).targets.insert(w);
        self.node_mut(w).sources.insert(v);
    }

    pub fn remove_edge(&mut self, v: NodeIx, w: NodeIx) {
        self.node_mut(v).targets.remove(&w);
        self.node_mut(w).sources.remove(&v);
    }

    /// Tombstones `ix`. The caller is responsible for having already removed every edge incident
    /// to `ix` from its neighbours' `targets`/`sources` sets.
    pub fn remove_node(&mut self, ix: NodeIx) {
        if let Some(node) = self.nodes[ix.0].take() {
            self.index.remove(&node.name);
        }
    }

    /// Rebuilds a dense arena from the surviving nodes, remapping every `targets`/`sources`
    /// reference. Returns the old-to-new index map (for callers tracking indices outside the
    /// arena, e.g. a worklist).
    pub fn compact(&mut self) -> FxHashMap<NodeIx, NodeIx> {
        let old_nodes = std::mem::take(&mut self.nodes);
        let mut remap: FxHashMap<NodeIx, NodeIx> = FxHashMap::default();
        let mut survivors: Vec<Node> = Vec::with_capacity(old_nodes.len());
        for (old_i, slot) in old_nodes.into_iter().enumerate() {
            if let Some(node) = slot {
                remap.insert(NodeIx(old_i), NodeIx(survivors.len()));
                survivors.push(node);
            }
        }

        for node in &mut survivors {
            node.targets = node.targets.iter().filter_map(|ix| remap.get(ix).copied()).collect();
            node.sources = node.sources.iter().filter_map(|ix| remap.get(ix).copied()).collect();
        }

        self.index.clear();
        for (i, node) in survivors.iter().enumerate() {
            self.index.insert(node.name.clone(), NodeIx(i));
        }
        self.nodes = survivors.into_iter().map(Some).collect();
        remap
    }
}
