//! A force-directed peer to `depgraph-layout`'s layered pipeline.
//!
//! Grounded in two places: the teacher workspace's `manatee` crate (a sibling force-directed
//! layout engine beside `dugong`, used as the shape for `Options`/`Default` and the plain
//! `f64`-keyed node/edge model), and `original_source`'s
//! `assign_nodes_position_in_spring_layout`, which lays a `networkx.DiGraph` out with
//! `nx.spring_layout(graph, seed=1, k=1/sqrt(len(nodes)))` — a seeded Fruchterman-Reingold
//! simulation. This crate ports that algorithm directly rather than depending on `networkx`.
//!
//! It implements [`depgraph_layout::LayoutBackend`] so a caller selects it by name exactly like
//! the layered back-end (see [`resolve`]), and produces the same output shape with no dummy
//! nodes — this back-end has no concept of one.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::FxHashMap;

use depgraph_layout::{Error, LayoutBackend, LayoutConfig, Result};
use depgraph_model::{Graph, NodeIx};

/// Tunables for the Fruchterman-Reingold simulation. Mirrors `manatee`'s `*Options` structs:
/// one small struct with a `Default` impl, rather than positional arguments.
#[derive(Debug, Clone, Copy)]
pub struct ForceDirectedOptions {
    /// Seed for the initial random placement. `original_source` hard-codes `seed=1`; kept
    /// configurable here rather than hard-coded, matching `CoseBilkentOptions::random_seed`.
    pub random_seed: u64,
    /// Number of simulation steps. `networkx.spring_layout`'s own default is 50.
    pub iterations: usize,
    /// The optimal distance between nodes. `original_source` sets `k = 1/sqrt(node_count)`;
    /// `None` here reproduces that formula at layout time, once the node count is known.
    pub optimal_distance: Option<f64>,
    /// Coordinates are simulated in roughly `[-1, 1]` (as `spring_layout` does) and then scaled
    /// by this factor before rounding to the integer grid the output table requires.
    pub scale: f64,
}

impl Default for ForceDirectedOptions {
    fn default() -> Self {
        Self {
            random_seed: 1,
            iterations: 50,
            optimal_distance: None,
            scale: 100.0,
        }
    }
}

/// The force-directed back-end. Implements [`LayoutBackend`] so it slots in wherever the layered
/// back-end does.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceDirectedBackend {
    pub options: ForceDirectedOptions,
}

impl LayoutBackend for ForceDirectedBackend {
    fn layout(&self, graph: &mut Graph, _config: &LayoutConfig) -> Result<()> {
        run(graph, &self.options);
        Ok(())
    }
}

/// Resolves `"force-directed"` to a [`ForceDirectedBackend`] with default options, the
/// counterpart to `depgraph_layout::backend::resolve`. Returns `Err(Error::UnknownLayout)` for
/// any other name, so a caller can chain the two `resolve` functions and fall through to the same
/// error either way.
pub fn resolve(name: &str) -> Result<Box<dyn LayoutBackend>> {
    match name {
        "force-directed" => Ok(Box::new(ForceDirectedBackend::default())),
        other => Err(Error::UnknownLayout {
            name: other.to_string(),
        }),
    }
}

/// Runs the simulation directly, for callers that already have a [`ForceDirectedOptions`] and
/// don't need the `LayoutBackend` indirection.
pub fn run(graph: &mut Graph, options: &ForceDirectedOptions) {
    let order = graph.indices_by_name();
    let n = order.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        let ix = order[0];
        graph.node_mut(ix).x = 0;
        graph.node_mut(ix).y = 0;
        return;
    }

    let k = options
        .optimal_distance
        .unwrap_or(1.0 / (n as f64).sqrt());

    let mut rng = StdRng::seed_from_u64(options.random_seed);
    let mut pos: FxHashMap<NodeIx, (f64, f64)> = order
        .iter()
        .map(|&ix| (ix, (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5))))
        .collect();

    let mut temperature = 0.1;
    let cooling = temperature / (options.iterations.max(1) as f64);

    for _ in 0..options.iterations {
        let mut displacement: FxHashMap<NodeIx, (f64, f64)> =
            order.iter().map(|&ix| (ix, (0.0, 0.0))).collect();

        for (i, &a) in order.iter().enumerate() {
            for &b in &order[i + 1..] {
                let (ax, ay) = pos[&a];
                let (bx, by) = pos[&b];
                let (dx, dy) = (ax - bx, ay - by);
                let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                let repulsion = k * k / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                let da = displacement.get_mut(&a).unwrap();
                da.0 += ux * repulsion;
                da.1 += uy * repulsion;
                let db = displacement.get_mut(&b).unwrap();
                db.0 -= ux * repulsion;
                db.1 -= uy * repulsion;
            }
        }

        for &a in &order {
            let neighbours: Vec<NodeIx> = graph
                .node(a)
                .targets
                .iter()
                .chain(graph.node(a).sources.iter())
                .copied()
                .collect();
            for b in neighbours {
                let (ax, ay) = pos[&a];
                let (bx, by) = pos[&b];
                let (dx, dy) = (ax - bx, ay - by);
                let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                let attraction = dist * dist / k;
                let (ux, uy) = (dx / dist, dy / dist);
                let da = displacement.get_mut(&a).unwrap();
                da.0 -= ux * attraction;
                da.1 -= uy * attraction;
            }
        }

        for &ix in &order {
            let (dx, dy) = displacement[&ix];
            let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
            let capped = dist.min(temperature);
            let p = pos.get_mut(&ix).unwrap();
            p.0 += dx / dist * capped;
            p.1 += dy / dist * capped;
        }

        temperature = (temperature - cooling).max(0.0);
    }

    for &ix in &order {
        let (x, y) = pos[&ix];
        let node = graph.node_mut(ix);
        node.x = (x * options.scale).round() as i64;
        node.y = (y * options.scale).round() as i64;
    }
}
