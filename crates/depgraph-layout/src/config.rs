//! Named tunables for the layered pipeline (§6).

/// Mirrors `dugong::GraphLabel`'s role: the one place per-run knobs live, instead of scattering
/// magic numbers through the pipeline modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Iterations of the crossing-reduction barycenter sweep (§4.6). Each iteration runs one
    /// upward half-sweep and one downward half-sweep.
    pub reduce_times: usize,
    /// Iterations of the coordinate-refinement cascade (§4.8). Each iteration runs one upward
    /// pass and one downward pass.
    pub coord_iters: usize,
    /// Priority assigned to dummy nodes during coordinate refinement; must exceed the degree of
    /// any real node so dummy chains never yield their position to a real node.
    pub dummy_priority: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            reduce_times: 50,
            coord_iters: 2,
            dummy_priority: u64::MAX,
        }
    }
}
