//! Build the initial graph from a prepared input map (§4.1).
//!
//! The scanner that produces this map — reading article files, extracting environment-section
//! references — is an external collaborator (§1); this module only ever sees its output.

use std::collections::{BTreeMap, BTreeSet};

use depgraph_model::Graph;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One article's declared references and external link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRecord {
    pub dependency_articles: BTreeSet<String>,
    pub url: String,
}

/// `name -> {dependency_articles, url}`, the core's only view of the corpus.
pub type IngestMap = BTreeMap<String, IngestRecord>;

/// Creates one node per key, with `href = url`, `is_dummy = false`, and edges for every
/// dependency that names a known article. Dependencies naming unknown articles are silently
/// dropped (§4.1) — they reference articles outside the selected corpus, not an error.
///
/// `seed`, when given, permutes the iteration order used to create nodes and edges before
/// building the graph, so callers can verify that layout is insensitive to input order up to the
/// documented tie-breaks (§6 "Ingest order control"). Without a seed, nodes are created in the
/// input map's natural (sorted-by-name) order.
pub fn ingest(input: &IngestMap, seed: Option<u64>) -> Result<Graph> {
    let mut names: Vec<&String> = input.keys().collect();
    if let Some(seed) = seed {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        names.shuffle(&mut rng);
    }

    let mut graph = Graph::new();
    for name in &names {
        if name.is_empty() {
            return Err(Error::InvalidInput {
                reason: "article name must not be empty".to_string(),
            });
        }
        let record = &input[*name];
        graph.add_node((*name).clone(), Some(record.url.clone()))?;
    }

    for name in &names {
        let record = &input[*name];
        let Some(v) = graph.index_of(name) else {
            continue;
        };
        for dep in &record.dependency_articles {
            if let Some(w) = graph.index_of(dep) {
                graph.add_edge(v, w);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(deps: &[&str], url: &str) -> IngestRecord {
        IngestRecord {
            dependency_articles: deps.iter().map(|s| s.to_string()).collect(),
            url: url.to_string(),
        }
    }

    #[test]
    fn unknown_dependencies_are_silently_dropped() {
        let mut input = IngestMap::new();
        input.insert("a".to_string(), record(&["ghost"], "a.html"));

        let g = ingest(&input, None).unwrap();
        let a = g.index_of("a").unwrap();
        assert!(g.node(a).targets.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut input = IngestMap::new();
        input.insert("".to_string(), record(&[], ""));

        let err = ingest(&input, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn seeded_permutation_does_not_change_the_resulting_edge_set() {
        let mut input = IngestMap::new();
        input.insert("a".to_string(), record(&[], "a.html"));
        input.insert("b".to_string(), record(&["a"], "b.html"));
        input.insert("c".to_string(), record(&["a", "b"], "c.html"));

        let unseeded = ingest(&input, None).unwrap();
        let seeded = ingest(&input, Some(7)).unwrap();

        for name in ["a", "b", "c"] {
            let u = unseeded.node(unseeded.index_of(name).unwrap());
            let s = seeded.node(seeded.index_of(name).unwrap());
            let u_targets: BTreeSet<&str> = u
                .targets
                .iter()
                .map(|ix| unseeded.node(*ix).name.as_str())
                .collect();
            let s_targets: BTreeSet<&str> = s
                .targets
                .iter()
                .map(|ix| seeded.node(*ix).name.as_str())
                .collect();
            assert_eq!(u_targets, s_targets);
        }
    }
}
