use depgraph_model::Graph;

#[test]
fn add_edge_is_bidirectionally_consistent() {
    let mut g = Graph::new();
    let a = g.add_node("a", None).unwrap();
    let b = g.add_node("b", None).unwrap();
    g.add_edge(a, b);

    assert!(g.node(a).targets.contains(&b));
    assert!(g.node(b).sources.contains(&a));
}

#[test]
fn duplicate_node_name_is_rejected() {
    let mut g = Graph::new();
    g.add_node("a", None).unwrap();
    let err = g.add_node("a", None).unwrap_err();
    assert!(matches!(err, depgraph_model::Error::DuplicateNode { .. }));
}

#[test]
fn empty_node_name_is_rejected() {
    let mut g = Graph::new();
    let err = g.add_node("", None).unwrap_err();
    assert!(matches!(err, depgraph_model::Error::EmptyName));
}

#[test]
fn compact_remaps_surviving_edges_and_drops_tombstones() {
    let mut g = Graph::new();
    let a = g.add_node("a", None).unwrap();
    let b = g.add_node("b", None).unwrap();
    let c = g.add_node("c", None).unwrap();
    g.add_edge(a, b);
    g.add_edge(b, c);

    g.remove_edge(a, b);
    g.remove_edge(b, c);
    g.remove_node(b);

    let remap = g.compact();
    assert_eq!(g.len(), 2);
    let new_a = remap[&a];
    let new_c = remap[&c];
    assert_eq!(g.node(new_a).name, "a");
    assert_eq!(g.node(new_c).name, "c");
    assert!(g.node(new_a).targets.is_empty());
    assert!(!g.contains(remap.get(&b).copied().unwrap_or(new_a)) || remap.get(&b).is_none());
}

#[test]
fn indices_by_name_are_sorted() {
    let mut g = Graph::new();
    g.add_node("c", None).unwrap();
    g.add_node("a", None).unwrap();
    g.add_node("b", None).unwrap();

    let names: Vec<String> = g
        .indices_by_name()
        .into_iter()
        .map(|ix| g.node(ix).name.clone())
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}
