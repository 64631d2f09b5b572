use hexgraph_mc::{Graph, HexError, VertexId};

fn graph_with_vertices(count: usize) -> (Graph<u8, f64>, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids = (0..count).map(|i| graph.add_vertex(i as u8)).collect();
    (graph, ids)
}

#[test]
fn test_add_vertex_assigns_sequential_ids() {
    let (graph, ids) = graph_with_vertices(4);

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(graph.vertex(i), Some(*id));
    }
    assert_eq!(graph.vertex(4), None);
}

#[test]
fn test_edges_are_symmetric() {
    let (mut graph, v) = graph_with_vertices(5);

    graph.add_edge(v[0], v[3], 2.5).unwrap();
    graph.add_edge(v[4], v[1], 0.75).unwrap();

    for &(x, y, w) in &[(v[0], v[3], 2.5), (v[4], v[1], 0.75)] {
        assert!(graph.is_adjacent(x, y).unwrap());
        assert!(graph.is_adjacent(y, x).unwrap());
        assert_eq!(graph.get_edge_weight(x, y).unwrap(), w);
        assert_eq!(graph.get_edge_weight(y, x).unwrap(), w);
    }

    assert!(!graph.is_adjacent(v[0], v[1]).unwrap());
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_adding_existing_edge_only_updates_weight() {
    let (mut graph, v) = graph_with_vertices(3);

    graph.add_edge(v[0], v[1], 1.0).unwrap();
    graph.add_edge(v[1], v[2], 1.0).unwrap();
    assert_eq!(graph.edge_count(), 2);

    // same pair, reversed orientation
    graph.add_edge(v[1], v[0], 9.0).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge_weight(v[0], v[1]).unwrap(), 9.0);
    assert_eq!(graph.get_edge_weight(v[1], v[0]).unwrap(), 9.0);
    assert_eq!(graph.get_neighbors(v[0]).unwrap(), vec![v[1]]);
    assert_eq!(graph.get_neighbors(v[1]).unwrap(), vec![v[0], v[2]]);
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let (mut graph, v) = graph_with_vertices(5);

    graph.add_edge(v[2], v[4], 1.0).unwrap();
    graph.add_edge(v[2], v[0], 1.0).unwrap();
    graph.add_edge(v[3], v[2], 1.0).unwrap();

    assert_eq!(graph.get_neighbors(v[2]).unwrap(), vec![v[4], v[0], v[3]]);
    assert_eq!(
        graph.neighbors(v[2]).unwrap().collect::<Vec<_>>(),
        vec![v[4], v[0], v[3]]
    );
    assert!(graph.get_neighbors(v[1]).unwrap().is_empty());
}

#[test]
fn test_set_edge_weight() {
    let (mut graph, v) = graph_with_vertices(2);
    graph.add_edge(v[0], v[1], 1.0).unwrap();

    graph.set_edge_weight(v[1], v[0], 4.0).unwrap();
    assert_eq!(graph.get_edge_weight(v[0], v[1]).unwrap(), 4.0);
    assert_eq!(graph.get_edge_weight(v[1], v[0]).unwrap(), 4.0);
}

#[test]
fn test_weight_access_on_missing_edge_fails() {
    let (mut graph, v) = graph_with_vertices(3);
    graph.add_edge(v[0], v[1], 1.0).unwrap();

    assert_eq!(
        graph.get_edge_weight(v[0], v[2]),
        Err(HexError::MissingEdge { from: 0, to: 2 })
    );
    assert_eq!(
        graph.set_edge_weight(v[2], v[1], 3.0),
        Err(HexError::MissingEdge { from: 2, to: 1 })
    );
    assert_eq!(graph.get_edge_weight(v[0], v[1]).unwrap(), 1.0);
}

#[test]
fn test_foreign_vertex_ids_are_rejected() {
    let (big, big_ids) = graph_with_vertices(6);
    let (mut small, small_ids) = graph_with_vertices(2);
    let foreign = big_ids[5];
    assert_eq!(big.vertex_count(), 6);

    let expected = HexError::InvalidVertex {
        index: 5,
        vertex_count: 2,
    };
    assert_eq!(small.add_edge(small_ids[0], foreign, 1.0), Err(expected.clone()));
    assert_eq!(small.is_adjacent(foreign, small_ids[1]), Err(expected.clone()));
    assert_eq!(small.get_vertex_label(foreign), Err(expected.clone()));
    assert_eq!(small.set_vertex_label(foreign, 3), Err(expected.clone()));
    assert!(matches!(small.get_neighbors(foreign), Err(HexError::InvalidVertex { .. })));
    assert_eq!(small.edge_count(), 0);
}

#[test]
fn test_self_loops_are_rejected() {
    let (mut graph, v) = graph_with_vertices(2);

    assert_eq!(graph.add_edge(v[1], v[1], 1.0), Err(HexError::SelfLoop(1)));
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.is_adjacent(v[1], v[1]).unwrap());
}

#[test]
fn test_vertex_labels() {
    let (mut graph, v) = graph_with_vertices(3);

    assert_eq!(graph.get_vertex_label(v[2]).unwrap(), 2);
    graph.set_vertex_label(v[2], 42).unwrap();
    assert_eq!(graph.get_vertex_label(v[2]).unwrap(), 42);
    assert_eq!(graph.get_vertex_label(v[1]).unwrap(), 1);
}

#[test]
fn test_copy_from_reproduces_graph() {
    let (mut source, v) = graph_with_vertices(5);
    source.add_edge(v[0], v[1], 1.5).unwrap();
    source.add_edge(v[1], v[2], 2.5).unwrap();
    source.add_edge(v[4], v[0], 3.5).unwrap();
    source.add_edge(v[3], v[2], 4.5).unwrap();
    source.set_vertex_label(v[3], 99).unwrap();

    // the target has stale content that must not survive the copy
    let (mut copy, stale) = graph_with_vertices(2);
    copy.add_edge(stale[0], stale[1], 8.0).unwrap();

    copy.copy_from(&source).unwrap();

    assert_eq!(copy.vertex_count(), source.vertex_count());
    assert_eq!(copy.edge_count(), source.edge_count());
    for x in source.vertex_ids() {
        assert_eq!(
            copy.get_vertex_label(x).unwrap(),
            source.get_vertex_label(x).unwrap()
        );
        for y in source.vertex_ids() {
            assert_eq!(copy.is_adjacent(x, y).unwrap(), source.is_adjacent(x, y).unwrap());
            if source.is_adjacent(x, y).unwrap() {
                assert_eq!(
                    copy.get_edge_weight(x, y).unwrap(),
                    source.get_edge_weight(x, y).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_clear_removes_everything() {
    let (mut graph, v) = graph_with_vertices(3);
    graph.add_edge(v[0], v[1], 1.0).unwrap();
    graph.add_edge(v[1], v[2], 1.0).unwrap();

    graph.clear();

    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex(0), None);

    let fresh = graph.add_vertex(7);
    assert_eq!(fresh.index(), 0);
}
