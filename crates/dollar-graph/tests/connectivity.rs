use dollar_core::{codes, NodeId};
use dollar_graph::Graph;

fn id(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

fn graph_with_nodes(count: u64) -> Graph<u64> {
    let mut graph = Graph::undirected();
    for raw in 0..count {
        graph.add_node(id(raw), raw + 7).unwrap();
    }
    graph
}

#[test]
fn empty_graph_is_not_connected() {
    let graph: Graph<u64> = Graph::undirected();
    assert!(!graph.is_connected());
}

#[test]
fn nodes_without_edges_are_not_connected() {
    let graph = graph_with_nodes(4);
    assert!(!graph.is_connected());
}

#[test]
fn lone_node_needs_a_self_loop() {
    let mut graph = graph_with_nodes(1);
    assert!(!graph.is_connected());
    assert!(graph.genus().unwrap_err().is(codes::NOT_CONNECTED));

    graph.add_edge(id(0), id(0)).unwrap();
    assert!(graph.is_connected());
    assert_eq!(graph.genus().unwrap(), 1);
}

#[test]
fn cycle_loses_genus_then_connectivity() {
    let mut graph = graph_with_nodes(4);
    graph.add_edge(id(0), id(1)).unwrap();
    graph.add_edge(id(1), id(2)).unwrap();
    graph.add_edge(id(2), id(3)).unwrap();
    graph.add_edge(id(3), id(0)).unwrap();
    assert!(graph.is_connected());
    assert_eq!(graph.genus().unwrap(), 1);

    assert!(graph.remove_edge(id(1), id(2)));
    assert!(graph.is_connected());
    assert_eq!(graph.genus().unwrap(), 0);

    assert!(graph.remove_edge(id(1), id(0)));
    assert!(!graph.is_connected());
    let err = graph.genus().unwrap_err();
    assert!(err.is(codes::NOT_CONNECTED));
    assert_eq!(err.info().context.get("nodes"), Some(&"4".to_string()));
    assert_eq!(err.info().context.get("edges"), Some(&"2".to_string()));
}

#[test]
fn line_then_loop_stays_connected() {
    let mut graph = graph_with_nodes(4);
    assert!(!graph.is_connected());

    graph.add_edge(id(0), id(1)).unwrap();
    graph.add_edge(id(2), id(1)).unwrap();
    graph.add_edge(id(3), id(2)).unwrap();
    assert!(graph.is_connected());

    graph.add_edge(id(3), id(0)).unwrap();
    assert!(graph.is_connected());
}

#[test]
fn isolated_component_breaks_connectivity() {
    let mut graph = graph_with_nodes(5);
    graph.add_edge(id(0), id(1)).unwrap();
    graph.add_edge(id(1), id(2)).unwrap();
    graph.add_edge(id(3), id(4)).unwrap();
    assert!(!graph.is_connected());

    graph.add_edge(id(2), id(3)).unwrap();
    assert!(graph.is_connected());
}

#[test]
fn directed_graphs_use_weak_connectivity() {
    let mut graph: Graph<()> = Graph::directed();
    for raw in 0..3 {
        graph.add_node(id(raw), ()).unwrap();
    }
    graph.add_edge(id(0), id(1)).unwrap();
    graph.add_edge(id(2), id(1)).unwrap();

    assert!(graph.is_connected());
    assert_eq!(graph.genus().unwrap(), 0);
}

#[test]
fn long_path_is_connected() {
    let mut graph: Graph<()> = Graph::undirected();
    let ids: Vec<NodeId> = (0..50_000).map(|_| graph.add_node_auto(())).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    assert!(graph.is_connected());
    assert_eq!(graph.genus().unwrap(), 0);

    graph.remove_edge(ids[25_000], ids[25_001]);
    assert!(!graph.is_connected());
}
