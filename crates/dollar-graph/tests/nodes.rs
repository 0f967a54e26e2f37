use std::collections::BTreeSet;

use dollar_core::{codes, NodeId};
use dollar_graph::Graph;

fn id(raw: u64) -> NodeId {
    NodeId::from_raw(raw)
}

#[test]
fn unique_ids_fill_the_lowest_gap() {
    let mut graph: Graph<u32> = Graph::undirected();
    let ids: Vec<NodeId> = (0..25).map(|value| graph.add_node_auto(value + 7)).collect();
    let distinct: BTreeSet<NodeId> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), 25);
    assert_eq!(graph.unique_id(), id(25));

    graph.remove_node(id(3));
    graph.remove_node(id(0));
    assert_eq!(graph.unique_id(), id(0));
    graph.add_node_auto(100);
    assert_eq!(graph.unique_id(), id(3));
}

#[test]
fn unique_id_skips_sparse_ids() {
    let mut graph: Graph<()> = Graph::undirected();
    graph.add_node(id(1), ()).unwrap();
    graph.add_node(id(2), ()).unwrap();
    assert_eq!(graph.unique_id(), id(0));
    graph.add_node(id(0), ()).unwrap();
    assert_eq!(graph.unique_id(), id(3));
}

#[test]
fn add_node_returns_count_and_rejects_duplicates() {
    let mut graph: Graph<&str> = Graph::undirected();
    assert_eq!(graph.add_node(id(1), "a").unwrap(), 1);
    assert_eq!(graph.add_node(id(2), "b").unwrap(), 2);

    let err = graph.add_node(id(1), "c").unwrap_err();
    assert!(err.is(codes::DUPLICATE_ID));
    assert_eq!(err.info().context.get("node"), Some(&"1".to_string()));
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.node(id(1)), Some(&"a"));
}

#[test]
fn payload_lookup() {
    let mut graph: Graph<i32> = Graph::undirected();
    for (raw, value) in [(1, 9), (2, 10), (3, 11), (4, 12)] {
        graph.add_node(id(raw), value).unwrap();
    }
    assert_eq!(graph.node(id(1)), Some(&9));
    assert_eq!(graph.node(id(4)), Some(&12));
    assert_eq!(graph.node(id(5)), None);

    assert_eq!(graph.find_node(&11), Some(id(3)));
    assert_eq!(graph.find_node(&99), None);

    *graph.node_mut(id(2)).unwrap() += 5;
    assert_eq!(graph.node(id(2)), Some(&15));
}

#[test]
fn removal_updates_counts() {
    let mut graph: Graph<u32> = Graph::undirected();
    let ids: Vec<NodeId> = (0..14).map(|value| graph.add_node_auto(value)).collect();
    assert_eq!(graph.num_nodes(), 14);

    assert!(graph.remove_node(ids[2]));
    assert!(graph.remove_node(ids[0]));
    assert!(!graph.remove_node(ids[0]));
    assert_eq!(graph.num_nodes(), 12);

    graph.remove_all_nodes();
    assert_eq!(graph.num_nodes(), 0);
}

#[test]
fn iteration_is_ordered_and_restartable() {
    let mut graph: Graph<char> = Graph::undirected();
    graph.add_node(id(5), 'c').unwrap();
    graph.add_node(id(1), 'a').unwrap();
    graph.add_node(id(3), 'b').unwrap();

    let first: Vec<char> = graph.iter().copied().collect();
    let second: Vec<char> = (&graph).into_iter().copied().collect();
    assert_eq!(first, vec!['a', 'b', 'c']);
    assert_eq!(first, second);
    assert_eq!(graph.node_ids(), vec![id(1), id(3), id(5)]);

    let pairs: Vec<(NodeId, char)> = graph.nodes().map(|(id, c)| (id, *c)).collect();
    assert_eq!(pairs, vec![(id(1), 'a'), (id(3), 'b'), (id(5), 'c')]);

    for payload in graph.payloads_mut() {
        *payload = payload.to_ascii_uppercase();
    }
    let mut count = 0;
    for payload in &graph {
        assert!(payload.is_ascii_uppercase());
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn display_lists_nodes_and_edges() {
    let mut graph: Graph<i32> = Graph::undirected();
    graph.add_node(id(0), 4).unwrap();
    graph.add_node(id(1), -2).unwrap();
    graph.add_weighted_edge(id(0), id(1), 3).unwrap();

    assert_eq!(
        graph.to_string(),
        " Nodes[2]: (0: 4) (1: -2)\n Edges[1]: (0, 1: 3)"
    );
}
