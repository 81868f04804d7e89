//! Fixture topologies shared by the workspace's tests.

use crate::generate::Diamond;
use crate::topology::{Link, NodeId, Topology};

/// A star on `n` nodes: node 1 is the hub, nodes `2..=n` are leaves.
pub(crate) fn star(n: usize) -> Topology {
    let nodes = (1..=n).map(NodeId::new).collect::<Vec<_>>();
    let links = nodes
        .iter()
        .skip(1)
        .map(|&leaf| Link::new(NodeId::ONE, leaf))
        .collect::<Vec<_>>();
    Topology::new(&nodes, &links).expect("a star is a simple graph")
}

/// The five-node diamond: server(1) - 2; 2 - 3; 2 - 4; 3 - client(5); 4 - client(5).
pub(crate) fn diamond() -> Topology {
    Diamond.topology()
}

/// Three nodes and two links, hub in the middle.
pub(crate) fn three_node_config() -> (Vec<NodeId>, Vec<Link>) {
    let nodes = (1..=3).map(NodeId::new).collect::<Vec<_>>();
    let links = vec![Link::new(nodes[0], nodes[1]), Link::new(nodes[1], nodes[2])];
    (nodes, links)
}
