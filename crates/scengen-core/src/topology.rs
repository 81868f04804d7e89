//! Undirected scenario topologies. A [`Topology`] owns a fixed vertex set and the links between
//! its vertices, in the order they were added.

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;

use crate::server::{self, ServerError};

identifier!(NodeId, usize);

/// An undirected link between two nodes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new, serde::Serialize, serde::Deserialize,
)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
}

impl Link {
    /// Returns true if the link joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        self.a == x && self.b == y || self.a == y && self.b == x
    }

    /// Both endpoints, in the order they were declared.
    pub fn endpoints(&self) -> [NodeId; 2] {
        [self.a, self.b]
    }
}

/// The result of inspecting a topology's connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Connectivity {
    /// Every node is reachable from every other node.
    Connected,
    /// The topology falls apart into `components` pieces.
    Disconnected { components: usize },
}

impl Connectivity {
    pub fn is_connected(&self) -> bool {
        matches!(self, Connectivity::Connected)
    }
}

/// A simple undirected graph over a fixed set of nodes.
#[derive(Debug, Clone)]
pub struct Topology {
    graph: UnGraph<NodeId, Link>,
    id2idx: FxHashMap<NodeId, NodeIndex>,
}

impl Topology {
    /// Creates a topology from a list of nodes and links. This function returns an error if
    /// the given parts fail to produce a simple graph.
    ///
    /// Correctness properties:
    ///
    /// - Every node must have a unique ID.
    /// - Every link must have distinct endpoints in `nodes`.
    /// - For any two nodes, there must be at most one link between them.
    ///
    /// Unlike links, nodes need not be referenced by anything: isolated nodes are kept.
    pub fn new(nodes: &[NodeId], links: &[Link]) -> Result<Self, TopologyError> {
        let mut topology = Self::empty();
        for &id in nodes {
            let idx = topology.graph.add_node(id);
            if topology.id2idx.insert(id, idx).is_some() {
                // CORRECTNESS: Every node must have a unique ID.
                return Err(TopologyError::DuplicateNodeId(id));
            }
        }
        for &Link { a, b } in links {
            // CORRECTNESS: Every link must have distinct endpoints in `nodes`.
            if a == b {
                return Err(TopologyError::NodeAdjacentSelf(a));
            }
            let (Some(&i), Some(&j)) = (topology.id2idx.get(&a), topology.id2idx.get(&b)) else {
                let missing = if topology.id2idx.contains_key(&a) { b } else { a };
                return Err(TopologyError::UndeclaredNode(missing));
            };
            // CORRECTNESS: For any two nodes, there must be at most one link between them.
            if topology.graph.find_edge(i, j).is_some() {
                return Err(TopologyError::DuplicateLink { n1: a, n2: b });
            }
            topology.graph.add_edge(i, j, Link::new(a, b));
        }
        Ok(topology)
    }

    /// Creates a topology with nodes `1..=nr_nodes` and no links.
    pub(crate) fn sequential(nr_nodes: usize) -> Self {
        let mut topology = Self::empty();
        for id in (1..=nr_nodes).map(NodeId::new) {
            let idx = topology.graph.add_node(id);
            topology.id2idx.insert(id, idx);
        }
        topology
    }

    fn empty() -> Self {
        Self {
            graph: UnGraph::default(),
            id2idx: FxHashMap::default(),
        }
    }

    /// Adds a link between two existing, distinct, not yet adjacent nodes.
    ///
    /// PRECONDITIONS: generators only call this with node IDs they created and never offer the
    /// same pair twice.
    pub(crate) fn connect(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b, "self-loop on {a}");
        let (i, j) = (self.id2idx[&a], self.id2idx[&b]);
        debug_assert!(self.graph.find_edge(i, j).is_none(), "duplicate link {a}-{b}");
        self.graph.add_edge(i, j, Link::new(a, b));
    }

    /// Returns true if `a` and `b` are adjacent.
    pub fn contains_link(&self, a: NodeId, b: NodeId) -> bool {
        match (self.id2idx.get(&a), self.id2idx.get(&b)) {
            (Some(&i), Some(&j)) => self.graph.find_edge(i, j).is_some(),
            _ => false,
        }
    }

    /// The number of links incident to `id`, or `None` if the node does not exist.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.id2idx
            .get(&id)
            .map(|&idx| self.graph.edges(idx).count())
    }

    /// Counts connected components. The empty topology and single nodes count as connected.
    pub fn connectivity(&self) -> Connectivity {
        match algo::connected_components(&self.graph) {
            0 | 1 => Connectivity::Connected,
            components => Connectivity::Disconnected { components },
        }
    }

    /// Picks the node with the highest degree. See [`server::select_server`].
    pub fn select_server(&self) -> Result<NodeId, ServerError> {
        let nodes = self.nodes().copied().collect::<Vec<_>>();
        let links = self.links().copied().collect::<Vec<_>>();
        server::select_server(&nodes, &links)
    }

    delegate::delegate! {
        to self.graph {
            /// Nodes in creation order.
            #[call(node_weights)]
            pub fn nodes(&self) -> impl Iterator<Item = &NodeId>;

            /// Links in creation order.
            #[call(edge_weights)]
            pub fn links(&self) -> impl Iterator<Item = &Link>;

            #[call(node_count)]
            pub fn nr_nodes(&self) -> usize;

            #[call(edge_count)]
            pub fn nr_links(&self) -> usize;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Duplicate node ID {0}")]
    DuplicateNodeId(NodeId),

    #[error("Node {0} is connected to itself")]
    NodeAdjacentSelf(NodeId),

    #[error("Node {0} is not declared")]
    UndeclaredNode(NodeId),

    #[error("Duplicate links between {n1} and {n2}")]
    DuplicateLink { n1: NodeId, n2: NodeId },
}
