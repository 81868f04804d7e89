//! This module defines the [`TopologyGenerator`] trait and the generators a scenario can be
//! built from.

mod diamond;
mod gnp;
mod scale_free;

use rand::Rng;

pub use diamond::Diamond;
pub use gnp::Gnp;
pub use scale_free::ScaleFree;

use crate::topology::Topology;

/// Edge probability used when none is configured.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// The trait that must be implemented by all topology generators.
pub trait TopologyGenerator {
    /// Builds a fresh topology, drawing all randomness from `rng`.
    fn generate<R>(&self, rng: &mut R) -> Topology
    where
        R: Rng + ?Sized;
}

impl<G: TopologyGenerator> TopologyGenerator for &G {
    fn generate<R>(&self, rng: &mut R) -> Topology
    where
        R: Rng + ?Sized,
    {
        (*self).generate(rng)
    }
}

/// The generator a scenario uses, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// A G(n, p) random graph.
    Gnp {
        /// Probability of including each possible link.
        probability: f64,
    },
    /// A Barabási–Albert preferential-attachment graph.
    ScaleFree {
        /// Links added with every new node.
        edges_per_node: usize,
    },
    /// The fixed five-node diamond with pinned server and client.
    Diamond,
}

impl Default for TopologyKind {
    fn default() -> Self {
        Self::Gnp {
            probability: DEFAULT_EDGE_PROBABILITY,
        }
    }
}

impl TopologyKind {
    /// Validates the parameters for `nr_nodes` nodes and generates a topology.
    ///
    /// [`TopologyKind::Diamond`] ignores `nr_nodes`.
    pub fn generate<R>(&self, nr_nodes: usize, rng: &mut R) -> Result<Topology, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let topology = match *self {
            TopologyKind::Gnp { probability } => Gnp::new(nr_nodes, probability)?.generate(rng),
            TopologyKind::ScaleFree { edges_per_node } => {
                ScaleFree::new(nr_nodes, edges_per_node)?.generate(rng)
            }
            TopologyKind::Diamond => Diamond.generate(rng),
        };
        Ok(topology)
    }
}

/// Invalid generator parameters.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A topology needs at least one node.
    #[error("node count must be positive")]
    NoNodes,

    /// The edge probability is NaN or outside `[0, 1]`.
    #[error("edge probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// Preferential attachment needs `1 <= edges_per_node < nr_nodes`.
    #[error("{edges_per_node} edges per node is invalid for {nr_nodes} nodes")]
    InvalidEdgesPerNode {
        /// Requested links per new node.
        edges_per_node: usize,
        /// Requested node count.
        nr_nodes: usize,
    },
}
