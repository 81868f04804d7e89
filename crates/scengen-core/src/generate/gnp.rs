use itertools::Itertools;
use rand::Rng;

use crate::generate::{GenerateError, TopologyGenerator};
use crate::topology::{NodeId, Topology};

/// A G(n, p) random graph: every unordered pair of distinct nodes is linked independently with
/// probability `p`.
///
/// Nodes are labeled `1..=n`. Pairs are visited in lexicographic order, so a seeded RNG always
/// produces the same links in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gnp {
    nr_nodes: usize,
    probability: f64,
}

impl Gnp {
    /// Creates a generator for `nr_nodes >= 1` nodes and a probability in `[0, 1]`.
    pub fn new(nr_nodes: usize, probability: f64) -> Result<Self, GenerateError> {
        if nr_nodes == 0 {
            return Err(GenerateError::NoNodes);
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenerateError::InvalidProbability(probability));
        }
        Ok(Self {
            nr_nodes,
            probability,
        })
    }
}

impl TopologyGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Topology
    where
        R: Rng + ?Sized,
    {
        let mut topology = Topology::sequential(self.nr_nodes);
        let ids = topology.nodes().copied().collect::<Vec<NodeId>>();
        for (&a, &b) in ids.iter().tuple_combinations() {
            if rng.gen_bool(self.probability) {
                topology.connect(a, b);
            }
        }
        topology
    }
}
