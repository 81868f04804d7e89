use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::generate::{GenerateError, TopologyGenerator};
use crate::topology::{NodeId, Topology};

/// A Barabási–Albert preferential-attachment graph.
///
/// The first `edges_per_node + 1` nodes form a complete graph. Every later node links to
/// `edges_per_node` distinct earlier nodes, each picked with probability proportional to its
/// current degree. The result is always connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFree {
    nr_nodes: usize,
    edges_per_node: usize,
}

impl ScaleFree {
    /// Creates a generator. Requires `1 <= edges_per_node < nr_nodes`.
    pub fn new(nr_nodes: usize, edges_per_node: usize) -> Result<Self, GenerateError> {
        if nr_nodes == 0 {
            return Err(GenerateError::NoNodes);
        }
        if edges_per_node == 0 || edges_per_node >= nr_nodes {
            return Err(GenerateError::InvalidEdgesPerNode {
                edges_per_node,
                nr_nodes,
            });
        }
        Ok(Self {
            nr_nodes,
            edges_per_node,
        })
    }
}

impl TopologyGenerator for ScaleFree {
    fn generate<R>(&self, rng: &mut R) -> Topology
    where
        R: Rng + ?Sized,
    {
        let m = self.edges_per_node;
        let mut topology = Topology::sequential(self.nr_nodes);
        let ids = topology.nodes().copied().collect::<Vec<NodeId>>();
        let (seed, rest) = ids.split_at(m + 1);
        // Every node appears here once per incident link, so a uniform pick is degree-weighted.
        let mut endpoints = Vec::new();
        for (&a, &b) in seed.iter().tuple_combinations() {
            topology.connect(a, b);
            endpoints.extend([a, b]);
        }
        for &new in rest {
            let mut targets = Vec::with_capacity(m);
            while targets.len() < m {
                // `endpoints` holds at least m + 1 distinct nodes.
                let Some(&candidate) = endpoints.choose(rng) else {
                    break;
                };
                if !targets.contains(&candidate) {
                    targets.push(candidate);
                }
            }
            for target in targets {
                topology.connect(new, target);
                endpoints.extend([new, target]);
            }
        }
        topology
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn invalid_parameters_fail() {
        assert!(matches!(ScaleFree::new(0, 1), Err(GenerateError::NoNodes)));
        assert!(matches!(
            ScaleFree::new(5, 0),
            Err(GenerateError::InvalidEdgesPerNode { .. })
        ));
        assert!(matches!(
            ScaleFree::new(5, 5),
            Err(GenerateError::InvalidEdgesPerNode { .. })
        ));
    }

    #[test]
    fn link_count_matches_model() -> anyhow::Result<()> {
        let (n, m) = (30, 2);
        let mut rng = StdRng::seed_from_u64(1);
        let topology = ScaleFree::new(n, m)?.generate(&mut rng);
        // Seed clique plus m links for each later node.
        let expected = (m + 1) * m / 2 + (n - m - 1) * m;
        assert_eq!(topology.nr_nodes(), n);
        assert_eq!(topology.nr_links(), expected);
        assert!(topology.connectivity().is_connected());
        Ok(())
    }

    #[test]
    fn every_late_node_has_min_degree() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(9);
        let topology = ScaleFree::new(25, 3)?.generate(&mut rng);
        for &id in topology.nodes() {
            assert!(topology.degree(id).unwrap_or_default() >= 3, "node {id}");
        }
        Ok(())
    }

    #[test]
    fn attachment_prefers_high_degree() -> anyhow::Result<()> {
        let (n, m) = (2000, 2);
        let mut rng = StdRng::seed_from_u64(4);
        let topology = ScaleFree::new(n, m)?.generate(&mut rng);
        let mean_degree = |ids: std::ops::RangeInclusive<usize>| {
            let len = ids.clone().count() as f64;
            let total = ids
                .map(|i| topology.degree(NodeId::new(i)).unwrap_or_default())
                .sum::<usize>();
            total as f64 / len
        };
        // Seed-clique nodes collect links from every later node; the last nodes only have the
        // m links they brought. Degree-weighted picks put the seed near m * sqrt(n / (m + 1))
        // (about 50); uniform picks would leave it near m * (1 + ln(n / (m + 1))) (about 15).
        let seed = mean_degree(1..=m + 1);
        let late = mean_degree(n - 49..=n);
        assert!(seed > 25.0, "seed mean {seed}");
        assert!(seed > 8.0 * late, "seed mean {seed}, late mean {late}");
        Ok(())
    }

    #[test]
    fn minimal_graph_is_single_link() -> anyhow::Result<()> {
        let mut rng = StdRng::seed_from_u64(0);
        let topology = ScaleFree::new(2, 1)?.generate(&mut rng);
        assert_eq!(topology.nr_links(), 1);
        Ok(())
    }
}
