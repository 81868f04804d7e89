use rand::Rng;

use crate::generate::TopologyGenerator;
use crate::topology::{NodeId, Topology};

/// The fixed five-node diamond:
///
/// ```text
///              / - 3 - \
/// server(1) - 2         client(5)
///              \ - 4 - /
/// ```
///
/// The server and the client are part of the shape, so scenarios built on it do not select or
/// sample them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diamond;

impl Diamond {
    pub const SERVER: NodeId = NodeId::new(1);
    pub const CLIENT: NodeId = NodeId::new(5);

    pub fn topology(&self) -> Topology {
        let mut topology = Topology::sequential(5);
        let id = NodeId::new;
        for (a, b) in [(1, 2), (2, 3), (2, 4), (3, 5), (4, 5)] {
            topology.connect(id(a), id(b));
        }
        topology
    }
}

impl TopologyGenerator for Diamond {
    fn generate<R>(&self, _rng: &mut R) -> Topology
    where
        R: Rng + ?Sized,
    {
        self.topology()
    }
}
