//! Client sampling. Clients are drawn uniformly from the agent population, independently of
//! the topology.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::topology::NodeId;

/// Draws `count` distinct node IDs from `1..=population`, in the order they were first drawn.
///
/// Uses rejection sampling. The arguments are checked before the first draw, so a request that
/// could never be satisfied fails instead of looping.
pub fn sample_clients<R>(
    population: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<NodeId>, SampleError>
where
    R: Rng + ?Sized,
{
    if population == 0 {
        return Err(SampleError::EmptyPopulation);
    }
    if count > population {
        return Err(SampleError::TooManyClients { count, population });
    }
    let mut seen = FxHashSet::default();
    let mut clients = Vec::with_capacity(count);
    while clients.len() < count {
        let client = NodeId::new(rng.gen_range(1..=population));
        if seen.insert(client) {
            clients.push(client);
        }
    }
    Ok(clients)
}

/// Invalid sampling arguments.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("population must be positive")]
    EmptyPopulation,

    #[error("cannot draw {count} distinct clients from {population} nodes")]
    TooManyClients { count: usize, population: usize },
}
