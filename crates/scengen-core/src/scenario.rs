//! This module defines scenario options ([`ScenarioOpts`]) and the routine that turns them into
//! [scenario instances](ScenarioInstance).

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clients::{self, SampleError};
use crate::generate::{Diamond, GenerateError, TopologyKind};
use crate::server::ServerError;
use crate::topology::{Connectivity, NodeId, Topology};

identifier!(InstanceId, usize);

/// Odd constant mixed into per-attempt seeds.
const ATTEMPT_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Scenario options.
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder)]
pub struct ScenarioOpts {
    /// Number of infrastructure nodes.
    #[builder(default = 10)]
    pub nr_agents: usize,
    /// Number of client nodes.
    #[builder(default = 3)]
    pub nr_clients: usize,
    /// Topology generator.
    #[builder(default)]
    pub topology: TopologyKind,
    /// Base seed. Instance `i` draws from a generator seeded with `seed + i`.
    #[builder(default)]
    pub seed: u64,
}

impl Default for ScenarioOpts {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScenarioOpts {
    /// The seed used for `attempt` of instance `id`. Attempt 0 uses `seed + id`.
    pub fn instance_seed(&self, id: InstanceId, attempt: u64) -> u64 {
        self.seed
            .wrapping_add(id.inner() as u64)
            .wrapping_add(attempt.wrapping_mul(ATTEMPT_STRIDE))
    }

    fn rng_for(&self, id: InstanceId, attempt: u64) -> StdRng {
        StdRng::seed_from_u64(self.instance_seed(id, attempt))
    }
}

/// A generated scenario: a topology, its server and its clients. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScenarioInstance {
    id: InstanceId,
    topology: Topology,
    clients: Vec<NodeId>,
    server: NodeId,
    connectivity: Connectivity,
}

impl ScenarioInstance {
    /// Generates instance `id` with its own seeded generator.
    pub fn generate(opts: &ScenarioOpts, id: InstanceId) -> Result<Self, Error> {
        Self::generate_attempt(opts, id, 0)
    }

    /// Generates instance `id` with the generator for the given attempt. Callers that want to
    /// reject an instance (e.g. a disconnected one) can move on to the next attempt.
    pub fn generate_attempt(
        opts: &ScenarioOpts,
        id: InstanceId,
        attempt: u64,
    ) -> Result<Self, Error> {
        let mut rng = opts.rng_for(id, attempt);
        Self::generate_with(opts, id, &mut rng)
    }

    /// Generates instance `id`, drawing all randomness from `rng`.
    ///
    /// Clients are sampled before the topology is built. Invalid options fail before anything
    /// is generated.
    pub fn generate_with<R>(
        opts: &ScenarioOpts,
        id: InstanceId,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        let (topology, clients, server) = match opts.topology {
            TopologyKind::Diamond => {
                debug!("Instance ID={id}: diamond topology, server and client are pinned");
                (Diamond.topology(), vec![Diamond::CLIENT], Diamond::SERVER)
            }
            kind => {
                let clients = clients::sample_clients(opts.nr_agents, opts.nr_clients, rng)?;
                let topology = kind.generate(opts.nr_agents, rng)?;
                let server = topology.select_server()?;
                (topology, clients, server)
            }
        };
        let connectivity = topology.connectivity();
        match connectivity {
            Connectivity::Connected => info!("Instance ID={id}: connected"),
            Connectivity::Disconnected { components } => {
                warn!("Instance ID={id}: disconnected ({components} components)")
            }
        }
        info!(
            "Instance ID={id}: server {server}, clients [{}]",
            itertools::join(&clients, ", ")
        );
        Ok(Self {
            id,
            topology,
            clients,
            server,
            connectivity,
        })
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Clients in the order they were drawn.
    pub fn clients(&self) -> &[NodeId] {
        self.clients.as_ref()
    }

    pub fn server(&self) -> NodeId {
        self.server
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

/// Generates instances `0..nr_instances`. Every instance is independent: an error in one does
/// not affect the others.
pub fn generate_batch(
    opts: &ScenarioOpts,
    nr_instances: usize,
) -> impl Iterator<Item = (InstanceId, Result<ScenarioInstance, Error>)> + '_ {
    (0..nr_instances).map(InstanceId::new).map(move |id| {
        let res = ScenarioInstance::generate(opts, id);
        if let Err(e) = &res {
            warn!("Instance ID={id}: {e}");
        }
        (id, res)
    })
}

/// Scenario generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid topology parameters.
    #[error("invalid topology parameters")]
    Generate(#[from] GenerateError),

    /// Invalid client parameters.
    #[error("invalid client parameters")]
    Sample(#[from] SampleError),

    /// No server could be selected.
    #[error(transparent)]
    Server(#[from] ServerError),
}

impl Error {
    /// Returns true if the error was caused by invalid options rather than by the generated
    /// topology.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::Generate(..) | Error::Sample(..))
    }
}
