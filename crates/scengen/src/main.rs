use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, error, info};
use scengen::{
    core::{InstanceId, ScenarioInstance, TopologyKind},
    emit::ScenarioWriter,
    retry,
    utils::{self, ScenarioConfig},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (JSON or Dhall); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of scenario instances
    #[arg(short = 'n', long)]
    instances: Option<usize>,

    /// Number of infrastructure nodes
    #[arg(short, long)]
    agents: Option<usize>,

    /// Number of client nodes
    #[arg(short = 'k', long)]
    clients: Option<usize>,

    /// Edge probability of a G(n, p) topology
    #[arg(short, long, conflicts_with_all = ["scale_free", "diamond"])]
    probability: Option<f64>,

    /// Build a scale-free topology, attaching each new node with this many links
    #[arg(long, conflicts_with = "diamond")]
    scale_free: Option<usize>,

    /// Use the fixed five-node diamond topology
    #[arg(long)]
    diamond: bool,

    /// Random seed; drawn from entropy and logged when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Regenerate disconnected instances
    #[arg(long)]
    require_connected: bool,

    /// Attempts per instance with --require-connected
    #[arg(long, default_value_t = 100)]
    max_attempts: u64,
}

impl Args {
    fn into_config(self) -> anyhow::Result<ScenarioConfig> {
        let mut config = match &self.config {
            Some(path) => utils::read_config(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => ScenarioConfig::default(),
        };
        if let Some(n) = self.instances {
            config.nr_instances = n;
        }
        if let Some(n) = self.agents {
            config.nr_agents = n;
        }
        if let Some(n) = self.clients {
            config.nr_clients = n;
        }
        if let Some(probability) = self.probability {
            config.topology = TopologyKind::Gnp { probability };
        }
        if let Some(edges_per_node) = self.scale_free {
            config.topology = TopologyKind::ScaleFree { edges_per_node };
        }
        if self.diamond {
            config.topology = TopologyKind::Diamond;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.out_dir.is_some() {
            config.out_dir = self.out_dir;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let (require_connected, max_attempts) = (args.require_connected, args.max_attempts);
    let config = args.into_config()?;

    let seed = config.seed.unwrap_or_else(|| {
        let seed = rand::random();
        info!("No seed configured, using {seed}");
        seed
    });
    let opts = config.scenario_opts(seed);
    let writer = ScenarioWriter::builder()
        .root_dir(config.out_dir())
        .opts(config.emit.clone())
        .build();

    let instances = (0..config.nr_instances).map(InstanceId::new).map(|id| {
        let res = if require_connected {
            retry::generate_connected(&opts, id, max_attempts).map_err(anyhow::Error::from)
        } else {
            ScenarioInstance::generate(&opts, id).map_err(anyhow::Error::from)
        };
        (id, res)
    });
    let nr_failed = write_all(&writer, instances);

    info!(
        "Generated {} of {} instances in {}",
        config.nr_instances - nr_failed,
        config.nr_instances,
        config.out_dir().display()
    );
    anyhow::ensure!(nr_failed == 0, "{nr_failed} instances failed");
    Ok(())
}

/// Writes every successfully generated instance and returns the number of instances that
/// failed to generate or to write. A failure never stops the remaining instances.
fn write_all<I>(writer: &ScenarioWriter, instances: I) -> usize
where
    I: IntoIterator<Item = (InstanceId, anyhow::Result<ScenarioInstance>)>,
{
    let mut nr_failed = 0;
    for (id, res) in instances {
        let res = res.and_then(|instance| {
            writer
                .write(&instance)
                .context("failed to write instance files")
        });
        match res {
            Ok(dir) => debug!("Instance ID={id}: wrote {}", dir.display()),
            Err(e) => {
                error!("Instance ID={id}: {e:#}");
                nr_failed += 1;
            }
        }
    }
    nr_failed
}
