//! Utilities for configuring scenario generation.

#![warn(unreachable_pub, missing_debug_implementations, missing_docs)]

use std::path::{Path, PathBuf};

use scengen_core::{ScenarioOpts, TopologyKind};
use scengen_emit::EmitOpts;

/// Reads a [`ScenarioConfig`] from a file in JSON or Dhall format.
pub fn read_config(path: impl AsRef<Path>) -> Result<ScenarioConfig, Error> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let config: ScenarioConfig = match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        Some("dhall") => serde_dhall::from_str(&contents).parse().map_err(Box::new)?,
        _ => return Err(Error::UnknownFileType(path.as_ref().into())),
    };
    Ok(config)
}

/// A batch configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of instances in the batch.
    pub nr_instances: usize,
    /// Number of infrastructure nodes.
    pub nr_agents: usize,
    /// Number of client nodes.
    pub nr_clients: usize,
    /// Topology generator.
    pub topology: TopologyKind,
    /// Base seed. When absent, the caller picks one.
    pub seed: Option<u64>,
    /// Output directory. Defaults to `scenario/random-network/d<nr_agents>`.
    pub out_dir: Option<PathBuf>,
    /// Emission options.
    pub emit: EmitOpts,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let opts = ScenarioOpts::default();
        Self {
            nr_instances: 1,
            nr_agents: opts.nr_agents,
            nr_clients: opts.nr_clients,
            topology: opts.topology,
            seed: None,
            out_dir: None,
            emit: EmitOpts::default(),
        }
    }
}

impl ScenarioConfig {
    /// Scenario options for this configuration with a resolved seed.
    pub fn scenario_opts(&self, seed: u64) -> ScenarioOpts {
        ScenarioOpts::builder()
            .nr_agents(self.nr_agents)
            .nr_clients(self.nr_clients)
            .topology(self.topology)
            .seed(seed)
            .build()
    }

    /// The configured output directory, or the default derived from the agent count.
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| {
            PathBuf::from(format!("scenario/random-network/d{}", self.nr_agents))
        })
    }
}

/// Error kinds for configuration files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown file type.
    #[error("unknown file type: {0}")]
    UnknownFileType(PathBuf),

    /// Error deserializing Dhall.
    #[error("Dhall error")]
    Dhall(#[from] Box<serde_dhall::Error>),

    /// Error deserializing JSON.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
