//! Writes generated scenario instances as testbed input files.
//!
//! Each instance gets its own directory holding the topology script, one descriptor per client
//! pool and per node, the hardware and service catalogs, and a demand timeline per client pool.

#![warn(unreachable_pub, missing_debug_implementations)]

mod json;
mod ns;
mod opts;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use scengen_core::ScenarioInstance;

pub use opts::{DemandOpts, EmitOpts, HardwareCapacity, HardwareProfile, ServiceOpts, TrafficType};

/// Writes scenario instances below `root_dir`, one subdirectory per instance ID.
#[derive(Debug, typed_builder::TypedBuilder)]
pub struct ScenarioWriter {
    /// The directory in which to create instance directories.
    #[builder(setter(into))]
    pub root_dir: PathBuf,
    /// What to write.
    #[builder(default)]
    pub opts: EmitOpts,
}

impl ScenarioWriter {
    /// Writes all files of `instance` and returns the instance directory.
    ///
    /// This routine can fail due to IO errors, serialization errors, or a hardware profile
    /// name missing from the catalog.
    pub fn write(&self, instance: &ScenarioInstance) -> Result<PathBuf, Error> {
        self.check_profiles()?;
        let dir = self.root_dir.join(instance.id().to_string());
        let demand_dir = dir.join("demand");
        fs::create_dir_all(&demand_dir)?;

        write_file(&dir, "topology.ns", ns::translate_topology(instance, &self.opts))?;
        for &client in instance.clients() {
            let pool = json::translate_client_pool(client, &self.opts)?;
            write_file(&dir, &format!("clientPool{client}.json"), pool)?;
        }
        for &node in instance.topology().nodes() {
            write_file(&dir, &format!("node{node}.json"), json::translate_node(node)?)?;
        }
        write_file(
            &dir,
            "hardware-configurations.json",
            json::translate_hardware(&self.opts.hardware)?,
        )?;
        write_file(
            &dir,
            "service-configurations.json",
            json::translate_services(instance.server(), &self.opts.services)?,
        )?;
        // Every client pool sees the same timeline.
        let demand = json::translate_demand(&self.opts.services, &self.opts.demand)?;
        for &client in instance.clients() {
            write_file(&demand_dir, &format!("clientPool{client}.json"), &demand)?;
        }

        info!("Instance ID={}: wrote {}", instance.id(), dir.display());
        Ok(dir)
    }

    fn check_profiles(&self) -> Result<(), Error> {
        for name in [&self.opts.server_profile, &self.opts.node_profile] {
            if !self.opts.hardware.iter().any(|p| &p.name == name) {
                return Err(Error::UnknownHardwareProfile(name.clone()));
            }
        }
        Ok(())
    }
}

fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    let path = dir.join(name);
    debug!("writing {}", path.display());
    fs::write(path, contents)?;
    Ok(())
}

/// The error type for [ScenarioWriter::write].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node references a hardware profile that the catalog does not define.
    #[error("hardware profile {0:?} is not in the catalog")]
    UnknownHardwareProfile(String),

    /// Error serializing JSON.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
