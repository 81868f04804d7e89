//! Caller-side retries for scenarios that must be connected. The core reports disconnected
//! topologies but never rejects them.

use log::debug;
use scengen_core::{Error, InstanceId, ScenarioInstance, ScenarioOpts};

/// Generates instance `id`, moving on to the next attempt seed while the topology is
/// disconnected or has no server. Invalid options fail immediately.
pub fn generate_connected(
    opts: &ScenarioOpts,
    id: InstanceId,
    max_attempts: u64,
) -> Result<ScenarioInstance, RetryError> {
    for attempt in 0..max_attempts {
        match ScenarioInstance::generate_attempt(opts, id, attempt) {
            Ok(instance) if instance.connectivity().is_connected() => return Ok(instance),
            Ok(_) => debug!("Instance ID={id}: attempt {attempt} is disconnected"),
            Err(e @ Error::Server(..)) => debug!("Instance ID={id}: attempt {attempt}: {e}"),
            Err(e) => return Err(e.into()),
        }
    }
    Err(RetryError::Exhausted { id, max_attempts })
}

/// The error type for [generate_connected].
#[derive(Debug, thiserror::Error)]
pub enum RetryError {
    /// Generation itself failed.
    #[error(transparent)]
    Scenario(#[from] Error),

    /// Every attempt produced a disconnected topology.
    #[error("instance {id}: no connected topology after {max_attempts} attempts")]
    Exhausted {
        /// The instance.
        id: InstanceId,
        /// Attempts made.
        max_attempts: u64,
    },
}
