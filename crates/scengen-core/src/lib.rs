#![warn(unreachable_pub, missing_debug_implementations)]

//! The core scenario generator. This crate builds random network topologies, picks the
//! designated server and samples the client nodes of a [scenario instance](ScenarioInstance).
//! Turning an instance into files is left to the emitter.

#[macro_use]
mod ident;

pub mod clients;
pub mod generate;
pub mod scenario;
pub mod server;
pub mod topology;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use clients::{sample_clients, SampleError};
pub use generate::{Diamond, GenerateError, Gnp, ScaleFree, TopologyGenerator, TopologyKind};
pub use scenario::{generate_batch, Error, InstanceId, ScenarioInstance, ScenarioOpts};
pub use server::{select_server, ServerError};
pub use topology::{Connectivity, Link, NodeId, Topology, TopologyError};
