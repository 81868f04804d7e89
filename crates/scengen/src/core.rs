//! Topology generation, server selection and client sampling. The most common entry point is
//! [generate_batch()], which turns [scenario options](ScenarioOpts) into
//! [scenario instances](ScenarioInstance).

pub use scengen_core::*;
