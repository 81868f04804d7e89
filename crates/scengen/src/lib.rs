//! `scengen` generates synthetic scenarios for network experiments: a random topology, a
//! designated server, a set of client nodes, and the configuration files a testbed needs to
//! deploy services and replay client demand against them.

#![warn(unreachable_pub, missing_docs)]

pub mod core;
pub mod emit;
pub mod retry;
pub mod utils;
