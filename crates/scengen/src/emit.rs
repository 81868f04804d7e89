//! Writing scenario instances to disk. See [`ScenarioWriter`].

pub use scengen_emit::*;
