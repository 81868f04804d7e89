//! Configuration files.

pub use scengen_utils::*;
