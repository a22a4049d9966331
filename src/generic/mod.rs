//! Generic structures, not specific to norms.

pub mod combinations;
