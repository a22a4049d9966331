//! Various procedures for building a proof graph.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//! The [search] procedure sequences the others.

pub mod candidates;
pub mod extension;
pub mod free_nodes;
pub mod matching;
pub mod search;
pub mod split;
