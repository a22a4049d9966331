//! Databases for holding information relevant to a search.
//!
//!   - [The atom database](crate::db::atom)
//!     + The atoms of a context, and their external names.
//!   - [The proof graph](crate::db::graph)
//!     + The derivation nodes built during a search, each accessed by a [NodeKey](keys::NodeKey). \
//!       From an external perspective there are two important kinds of node:
//!       * Premises \
//!         Nodes whose norm was matched to some premise of the context.
//!       * Free nodes \
//!         Nodes which remain to be derived, see [free_nodes](crate::procedures::free_nodes).

pub mod atom;
pub mod graph;
pub mod keys;
