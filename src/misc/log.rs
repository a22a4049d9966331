/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a search, and for extending the library.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [disjunctive input splits](crate::procedures::split)
    pub const OR_SPLIT: &str = "or_split";

    /// Logs related to [conjunctive output splits](crate::procedures::split)
    pub const AND_SPLIT: &str = "and_split";

    /// Logs related to [output weakening and input strengthening](crate::procedures::extension)
    pub const EXTENSION: &str = "extension";

    /// Logs related to [pruning](crate::db::graph::ProofGraph::prune)
    pub const PRUNE: &str = "prune";

    /// Logs related to [free nodes](crate::procedures::free_nodes)
    pub const FREE_NODES: &str = "free_nodes";

    /// Logs related to [candidate pools](crate::procedures::candidates)
    pub const COMPLETION: &str = "completion";

    /// Logs related to the [search](crate::procedures::search) as a whole
    pub const SEARCH: &str = "search";

    /// Logs related to [reading problems](crate::builder)
    pub const PARSE: &str = "parse";
}
