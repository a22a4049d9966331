slotmap::new_key_type! {
    /// A key to access a derivation node stored in the [proof graph](crate::db::graph::ProofGraph).
    ///
    /// Keys are stable for the lifetime of a node: a node discarded by pruning releases its key, and the key does not identify any later node.
    pub struct NodeKey;
}
