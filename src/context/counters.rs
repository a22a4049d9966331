use std::time::Duration;

use crate::db::graph::Operation;

/// Counts for various things which count, roughly.
///
/// Counts are reset at the start of each search.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of nodes introduced by OR-splits.
    pub or_split_nodes: usize,

    /// A count of nodes introduced by AND-splits.
    pub and_split_nodes: usize,

    /// A count of nodes introduced by weakening an output.
    pub weaken_nodes: usize,

    /// A count of nodes introduced by strengthening an input.
    pub strengthen_nodes: usize,

    /// A count of nodes matched to some premise.
    pub premise_matches: usize,

    /// The count of candidate formulas for inputs, and for outputs.
    pub candidates: (usize, usize),

    /// A count of rounds made by a search, see [search](crate::procedures::search).
    pub rounds: usize,

    /// The time taken during a search.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            or_split_nodes: 0,
            and_split_nodes: 0,
            weaken_nodes: 0,
            strengthen_nodes: 0,

            premise_matches: 0,
            candidates: (0, 0),
            rounds: 0,

            time: Duration::from_secs(0),
        }
    }
}

impl Counters {
    /// Notes a node introduced by `operation`.
    pub fn note_node(&mut self, operation: Operation) {
        match operation {
            Operation::Root => {}
            Operation::OrSplit => self.or_split_nodes += 1,
            Operation::AndSplit => self.and_split_nodes += 1,
            Operation::WeakenOutput => self.weaken_nodes += 1,
            Operation::StrengthenInput => self.strengthen_nodes += 1,
        }
    }

    /// A count of every node introduced by some rule.
    pub fn total_nodes(&self) -> usize {
        self.or_split_nodes + self.and_split_nodes + self.weaken_nodes + self.strengthen_nodes
    }
}
