use crate::{db::keys::NodeKey, structures::norm::Norm};

/// The rule by which a node was introduced to a proof graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The conclusion of the search.
    Root,

    /// One part of a split of a disjunctive input.
    OrSplit,

    /// One part of a split of a conjunctive output.
    AndSplit,

    /// The output of the parent, with an additional conjunct.
    WeakenOutput,

    /// The input of the parent, with an additional disjunct.
    StrengthenInput,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "ROOT"),
            Self::OrSplit => write!(f, "OR"),
            Self::AndSplit => write!(f, "AND"),
            Self::WeakenOutput => write!(f, "WO"),
            Self::StrengthenInput => write!(f, "SI"),
        }
    }
}

/// A node of a proof graph, i.e. a candidate sub-derivation.
///
/// The parent of a node follows from the node, and the node is a child of the parent.
/// Partners are the two parts of a split, and the partner relation is symmetric.
#[derive(Clone, Debug)]
pub struct DerivationNode {
    /// The norm to be derived.
    pub norm: Norm,

    /// The node from which this node was introduced, if the node is not the root.
    pub parent: Option<NodeKey>,

    /// The rule by which the node was introduced.
    pub operation: Operation,

    /// The other part of the split which introduced the node, if any.
    pub partner: Option<NodeKey>,

    /// Alternative (and partial) derivations of the node.
    pub children: Vec<NodeKey>,

    /// Whether the norm of the node was matched to some premise.
    pub premise: bool,
}

impl DerivationNode {
    pub fn new(norm: Norm, parent: Option<NodeKey>, operation: Operation) -> Self {
        DerivationNode {
            norm,
            parent,
            operation,
            partner: None,
            children: Vec::default(),
            premise: false,
        }
    }
}

/// The state of a node, derived from the node and its descendants.
///
/// The state of a node only moves forward: from unexpanded to expanded and open, and from either to closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// No rule has introduced a child of the node, and the node is not a premise.
    Unexpanded,

    /// The node has children, and some leaf below the node is not a premise.
    ExpandedOpen,

    /// The node is a premise, or every leaf below the node is a premise.
    Closed,
}

impl std::fmt::Display for NodeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unexpanded => write!(f, "Unexpanded"),
            Self::ExpandedOpen => write!(f, "ExpandedOpen"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}
