/*!
The proof graph: a rooted tree of [derivation nodes](DerivationNode), with partner links between the two parts of each split.

Nodes are stored in an arena and accessed by [NodeKey]s.
The children of a node are a list of keys, while the parent and partner of a node are optional keys.

The graph maintains that:
- The root is the only node without a parent, and every other node is a child of its parent.
- Partners are children of the same parent, and the partner relation is symmetric.
- A premise has no children.

# Pruning

Once some node is matched to a premise, the alternatives to the node are discarded.
That is, the children of the parent of the node become the node together with its partner (if any), and the parent is then pruned in turn, until the root is reached.

```rust
# use otter_norms::db::graph::{ProofGraph, Operation};
# use otter_norms::structures::{formula::Formula, norm::Norm};
let [a, b, x] = [0, 1, 2].map(Formula::atom);
let norm = |input: &Formula| Norm::new(input.clone(), x.clone());

let mut graph = ProofGraph::default();
let root = graph.reset_with_root(norm(&Formula::or([a.clone(), b.clone()])));

let first = graph.attach(root, norm(&a), Operation::OrSplit).unwrap();
let second = graph.attach(root, norm(&b), Operation::OrSplit).unwrap();
graph.link_partners(first, second).unwrap();

let alternative = graph.attach(root, norm(&Formula::Top), Operation::StrengthenInput).unwrap();
assert_eq!(graph.children(root).unwrap().len(), 3);

graph.mark_premise(second).unwrap();
graph.prune(second).unwrap();

assert_eq!(graph.children(root).unwrap(), &[second, first]);
assert!(graph.node(alternative).is_err());
```
*/

pub mod dot;
mod node;

pub use node::{DerivationNode, NodeState, Operation};

use slotmap::SlotMap;

use crate::{
    db::keys::NodeKey,
    misc::log::targets::{self},
    structures::norm::Norm,
    types::err::GraphError,
};

/// The proof graph.
#[derive(Clone, Debug, Default)]
pub struct ProofGraph {
    /// The nodes of the graph, including the root.
    nodes: SlotMap<NodeKey, DerivationNode>,

    /// The root of the graph, if the graph has been given a root.
    root: Option<NodeKey>,
}

impl ProofGraph {
    /// Discards every node of the graph, and sets a fresh root with the given norm.
    pub fn reset_with_root(&mut self, norm: Norm) -> NodeKey {
        self.nodes.clear();
        let root = self
            .nodes
            .insert(DerivationNode::new(norm, None, Operation::Root));
        self.root = Some(root);
        root
    }

    /// The root of the graph.
    pub fn root(&self) -> Result<NodeKey, GraphError> {
        self.root.ok_or(GraphError::NoRoot)
    }

    /// A count of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, key: NodeKey) -> Result<&DerivationNode, GraphError> {
        self.nodes.get(key).ok_or(GraphError::MissingNode(key))
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Result<&mut DerivationNode, GraphError> {
        self.nodes.get_mut(key).ok_or(GraphError::MissingNode(key))
    }

    /// The norm of a node.
    pub fn norm(&self, key: NodeKey) -> Result<&Norm, GraphError> {
        Ok(&self.node(key)?.norm)
    }

    /// The children of a node.
    pub fn children(&self, key: NodeKey) -> Result<&[NodeKey], GraphError> {
        Ok(&self.node(key)?.children)
    }

    pub fn is_premise(&self, key: NodeKey) -> Result<bool, GraphError> {
        Ok(self.node(key)?.premise)
    }

    /// Whether some child of the node is a premise.
    pub fn has_premise_child(&self, key: NodeKey) -> Result<bool, GraphError> {
        for child in self.children(key)? {
            if self.is_premise(*child)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Adds a node with the given norm as the last child of `parent`.
    pub fn attach(
        &mut self,
        parent: NodeKey,
        norm: Norm,
        operation: Operation,
    ) -> Result<NodeKey, GraphError> {
        self.node(parent)?;
        let child = self
            .nodes
            .insert(DerivationNode::new(norm, Some(parent), operation));
        self.node_mut(parent)?.children.push(child);
        Ok(child)
    }

    /// Records `a` and `b` as partners of one another.
    pub fn link_partners(&mut self, a: NodeKey, b: NodeKey) -> Result<(), GraphError> {
        self.node_mut(a)?.partner = Some(b);
        self.node_mut(b)?.partner = Some(a);
        Ok(())
    }

    /// Marks the node as a premise, and discards any children of the node.
    pub fn mark_premise(&mut self, key: NodeKey) -> Result<(), GraphError> {
        self.node_mut(key)?.premise = true;
        self.clear_children(key)
    }

    /// Discards the children of a node, together with everything below the children.
    pub fn clear_children(&mut self, key: NodeKey) -> Result<(), GraphError> {
        let children = std::mem::take(&mut self.node_mut(key)?.children);
        for child in children {
            self.discard(child);
        }
        Ok(())
    }

    /// Prunes the alternatives to a node, and then to each ancestor of the node.
    ///
    /// The children of the parent of the node are replaced with the node followed by its partner (if any), and any other child of the parent is discarded.
    /// If the parent is not the root, the parent is then pruned.
    pub fn prune(&mut self, key: NodeKey) -> Result<(), GraphError> {
        let mut current = key;

        while let Some(parent) = self.node(current)?.parent {
            let partner = self.node(current)?.partner;
            let mut kept = vec![current];
            kept.extend(partner);

            let previous = std::mem::replace(&mut self.node_mut(parent)?.children, kept);
            let mut discarded = 0;
            for child in previous {
                if child != current && Some(child) != partner {
                    self.discard(child);
                    discarded += 1;
                }
            }
            log::trace!(target: targets::PRUNE, "Pruned {discarded} alternatives of {parent:?}");

            current = parent;
        }

        Ok(())
    }

    /// Removes a node and everything below the node from the graph.
    ///
    /// The node is not removed from the children of its parent.
    fn discard(&mut self, key: NodeKey) {
        let mut stack = vec![key];
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.remove(key) {
                stack.extend(node.children);
            }
        }
    }

    /// The state of a node.
    pub fn state(&self, key: NodeKey) -> Result<NodeState, GraphError> {
        let node = self.node(key)?;
        if node.premise {
            return Ok(NodeState::Closed);
        }
        if node.children.is_empty() {
            return Ok(NodeState::Unexpanded);
        }
        for child in &node.children {
            match self.state(*child)? {
                NodeState::Closed => {}
                NodeState::Unexpanded | NodeState::ExpandedOpen => {
                    return Ok(NodeState::ExpandedOpen);
                }
            }
        }
        Ok(NodeState::Closed)
    }

    /// The nodes reachable from the root, in pre-order.
    pub fn reachable(&self) -> Vec<NodeKey> {
        let mut order = Vec::default();
        let mut stack: Vec<NodeKey> = self.root.into_iter().collect();
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.get(key) {
                order.push(key);
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// The premise nodes reachable from the root, in pre-order.
    pub fn premise_nodes(&self) -> Vec<NodeKey> {
        self.reachable()
            .into_iter()
            .filter(|key| self.nodes.get(*key).is_some_and(|node| node.premise))
            .collect()
    }
}
