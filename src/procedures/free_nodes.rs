/*!
The free nodes of a proof graph, i.e. the nodes which remain to be derived.

- A leaf is free if and only if it is not a premise.
- For a node with children, the free nodes below each child are gathered, in order of the children.
  The node is then free itself if every child is free, in which case the node follows the nodes gathered.

So, a node whose children are all unresolved alternatives is free, and is found after its free descendants, while a node with some derived (or partially derived) child is not.

The check on children stops at the first child which is not free.
This means the order of children matters, and as [pruning](crate::db::graph::ProofGraph::prune) reorders children the free nodes of a graph depend on the history of the graph as well as its structure.

```rust
# use otter_norms::db::graph::{Operation, ProofGraph};
# use otter_norms::structures::{formula::Formula, norm::Norm};
let norm = |atom| Norm::new(Formula::atom(atom), Formula::atom(atom));
let mut graph = ProofGraph::default();

let root = graph.reset_with_root(norm(0));
assert_eq!(graph.free_nodes(), Ok(vec![root]));

let first = graph.attach(root, norm(1), Operation::WeakenOutput).unwrap();
let second = graph.attach(root, norm(2), Operation::WeakenOutput).unwrap();
assert_eq!(graph.free_nodes(), Ok(vec![first, second, root]));

graph.mark_premise(second).unwrap();
assert_eq!(graph.free_nodes(), Ok(vec![first]));
```
*/

use crate::{
    db::{graph::ProofGraph, keys::NodeKey},
    misc::log::targets::{self},
    types::err::GraphError,
};

impl ProofGraph {
    /// The free nodes of the graph.
    pub fn free_nodes(&self) -> Result<Vec<NodeKey>, GraphError> {
        let free = self.free_below(self.root()?)?;
        log::trace!(target: targets::FREE_NODES, "{} free nodes", free.len());
        Ok(free)
    }

    /// The free nodes at or below `key`.
    pub fn free_below(&self, key: NodeKey) -> Result<Vec<NodeKey>, GraphError> {
        let node = self.node(key)?;

        if node.children.is_empty() {
            return match node.premise {
                true => Ok(Vec::default()),
                false => Ok(vec![key]),
            };
        }

        let mut free = Vec::default();
        for child in &node.children {
            free.extend(self.free_below(*child)?);
        }

        for child in &node.children {
            if !free.contains(child) {
                return Ok(free);
            }
        }

        free.push(key);
        Ok(free)
    }

    /// Whether the node is currently among the free nodes of the graph.
    ///
    /// A node which is no longer part of the graph is not free.
    pub fn is_free(&self, key: NodeKey) -> Result<bool, GraphError> {
        Ok(self.free_nodes()?.contains(&key))
    }
}
