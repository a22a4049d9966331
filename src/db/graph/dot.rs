//! Export of a proof graph in the [DOT](https://graphviz.org/doc/info/lang.html) language.
//!
//! Each node is labelled with its norm, each edge with the rule which introduced the child, and premises are filled.

use std::collections::HashMap;

use crate::db::{atom::AtomDB, graph::Operation};

use super::ProofGraph;

/// The weight of a node of an exported graph.
struct DotNode {
    label: String,
    premise: bool,
}

impl std::fmt::Display for DotNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl ProofGraph {
    fn node_format(node: &DotNode) -> String {
        match node.premise {
            true => "shape=box,style=filled,fillcolor=palegreen".to_string(),
            false => "shape=box".to_string(),
        }
    }

    /// The graph reachable from the root, in the DOT language.
    pub fn dot(&self, atom_db: &AtomDB) -> String {
        let mut export = petgraph::Graph::<DotNode, Operation>::new();
        let mut indicies = HashMap::new();

        for key in self.reachable() {
            let Ok(node) = self.node(key) else {
                continue;
            };
            let index = export.add_node(DotNode {
                label: node.norm.display(atom_db).to_string(),
                premise: node.premise,
            });
            indicies.insert(key, index);

            if let Some(parent_index) = node.parent.and_then(|parent| indicies.get(&parent)) {
                export.add_edge(*parent_index, index, node.operation);
            }
        }

        let d = petgraph::dot::Dot::with_attr_getters(
            &export,
            &[],
            &|_, e| match e.weight() {
                Operation::OrSplit | Operation::AndSplit => "style=solid".to_string(),
                _ => "style=dashed".to_string(),
            },
            &|_, (_, node)| Self::node_format(node),
        );
        format!("{}", d)
    }
}
