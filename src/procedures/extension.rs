/*!
Weakening outputs and strengthening inputs.

Output weakening derives (*i*, *o*) from (*i*, And(*o*, *c*)), and input strengthening derives (*i*, *o*) from (Or(*i*, *c*), *o*), for some candidate formula *c*.

When applied to a node, each candidate is tried in turn:
- A candidate is skipped if it is the identity of the extension (1 for outputs, 0 for inputs), if the extended norm is equivalent to the norm of the node, or if some child of the node has an equivalent norm.
- Otherwise, the extended norm is introduced as a child of the node and matched to the premises.
  The first match is marked as a premise, alternatives are [pruned](crate::db::graph::ProofGraph::prune), and no further candidates are tried.

Children which do not match remain as (unresolved) alternatives.
An extension does nothing to a premise, nor to a node with a premise child.
*/

use std::collections::HashMap;

use crate::{
    config::NormEquality,
    context::Context,
    db::{graph::Operation, keys::NodeKey},
    misc::log::targets::{self},
    structures::{formula::Formula, norm::Norm},
    types::err::ErrorKind,
};

#[derive(Clone, Copy)]
enum Extension {
    WeakenOutput,
    StrengthenInput,
}

impl Extension {
    fn operation(self) -> Operation {
        match self {
            Self::WeakenOutput => Operation::WeakenOutput,
            Self::StrengthenInput => Operation::StrengthenInput,
        }
    }

    fn skips(self, candidate: &Formula) -> bool {
        match self {
            Self::WeakenOutput => *candidate == Formula::Top,
            Self::StrengthenInput => *candidate == Formula::Bottom,
        }
    }

    fn extend(self, norm: &Norm, candidate: &Formula) -> Norm {
        match self {
            Self::WeakenOutput => Norm::new(
                norm.input.clone(),
                Formula::and([norm.output.clone(), candidate.clone()]),
            ),
            Self::StrengthenInput => Norm::new(
                Formula::or([norm.input.clone(), candidate.clone()]),
                norm.output.clone(),
            ),
        }
    }

    fn equality(self, context: &Context) -> NormEquality {
        match self {
            Self::WeakenOutput => context.config.weaken_equality.value,
            Self::StrengthenInput => context.config.strengthen_equality.value,
        }
    }
}

fn equivalent_norms(left: &Norm, right: &Norm) -> bool {
    left.input.equivalent(&right.input) && left.output.equivalent(&right.output)
}

/// The [signatures](Formula::signature) of the input and output of a norm.
fn norm_signature(norm: &Norm) -> (u64, u64) {
    (norm.input.signature(), norm.output.signature())
}

impl Context {
    /// Weakens the output of a node with each candidate, until some weakening matches a premise.
    ///
    /// Returns true if some weakening matched.
    pub fn weaken_output(&mut self, key: NodeKey, candidates: &[Formula]) -> Result<bool, ErrorKind> {
        self.apply_extension(Extension::WeakenOutput, key, candidates)
    }

    /// Strengthens the input of a node with each candidate, until some strengthening matches a premise.
    ///
    /// Returns true if some strengthening matched.
    pub fn strengthen_input(
        &mut self,
        key: NodeKey,
        candidates: &[Formula],
    ) -> Result<bool, ErrorKind> {
        self.apply_extension(Extension::StrengthenInput, key, candidates)
    }

    fn apply_extension(
        &mut self,
        extension: Extension,
        key: NodeKey,
        candidates: &[Formula],
    ) -> Result<bool, ErrorKind> {
        if self.graph.is_premise(key)? || self.graph.has_premise_child(key)? {
            return Ok(false);
        }

        let norm = self.graph.norm(key)?.clone();
        let equality = extension.equality(self);

        let own_signature = norm_signature(&norm);
        let mut children: HashMap<(u64, u64), Vec<NodeKey>> = HashMap::default();
        for child in self.graph.children(key)? {
            let signature = norm_signature(self.graph.norm(*child)?);
            children.entry(signature).or_default().push(*child);
        }

        for candidate in candidates {
            if extension.skips(candidate) {
                continue;
            }

            let extended = extension.extend(&norm, candidate);
            let signature = norm_signature(&extended);
            if signature == own_signature && equivalent_norms(&extended, &norm) {
                continue;
            }

            let mut duplicate = false;
            if let Some(similar) = children.get(&signature) {
                for child in similar {
                    if equivalent_norms(self.graph.norm(*child)?, &extended) {
                        duplicate = true;
                        break;
                    }
                }
            }
            if duplicate {
                continue;
            }

            let child = self.graph.attach(key, extended, extension.operation())?;
            self.counters.note_node(extension.operation());
            children.entry(signature).or_default().push(child);

            if self.matches_premise(child, equality)? {
                log::trace!(target: targets::EXTENSION, "{} of {key:?} matched", extension.operation());
                self.graph.mark_premise(child)?;
                self.counters.premise_matches += 1;
                self.graph.prune(child)?;
                return Ok(true);
            }
        }

        Ok(false)
    }
}
