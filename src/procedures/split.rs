/*!
Splits of a disjunctive input, or of a conjunctive output.

An OR-split derives (Or(*X*), *o*) from (Or(*Y*), *o*) and (Or(*Z*), *o*), where *Y* and *Z* partition the operands *X*.
Dually, an AND-split derives (*i*, And(*X*)) from (*i*, And(*Y*)) and (*i*, And(*Z*)).

When applied to a node, a split introduces pairs of partnered children, one pair for each partition of the operands:
- Partitions are enumerated by the size *r* of the first part, from 1 to half the count of operands, and then by the (lexicographic) choice of operands for the first part.
  Both parts keep the order of operands.
- A partition is skipped if some existing child of the node has an input (output) equivalent to either part.
- After introducing a pair, each part is matched to the premises.
  If either part matches, alternatives to the pair are [pruned](crate::db::graph::ProofGraph::prune).
  And, if only one part matches, the split continues on the other part, in place of the node.
- No further pairs are introduced once some child of the node is a premise.

If no part of any pair matches a premise, every pair remains a child of the node.

A split does nothing to a premise, nor to a node whose input (output) is not a disjunction (conjunction).
In particular, a second split of a node which has been matched to a premise does nothing.
*/

use crate::{
    config::NormEquality,
    context::Context,
    db::{graph::Operation, keys::NodeKey},
    generic::combinations::Combinations,
    misc::log::targets::{self},
    structures::{formula::Formula, norm::Norm},
    types::err::ErrorKind,
};

#[derive(Clone, Copy)]
enum Split {
    Or,
    And,
}

impl Split {
    fn operation(self) -> Operation {
        match self {
            Self::Or => Operation::OrSplit,
            Self::And => Operation::AndSplit,
        }
    }

    fn target(self, norm: &Norm) -> &Formula {
        match self {
            Self::Or => &norm.input,
            Self::And => &norm.output,
        }
    }

    fn applies_to(self, formula: &Formula) -> bool {
        match self {
            Self::Or => formula.is_disjunction(),
            Self::And => formula.is_conjunction(),
        }
    }

    fn assemble(self, operands: Vec<Formula>) -> Formula {
        match self {
            Self::Or => Formula::or(operands),
            Self::And => Formula::and(operands),
        }
    }

    fn with_part(self, norm: &Norm, part: Formula) -> Norm {
        match self {
            Self::Or => Norm::new(part, norm.output.clone()),
            Self::And => Norm::new(norm.input.clone(), part),
        }
    }

    fn equality(self, context: &Context) -> NormEquality {
        match self {
            Self::Or => context.config.or_split_equality.value,
            Self::And => context.config.and_split_equality.value,
        }
    }

    fn target_log(self) -> &'static str {
        match self {
            Self::Or => targets::OR_SPLIT,
            Self::And => targets::AND_SPLIT,
        }
    }
}

impl Context {
    /// Splits the disjunctive input of a node.
    pub fn or_split(&mut self, key: NodeKey) -> Result<(), ErrorKind> {
        self.split(Split::Or, key)
    }

    /// Splits the conjunctive output of a node.
    pub fn and_split(&mut self, key: NodeKey) -> Result<(), ErrorKind> {
        self.split(Split::And, key)
    }

    fn split(&mut self, split: Split, key: NodeKey) -> Result<(), ErrorKind> {
        let mut pending = Some(key);
        while let Some(node) = pending.take() {
            pending = self.split_node(split, node)?;
        }
        Ok(())
    }

    /// Splits a node, returning the unmatched part of a split with exactly one part matched, if any.
    fn split_node(&mut self, split: Split, key: NodeKey) -> Result<Option<NodeKey>, ErrorKind> {
        if self.graph.is_premise(key)? {
            return Ok(None);
        }

        let norm = self.graph.norm(key)?.clone();
        let target = split.target(&norm);
        if !split.applies_to(target) {
            return Ok(None);
        }

        let operands = target.operands();
        let equality = split.equality(self);

        for size in 1..=operands.len() / 2 {
            for choice in Combinations::new(operands.len(), size) {
                if self.graph.has_premise_child(key)? {
                    return Ok(None);
                }

                let mut first_operands = Vec::with_capacity(size);
                let mut second_operands = Vec::with_capacity(operands.len() - size);
                for (index, operand) in operands.iter().enumerate() {
                    match choice.contains(&index) {
                        true => first_operands.push(operand.clone()),
                        false => second_operands.push(operand.clone()),
                    }
                }
                let first = split.assemble(first_operands);
                let second = split.assemble(second_operands);

                if self.has_equivalent_part(split, key, &first, &second)? {
                    continue;
                }

                let first_key =
                    self.graph
                        .attach(key, split.with_part(&norm, first), split.operation())?;
                let second_key =
                    self.graph
                        .attach(key, split.with_part(&norm, second), split.operation())?;
                self.graph.link_partners(first_key, second_key)?;
                self.counters.note_node(split.operation());
                self.counters.note_node(split.operation());

                let first_match = self.matches_premise(first_key, equality)?;
                let second_match = self.matches_premise(second_key, equality)?;

                if first_match {
                    self.graph.mark_premise(first_key)?;
                    self.counters.premise_matches += 1;
                }
                if second_match {
                    self.graph.mark_premise(second_key)?;
                    self.counters.premise_matches += 1;
                }

                if first_match || second_match {
                    log::trace!(target: split.target_log(),
                        "Matched split of {key:?} ({first_match}, {second_match})");
                    self.graph.prune(first_key)?;

                    return Ok(match (first_match, second_match) {
                        (true, true) => None,
                        (true, false) => Some(second_key),
                        (false, _) => Some(first_key),
                    });
                }
            }
        }

        log::trace!(target: split.target_log(), "No split of {key:?} matched");
        Ok(None)
    }

    /// Whether some child of the node has a target equivalent to either part of a split.
    fn has_equivalent_part(
        &self,
        split: Split,
        key: NodeKey,
        first: &Formula,
        second: &Formula,
    ) -> Result<bool, ErrorKind> {
        for child in self.graph.children(key)? {
            let existing = split.target(self.graph.norm(*child)?);
            if existing.equivalent(first) || existing.equivalent(second) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
