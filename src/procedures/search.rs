//! Searches for a derivation of the conclusion of a context from its premises.
//!
//! # Overview
//!
//! A search builds a [proof graph](crate::db::graph) backwards from the conclusion, in phases:
//!
//! ```none
//! normalize ──> or-split ──> and-split ──> candidates ──> weaken / strengthen ──> finalize
//!                   │            │                               │
//!                   └────────────┴──────── no free nodes ────────┴──────────────> proved
//! ```
//!
//! 1. The conclusion is normalized, with input in disjunctive normal form and output in conjunctive normal form, and becomes the root of the graph.
//!    If the root matches a premise (on the equality used for weakening), the search is complete.
//! 2. The root is [OR-split](crate::procedures::split).
//! 3. Each [free node](crate::procedures::free_nodes) is AND-split.
//! 4. If free nodes remain, and completion is [configured](crate::config::Config::completion), a [candidate pool](crate::procedures::candidates) is built and each free node has its output [weakened](crate::procedures::extension), and then its input strengthened.
//! 5. If free nodes remain, each is in turn marked as a premise and noted as missing.
//!
//! Within the third and fourth phase nodes are taken from the free nodes found at the start of the phase, and a node is skipped if it is no longer free when reached.
//! For example, if an AND-split of some child of a node completes the child, the node is no longer free, and is not split in turn.
//!
//! Phases do not backtrack: once some split or extension of a node matches a premise, alternatives to the node are pruned and remain pruned.
//!
//! In the fifth phase, the missing premise is always the last free node, i.e. the deepest open ancestor of some free leaf.
//! Marking the node as a premise prunes alternatives to the node, and so the missing premises complete the graph.
//!
//! # Rounds
//!
//! As phases commit to the first split which matches, a search from more premises may take a different path, and find a different node missing.
//! So, if a round of the phases misses some premises, the missing premises are added (temporarily) to the premises and a further round is made, until some round derives the conclusion.
//! The missing premises of a search are those of every round, in the order found, and the proof graph is that of the final round.
//!
//! Each round adds premises distinct from every earlier premise, and these are built from a finite stock of formulas, so some round derives the conclusion.
//! Then, as a search is deterministic, adding the missing premises to the context (in order) and searching again results in a derivation.
//!
//! # Example
//!
//! ```rust
//! # use otter_norms::config::Config;
//! # use otter_norms::context::Context;
//! # use otter_norms::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let conclusion = the_context.norm_from_string("(a, x)").unwrap();
//! the_context.set_conclusion(conclusion);
//!
//! assert_eq!(the_context.search(), Ok(Report::Unproved));
//! assert_eq!(the_context.missing_premises().unwrap().len(), 1);
//!
//! let premise = the_context.norm_from_string("(a, x)").unwrap();
//! the_context.add_premise(premise);
//!
//! assert_eq!(the_context.search(), Ok(Report::Proved));
//! assert!(the_context.missing_premises().is_err());
//! ```

use crate::{
    context::{Context, ContextState, Counters},
    misc::log::targets::{self},
    procedures::candidates::CandidatePool,
    reports::Report,
    structures::norm::Norm,
    types::err::{ErrorKind, SearchError},
};

impl Context {
    /// Searches for a derivation of the conclusion from the premises.
    ///
    /// Any previous proof graph is discarded.
    pub fn search(&mut self) -> Result<Report, ErrorKind> {
        let conclusion = match &self.conclusion {
            Some(conclusion) => conclusion.clone(),
            None => return Err(SearchError::NoConclusion.into()),
        };

        let start = std::time::Instant::now();
        self.state = ContextState::Searching;
        self.counters = Counters::default();
        self.missing.clear();

        let given = self.premises.len();
        let outcome = self.derive_in_rounds(&conclusion);
        self.counters.time = start.elapsed();

        self.conclude(given, outcome)
    }

    /// Restores the premises given to the context, and sets the state of the context from the outcome of a search.
    fn conclude(&mut self, given: usize, outcome: Result<bool, ErrorKind>) -> Result<Report, ErrorKind> {
        self.premises.truncate(given);

        match outcome {
            Ok(true) => self.state = ContextState::Proved,
            Ok(false) => self.state = ContextState::Unproved,
            Err(e) => {
                log::info!(target: targets::SEARCH, "Search failed: {e}");
                self.missing.clear();
                self.state = ContextState::Input;
                return Err(e);
            }
        }

        log::info!(target: targets::SEARCH, "Search complete: {}", self.state);
        Ok(self.report())
    }

    /// Derives `conclusion`, with the missing premises of each round added to the premises of the following round.
    ///
    /// Returns true if the first round derived the conclusion.
    fn derive_in_rounds(&mut self, conclusion: &Norm) -> Result<bool, ErrorKind> {
        loop {
            self.counters.rounds += 1;
            let missing = self.derive(conclusion.clone())?;
            if missing.is_empty() {
                return Ok(self.missing.is_empty());
            }

            log::info!(target: targets::SEARCH,
                "Round {} missed {} premises", self.counters.rounds, missing.len());
            self.premises.extend(missing.iter().cloned());
            self.missing.extend(missing);
        }
    }

    /// Builds the proof graph for `conclusion`, returning the premises missing from the graph.
    fn derive(&mut self, conclusion: Norm) -> Result<Vec<Norm>, ErrorKind> {
        let root = self.graph.reset_with_root(conclusion.normalized());
        log::info!(target: targets::SEARCH, "Root: {}", self.graph.norm(root)?.display(&self.atom_db));

        if self.matches_premise(root, self.config.weaken_equality.value)? {
            self.graph.mark_premise(root)?;
            self.counters.premise_matches += 1;
            return Ok(Vec::default());
        }

        log::info!(target: targets::SEARCH, "OR phase");
        self.or_split(root)?;

        let free = self.graph.free_nodes()?;
        if free.is_empty() {
            return Ok(Vec::default());
        }

        log::info!(target: targets::SEARCH, "AND phase over {} free nodes", free.len());
        for key in free {
            if self.graph.is_free(key)? {
                self.and_split(key)?;
            }
        }

        let free = self.graph.free_nodes()?;
        if free.is_empty() {
            return Ok(Vec::default());
        }

        if self.config.completion.value {
            let pool = CandidatePool::build(
                &self.premises,
                self.graph.norm(root)?,
                self.config.negated_candidates.value,
            );
            self.counters.candidates = (pool.inputs.len(), pool.outputs.len());

            log::info!(target: targets::SEARCH, "Completion phase over {} free nodes", free.len());
            for key in free {
                if self.graph.is_free(key)? {
                    self.weaken_output(key, &pool.outputs)?;
                }
                if self.graph.is_free(key)? {
                    self.strengthen_input(key, &pool.inputs)?;
                }
            }

            if self.graph.free_nodes()?.is_empty() {
                return Ok(Vec::default());
            }
        }

        self.finalize()
    }

    /// Marks each remaining free node as a premise, returning the norms of the nodes marked.
    fn finalize(&mut self) -> Result<Vec<Norm>, ErrorKind> {
        let mut missing = Vec::default();
        while let Some(key) = self.graph.free_nodes()?.pop() {
            self.graph.mark_premise(key)?;
            self.graph.prune(key)?;

            let norm = self.graph.norm(key)?.clone();
            log::info!(target: targets::SEARCH, "Missing premise: {}", norm.display(&self.atom_db));
            missing.push(norm);
        }
        Ok(missing)
    }
}
