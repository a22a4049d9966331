/*!
The context, to which a conclusion and premises are added and within which searches take place.

A context owns everything a search depends on:
- A [configuration](crate::config).
- An [atom database](crate::db::atom), the universe of atoms for formulas of the context.
- A conclusion, and an ordered list of premises.
- The [proof graph](crate::db::graph) of the most recent search.

# Example
```rust
# use otter_norms::context::Context;
# use otter_norms::config::Config;
# use otter_norms::reports::Report;
# use otter_norms::structures::{formula::Formula, norm::Norm};
let mut the_context = Context::from_config(Config::default());

let a = the_context.atom("a").unwrap();
let b = the_context.atom("b").unwrap();
let x = the_context.atom("x").unwrap();

the_context.set_conclusion(Norm::new(Formula::or([a.clone(), b.clone()]), x.clone()));
the_context.add_premise(Norm::new(a, x.clone()));
the_context.add_premise(Norm::new(b, x));

assert_eq!(the_context.search(), Ok(Report::Proved));
assert_eq!(the_context.report(), Report::Proved);
assert_eq!(the_context.used_premises().len(), 2);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        graph::{Operation, ProofGraph},
    },
    reports::Report,
    structures::{formula::Formula, norm::Norm},
    types::err::ErrorKind,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context has some input, and allows for more.
    Input,

    /// A search is in progress.
    Searching,

    /// The most recent search found a derivation of the conclusion.
    Proved,

    /// The most recent search did not find a derivation of the conclusion.
    Unproved,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Searching => write!(f, "Searching"),
            Self::Proved => write!(f, "Proved"),
            Self::Unproved => write!(f, "Unproved"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/search.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The proof graph of the most recent search.
    /// See [db::graph](crate::db::graph) for details.
    pub graph: ProofGraph,

    /// The status of the context.
    pub state: ContextState,

    /// The conclusion to be derived.
    pub(crate) conclusion: Option<Norm>,

    /// The premises from which to derive the conclusion, in the order given.
    pub(crate) premises: Vec<Norm>,

    /// Premises which would complete the most recent (unsuccessful) search.
    pub(crate) missing: Vec<Norm>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            graph: ProofGraph::default(),
            state: ContextState::Configuration,

            conclusion: None,
            premises: Vec::default(),
            missing: Vec::default(),
        }
    }

    /// The formula consisting of the atom with external name `name`, using a fresh atom if no atom has the name.
    pub fn atom(&mut self, name: &str) -> Result<Formula, ErrorKind> {
        let atom = self.atom_db.atom_or_fresh(name)?;
        Ok(Formula::atom(atom))
    }

    /// Sets the conclusion of the context, replacing any previous conclusion.
    pub fn set_conclusion(&mut self, norm: Norm) {
        self.conclusion = Some(norm);
        self.state = ContextState::Input;
    }

    /// Adds a premise to the context.
    ///
    /// Premises are kept in the order added, and the same premise may be added more than once.
    pub fn add_premise(&mut self, norm: Norm) {
        self.premises.push(norm);
        self.state = ContextState::Input;
    }

    pub fn conclusion(&self) -> Option<&Norm> {
        self.conclusion.as_ref()
    }

    pub fn premises(&self) -> &[Norm] {
        &self.premises
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The premises which would complete a derivation, if the most recent search was unsuccessful.
    ///
    /// Each missing premise is some node of a proof graph which could not be derived, and the missing premises are in the order in which they were found.
    /// Adding the missing premises, in order, and searching again derives the conclusion.
    pub fn missing_premises(&self) -> Result<&[Norm], ErrorKind> {
        match self.state {
            ContextState::Unproved => Ok(&self.missing),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The norm of each premise node of the proof graph, together with the rule which introduced the node.
    ///
    /// After an unsuccessful search, the graph is a derivation from the premises together with the missing premises, and so this may include missing premises.
    pub fn used_premises(&self) -> Vec<(&Norm, Operation)> {
        self.graph
            .premise_nodes()
            .into_iter()
            .filter_map(|key| self.graph.node(key).ok())
            .map(|node| (&node.norm, node.operation))
            .collect()
    }
}
