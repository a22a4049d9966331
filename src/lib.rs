//! A library for searching for derivations of conditional norms from premises, in the style of input/output logic.
//!
//! A conditional norm is a pair (*input*, *output*) of boolean formulas, read as "given *input*, *output* ought to hold".
//! Given a conclusion norm and a collection of premise norms, otter_norms searches (backwards) for a derivation of the conclusion using four structural rules:
//! - OR-split: a norm with a disjunctive input follows from norms on each part of the disjunction.
//! - AND-split: a norm with a conjunctive output follows from norms for each part of the conjunction.
//! - Weakening the output: a norm follows from a norm with a stronger output.
//! - Strengthening the input: a norm follows from a norm with a weaker input.
//!
//! If no derivation is found the search reports a collection of additional premises with which a further search derives the conclusion.
//!
//! # Orientation
//!
//! The library is designed around a [context], which holds a configuration, an [atom database](crate::db::atom), the conclusion and premises of a search, and the [proof graph](crate::db::graph) built during a search.
//!
//! - The [search procedure](crate::procedures::search) sequences the rules in phases.
//! - The [procedures] contain each rule, the collection of free nodes, and the construction of candidate formulas.
//! - The [structures] contain formulas and norms.
//! - The [configuration](crate::config) contains which notion of equality each rule uses when matching premises.
//!
//! # Example
//!
//! ```rust
//! # use otter_norms::config::Config;
//! # use otter_norms::context::Context;
//! # use otter_norms::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let conclusion = the_context.norm_from_string("(Or(a, b), And(x, y))").unwrap();
//! the_context.set_conclusion(conclusion);
//!
//! for premise in ["(Or(a, b), x)", "(a, y)"] {
//!     let premise = the_context.norm_from_string(premise).unwrap();
//!     the_context.add_premise(premise);
//! }
//!
//! assert_eq!(the_context.search(), Ok(Report::Unproved));
//!
//! let missing = the_context.missing_premises().unwrap();
//! assert_eq!(missing.len(), 1);
//! assert_eq!(missing[0].display(&the_context.atom_db).to_string(), "(b, y)");
//!
//! let missing = missing.to_vec();
//! for premise in missing {
//!     the_context.add_premise(premise);
//! }
//!
//! assert_eq!(the_context.search(), Ok(Report::Proved));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to pruning can be filtered with `RUST_LOG=prune …` or,
//! - Only the phases of a search can be found with `RUST_LOG=search=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;
