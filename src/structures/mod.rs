//! Key structures, such as formulas and norms.
//!
//! # Formulas
//!
//! A [formula] is built from [atoms](atom) and the constants 1 (top) and 0 (bottom) by negation, conjunction, and disjunction.
//! Conjunctions and disjunctions are n-ary, and are flattened and simplified on construction.
//!
//! Formulas may be compared in three ways:
//! - Textually, by comparing their [display](formula::Formula::display).
//! - Structurally, by comparing their values with `==`.
//! - Semantically, by [equivalence](formula::Formula::equivalent).
//!
//! Which comparison is used when matching a premise depends on the rule, see [config](crate::config).
//!
//! # Norms
//!
//! A [norm] is a pair of formulas, an input and an output.
//! The conclusion and premises of a search are norms, as is each node of a [proof graph](crate::db::graph).
//!
//! # Languages
//! A *language* is some set of atoms, closed under the operations of negation, conjunction, and disjunction. \
//! The language of a context is the set of atoms in its [atom database](crate::db::atom).

pub mod atom;
pub mod formula;
pub mod norm;
pub mod valuation;
