//! Error types used in the library.
//!
//! - Most of these are external, and arise from reading problems or formulas which are not well-formed.
//! - Some are internal, e.g. a graph error indicates a key to a node which is no longer part of the proof graph.
//!   These are unexpected, as procedures only hold keys to nodes attached to the graph.
//!
//! A search itself does not fail on well-formed input: an unprovable conclusion is reported through the missing premises of a context, not through an error.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::keys::NodeKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Graph(GraphError),
    Parse(ParseError),
    Search(SearchError),

    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::Graph(e) => write!(f, "Proof graph error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Search(e) => write!(f, "Search error: {e:?}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

/// Errors in the atom database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// A name which cannot be used for an atom, e.g. an operator name or a name with whitespace.
    InvalidName(String),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the proof graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// A key which does not (or no longer) identifies a node of the graph.
    MissingNode(NodeKey),

    /// The graph has not been given a root.
    NoRoot,
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

/// Errors when reading a problem or a formula.
///
/// Where relevant, the line of the problem on which the error occurs is noted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Something other than a directive, comment, or empty line.
    Line(usize),

    /// An unexpected token, or the end of input where a token was expected.
    Token(Option<usize>, String),

    /// A connective with an unsuitable count of operands, e.g. `Not(a, b)`.
    Arity(Option<usize>, String),

    /// An unknown operator name, e.g. `Xor(a, b)`.
    UnknownOperator(Option<usize>, String),

    /// More than one conclusion in a problem.
    DuplicateConclusion(usize),

    /// A problem without a conclusion, or an empty formula.
    Empty,

    /// The file containing the problem could not be read.
    NoFile,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let at = |line: &Option<usize>| match line {
            Some(line) => format!(" on line {line}"),
            None => String::default(),
        };

        match self {
            Self::Line(line) => write!(f, "Unrecognised directive on line {line}"),
            Self::Token(line, token) => write!(f, "Unexpected token '{token}'{}", at(line)),
            Self::Arity(line, op) => write!(f, "Unsuitable operand count for {op}{}", at(line)),
            Self::UnknownOperator(line, op) => write!(f, "Unknown operator {op}{}", at(line)),
            Self::DuplicateConclusion(line) => write!(f, "A second conclusion on line {line}"),
            Self::Empty => write!(f, "Empty input"),
            Self::NoFile => write!(f, "Unable to read file"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when searching for a derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchError {
    /// A search was requested before a conclusion was set.
    NoConclusion,
}

impl From<SearchError> for ErrorKind {
    fn from(e: SearchError) -> Self {
        ErrorKind::Search(e)
    }
}
