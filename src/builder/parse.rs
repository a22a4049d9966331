//! Reading formulas and norms from strings.
//!
//! The grammar, with whitespace ignored between tokens:
//!
//! ```none
//! norm    ::= '(' formula ',' formula ')'
//! formula ::= '0' | '1' | name | '~' formula | 'Not(' formula ')'
//!           | 'And(' formula { ',' formula } ')' | 'Or(' formula { ',' formula } ')'
//! ```
//!
//! Names are read as atoms, with a fresh atom for any name not already in the atom database.
//! Conjunctions and disjunctions are built with the [constructors](crate::structures::formula::Formula::and), and so are flattened and simplified.

use crate::{
    context::Context,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{formula::Formula, norm::Norm},
    types::err::{ErrorKind, ParseError},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Comma,
    Tilde,
    Word(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Tilde => write!(f, "~"),
            Self::Word(word) => write!(f, "{word}"),
        }
    }
}

fn tokenize(string: &str, line: Option<usize>) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::default();
    let mut word = String::default();

    for c in string.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        if !word.is_empty() {
            tokens.push(Token::Word(std::mem::take(&mut word)));
        }

        match c {
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            ',' => tokens.push(Token::Comma),
            '~' => tokens.push(Token::Tilde),
            _ if c.is_whitespace() => {}
            _ => return Err(ParseError::Token(line, c.to_string())),
        }
    }

    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }

    Ok(tokens)
}

/// A recursive descent parser over the tokens of a string.
struct Parser<'p> {
    tokens: Vec<Token>,
    position: usize,
    line: Option<usize>,
    atom_db: &'p mut AtomDB,
}

impl<'p> Parser<'p> {
    fn new(string: &str, line: Option<usize>, atom_db: &'p mut AtomDB) -> Result<Self, ParseError> {
        let tokens = tokenize(string, line)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Parser {
            tokens,
            position: 0,
            line,
            atom_db,
        })
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        self.position += 1;
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn unexpected(&self, token: Option<Token>) -> ParseError {
        match token {
            Some(token) => ParseError::Token(self.line, token.to_string()),
            None => ParseError::Token(self.line, "end of input".to_string()),
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            other => Err(self.unexpected(other)),
        }
    }

    /// Ok if every token has been read.
    fn finish(&mut self) -> Result<(), ParseError> {
        match self.next() {
            None => Ok(()),
            other => Err(self.unexpected(other)),
        }
    }

    fn norm(&mut self) -> Result<Norm, ErrorKind> {
        self.expect(Token::Open)?;
        let input = self.formula()?;
        self.expect(Token::Comma)?;
        let output = self.formula()?;
        self.expect(Token::Close)?;
        Ok(Norm::new(input, output))
    }

    fn formula(&mut self) -> Result<Formula, ErrorKind> {
        let word = match self.next() {
            Some(Token::Tilde) => return Ok(self.formula()?.negate()),
            Some(Token::Word(word)) => word,
            other => return Err(self.unexpected(other).into()),
        };

        if self.peek() != Some(&Token::Open) {
            return match word.as_str() {
                "0" => Ok(Formula::Bottom),
                "1" => Ok(Formula::Top),
                name => Ok(Formula::atom(self.atom_db.atom_or_fresh(name)?)),
            };
        }

        self.expect(Token::Open)?;
        let mut operands = vec![self.formula()?];
        while self.peek() == Some(&Token::Comma) {
            self.expect(Token::Comma)?;
            operands.push(self.formula()?);
        }
        self.expect(Token::Close)?;

        match word.as_str() {
            "And" => Ok(Formula::and(operands)),
            "Or" => Ok(Formula::or(operands)),
            "Not" => match operands.pop() {
                Some(operand) if operands.is_empty() => Ok(operand.negate()),
                _ => Err(ParseError::Arity(self.line, word).into()),
            },
            _ => Err(ParseError::UnknownOperator(self.line, word).into()),
        }
    }
}

/// Reads a formula from `string`, on the given line of some input.
pub(super) fn read_formula(
    atom_db: &mut AtomDB,
    string: &str,
    line: Option<usize>,
) -> Result<Formula, ErrorKind> {
    let mut parser = Parser::new(string, line, atom_db)?;
    let formula = parser.formula()?;
    parser.finish()?;
    Ok(formula)
}

/// Reads a norm from `string`, on the given line of some input.
pub(super) fn read_norm(
    atom_db: &mut AtomDB,
    string: &str,
    line: Option<usize>,
) -> Result<Norm, ErrorKind> {
    let mut parser = Parser::new(string, line, atom_db)?;
    let norm = parser.norm()?;
    parser.finish()?;
    log::trace!(target: targets::PARSE, "Read norm {}", norm.display(parser.atom_db));
    Ok(norm)
}

impl Context {
    /// A formula from a string, with atoms from the atom database of the context.
    ///
    /// ```rust
    /// # use otter_norms::context::Context;
    /// # use otter_norms::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let formula = the_context.formula_from_string("And(a, Or(b, ~c), a)").unwrap();
    /// assert_eq!(formula.display(&the_context.atom_db).to_string(), "And(a, Or(b, ~c))");
    ///
    /// assert!(the_context.formula_from_string("Xor(a, b)").is_err());
    /// assert!(the_context.formula_from_string("Not(a, b)").is_err());
    /// assert!(the_context.formula_from_string("a b").is_err());
    /// ```
    pub fn formula_from_string(&mut self, string: &str) -> Result<Formula, ErrorKind> {
        read_formula(&mut self.atom_db, string, None)
    }

    /// A norm from a string, with atoms from the atom database of the context.
    ///
    /// ```rust
    /// # use otter_norms::context::Context;
    /// # use otter_norms::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let norm = the_context.norm_from_string("(Or(a, b), And(x, y))").unwrap();
    /// assert_eq!(norm.display(&the_context.atom_db).to_string(), "(Or(a, b), And(x, y))");
    /// ```
    pub fn norm_from_string(&mut self, string: &str) -> Result<Norm, ErrorKind> {
        read_norm(&mut self.atom_db, string, None)
    }
}
