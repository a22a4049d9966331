//! Conversion to disjunctive and conjunctive normal form.
//!
//! Both conversions push negations to atoms and then distribute, keeping the order of operands.
//! So, for example, the disjunctive normal form of `And(a, Or(b, c))` is `Or(And(a, b), And(a, c))`.
//! Simplification through the [constructors](Formula::and) takes care of duplicate and complementary literals.

use super::Formula;

impl Formula {
    /// An equivalent formula in disjunctive normal form.
    pub fn to_dnf(&self) -> Formula {
        let terms = self.negation_normal(true).dnf_terms();
        Formula::or(terms.into_iter().map(Formula::and))
    }

    /// An equivalent formula in conjunctive normal form.
    pub fn to_cnf(&self) -> Formula {
        let clauses = self.negation_normal(true).cnf_clauses();
        Formula::and(clauses.into_iter().map(Formula::or))
    }

    /// The negation normal form of the formula, if `polarity` is true, and of its negation otherwise.
    fn negation_normal(&self, polarity: bool) -> Formula {
        match self {
            Formula::Top | Formula::Bottom => match polarity {
                true => self.clone(),
                false => self.clone().negate(),
            },

            Formula::Atom(_) => match polarity {
                true => self.clone(),
                false => Formula::Not(Box::new(self.clone())),
            },

            Formula::Not(inner) => inner.negation_normal(!polarity),

            Formula::And(operands) => {
                let parts = operands.iter().map(|operand| operand.negation_normal(polarity));
                match polarity {
                    true => Formula::and(parts),
                    false => Formula::or(parts),
                }
            }

            Formula::Or(operands) => {
                let parts = operands.iter().map(|operand| operand.negation_normal(polarity));
                match polarity {
                    true => Formula::or(parts),
                    false => Formula::and(parts),
                }
            }
        }
    }

    // Terms of a formula in negation normal form, each term a conjunction of literals.
    fn dnf_terms(&self) -> Vec<Vec<Formula>> {
        match self {
            Formula::Top => vec![Vec::default()],
            Formula::Bottom => Vec::default(),
            Formula::Or(operands) => operands.iter().flat_map(|operand| operand.dnf_terms()).collect(),
            Formula::And(operands) => operands
                .iter()
                .fold(vec![Vec::default()], |terms, operand| {
                    distribute(&terms, &operand.dnf_terms())
                }),
            literal => vec![vec![literal.clone()]],
        }
    }

    // Clauses of a formula in negation normal form, each clause a disjunction of literals.
    fn cnf_clauses(&self) -> Vec<Vec<Formula>> {
        match self {
            Formula::Top => Vec::default(),
            Formula::Bottom => vec![Vec::default()],
            Formula::And(operands) => operands.iter().flat_map(|operand| operand.cnf_clauses()).collect(),
            Formula::Or(operands) => operands
                .iter()
                .fold(vec![Vec::default()], |clauses, operand| {
                    distribute(&clauses, &operand.cnf_clauses())
                }),
            literal => vec![vec![literal.clone()]],
        }
    }
}

/// Each concatenation of some list from `left` with some list from `right`, ordered by `left` and then `right`.
fn distribute(left: &[Vec<Formula>], right: &[Vec<Formula>]) -> Vec<Vec<Formula>> {
    let mut product = Vec::with_capacity(left.len() * right.len());
    for left_part in left {
        for right_part in right {
            let mut joined = left_part.clone();
            joined.extend(right_part.iter().cloned());
            product.push(joined);
        }
    }
    product
}
