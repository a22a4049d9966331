/*!
Boolean formulas over [atoms](crate::structures::atom).

Conjunctions and disjunctions are n-ary, and the constructors [and](Formula::and) and [or](Formula::or) maintain a handful of simplifications:
- Nested conjunctions (disjunctions) are flattened into a single, ordered, operand list.
- The identity (1 for conjunction, 0 for disjunction) is dropped.
- The absorbing element (0 for conjunction, 1 for disjunction) absorbs, as does the presence of both an operand and its negation.
- Duplicate operands are dropped, keeping the first occurrence.
- An empty list of operands is the identity, and a single operand is the operand.

```rust
# use otter_norms::structures::formula::Formula;
let [a, b, c] = [0, 1, 2].map(Formula::atom);

let nested = Formula::or([a.clone(), Formula::or([b.clone(), c.clone()])]);
assert_eq!(nested, Formula::Or(vec![a.clone(), b.clone(), c.clone()]));

assert_eq!(Formula::and([a.clone(), Formula::Top]), a);
assert_eq!(Formula::and([a.clone(), a.clone().negate()]), Formula::Bottom);
assert_eq!(Formula::or(Vec::<Formula>::new()), Formula::Bottom);
```

Aside from the constructors, formulas may be converted to [normal forms](Formula::to_dnf), compared by [equivalence](Formula::equivalent), and [displayed](Formula::display) with the names of atoms from some [atom database](crate::db::atom).
*/

mod display;
mod equivalence;
mod normal_form;

pub use display::FormulaDisplay;

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, valuation::Valuation};

/// A boolean formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// The constant 0.
    Bottom,

    /// The constant 1.
    Top,

    /// An atom.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of some (ordered) formulas.
    And(Vec<Formula>),

    /// The disjunction of some (ordered) formulas.
    Or(Vec<Formula>),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
}

impl Connective {
    fn identity(self) -> Formula {
        match self {
            Self::And => Formula::Top,
            Self::Or => Formula::Bottom,
        }
    }

    fn absorbing(self) -> Formula {
        match self {
            Self::And => Formula::Bottom,
            Self::Or => Formula::Top,
        }
    }
}

impl Formula {
    /// The formula consisting of a single atom.
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    /// The conjunction of `operands`.
    pub fn and(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::assemble(Connective::And, operands)
    }

    /// The disjunction of `operands`.
    pub fn or(operands: impl IntoIterator<Item = Formula>) -> Self {
        Self::assemble(Connective::Or, operands)
    }

    /// The negation of the formula.
    pub fn negate(self) -> Self {
        match self {
            Formula::Top => Formula::Bottom,
            Formula::Bottom => Formula::Top,
            Formula::Not(inner) => *inner,
            other => Formula::Not(Box::new(other)),
        }
    }

    fn assemble(connective: Connective, operands: impl IntoIterator<Item = Formula>) -> Self {
        let mut flat = Vec::new();
        for operand in operands {
            match (connective, operand) {
                (Connective::And, Formula::And(inner)) | (Connective::Or, Formula::Or(inner)) => {
                    flat.extend(inner)
                }
                (_, other) => flat.push(other),
            }
        }

        let identity = connective.identity();
        let absorbing = connective.absorbing();

        let mut kept: Vec<Formula> = Vec::with_capacity(flat.len());
        for operand in flat {
            if operand == identity || kept.contains(&operand) {
                continue;
            }
            if operand == absorbing {
                return absorbing;
            }
            let complement = operand.clone().negate();
            if kept.contains(&complement) {
                return absorbing;
            }
            kept.push(operand);
        }

        match kept.len() {
            0 => identity,
            1 => kept.swap_remove(0),
            _ => match connective {
                Connective::And => Formula::And(kept),
                Connective::Or => Formula::Or(kept),
            },
        }
    }

    /// The immediate operands of a conjunction or disjunction, and otherwise an empty slice.
    pub fn operands(&self) -> &[Formula] {
        match self {
            Formula::And(operands) | Formula::Or(operands) => operands,
            _ => &[],
        }
    }

    /// The operands of a conjunction or disjunction, and otherwise the formula itself.
    pub fn top_level_operands(&self) -> Vec<&Formula> {
        match self {
            Formula::And(operands) | Formula::Or(operands) => operands.iter().collect(),
            other => vec![other],
        }
    }

    /// True if the formula is a conjunction.
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Formula::And(_))
    }

    /// True if the formula is a disjunction.
    pub fn is_disjunction(&self) -> bool {
        matches!(self, Formula::Or(_))
    }

    /// True if the formula is neither a conjunction nor a disjunction.
    pub fn is_atomic(&self) -> bool {
        !matches!(self, Formula::And(_) | Formula::Or(_))
    }

    /// The atoms occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Formula::Top | Formula::Bottom => {}
            Formula::Atom(atom) => {
                atoms.insert(*atom);
            }
            Formula::Not(inner) => inner.collect_atoms(atoms),
            Formula::And(operands) | Formula::Or(operands) => {
                for operand in operands {
                    operand.collect_atoms(atoms);
                }
            }
        }
    }

    /// The value of the formula on a valuation.
    ///
    /// Atoms without a value on the valuation are taken to be false.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        match self {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Atom(atom) => valuation.value_of(*atom).unwrap_or(false),
            Formula::Not(inner) => !inner.evaluate(valuation),
            Formula::And(operands) => operands.iter().all(|operand| operand.evaluate(valuation)),
            Formula::Or(operands) => operands.iter().any(|operand| operand.evaluate(valuation)),
        }
    }
}
