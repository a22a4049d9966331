use super::Formula;

use crate::db::atom::AtomDB;

/// A formula paired with an atom database, for display.
///
/// The display of a formula is canonical, and used for textual comparisons of formulas:
/// - The constants are `1` and `0`.
/// - Atoms are written with their external representation, and negation with a prefix `~`.
/// - Conjunctions and disjunctions are written `And(…)` and `Or(…)`, with operands separated by `, `.
///
/// ```rust
/// # use otter_norms::db::atom::AtomDB;
/// # use otter_norms::structures::formula::Formula;
/// let mut atom_db = AtomDB::default();
/// let a = Formula::atom(atom_db.atom_or_fresh("a").unwrap());
/// let b = Formula::atom(atom_db.atom_or_fresh("b").unwrap());
///
/// let formula = Formula::or([a, b.negate()]);
/// assert_eq!(formula.display(&atom_db).to_string(), "Or(a, ~b)");
/// ```
pub struct FormulaDisplay<'f> {
    formula: &'f Formula,
    atom_db: &'f AtomDB,
}

impl Formula {
    /// The formula, displayed with the external representation of atoms from `atom_db`.
    pub fn display<'f>(&'f self, atom_db: &'f AtomDB) -> FormulaDisplay<'f> {
        FormulaDisplay {
            formula: self,
            atom_db,
        }
    }
}

impl std::fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (name, operands) = match self.formula {
            Formula::Top => return write!(f, "1"),
            Formula::Bottom => return write!(f, "0"),
            Formula::Atom(atom) => {
                return match self.atom_db.external_representation(*atom) {
                    Some(name) => write!(f, "{name}"),
                    None => write!(f, "#{atom}"),
                }
            }
            Formula::Not(inner) => return write!(f, "~{}", inner.display(self.atom_db)),
            Formula::And(operands) => ("And", operands),
            Formula::Or(operands) => ("Or", operands),
        };

        write!(f, "{name}(")?;
        for (index, operand) in operands.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", operand.display(self.atom_db))?;
        }
        write!(f, ")")
    }
}
