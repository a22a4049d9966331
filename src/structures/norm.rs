/*!
Conditional norms, i.e. pairs of formulas.

A norm (input, output) is read as: given the input, the output ought to hold.
Both the conclusion of a search and each premise are norms, as is the label of each node of a proof graph.

```rust
# use otter_norms::db::atom::AtomDB;
# use otter_norms::structures::{formula::Formula, norm::Norm};
let mut atom_db = AtomDB::default();
let a = Formula::atom(atom_db.atom_or_fresh("a").unwrap());
let x = Formula::atom(atom_db.atom_or_fresh("x").unwrap());
let y = Formula::atom(atom_db.atom_or_fresh("y").unwrap());

let norm = Norm::new(a, Formula::and([x, y]));
assert_eq!(norm.display(&atom_db).to_string(), "(a, And(x, y))");
```
*/

use crate::{db::atom::AtomDB, structures::formula::Formula};

/// A conditional norm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Norm {
    /// The condition of the norm.
    pub input: Formula,

    /// What ought to hold, given the condition.
    pub output: Formula,
}

impl Norm {
    pub fn new(input: Formula, output: Formula) -> Self {
        Norm { input, output }
    }

    /// The norm with input in disjunctive normal form and output in conjunctive normal form.
    pub fn normalized(&self) -> Self {
        Norm {
            input: self.input.to_dnf(),
            output: self.output.to_cnf(),
        }
    }

    /// The norm, displayed with the external representation of atoms from `atom_db`.
    pub fn display<'n>(&'n self, atom_db: &'n AtomDB) -> NormDisplay<'n> {
        NormDisplay {
            norm: self,
            atom_db,
        }
    }
}

/// A norm paired with an atom database, for display.
pub struct NormDisplay<'n> {
    norm: &'n Norm,
    atom_db: &'n AtomDB,
}

impl std::fmt::Display for NormDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            self.norm.input.display(self.atom_db),
            self.norm.output.display(self.atom_db)
        )
    }
}
