/*!
Matching nodes of a proof graph to premises.

A node matches a premise if the input of the node is equal to the input of the premise, and likewise for outputs, for some [notion of equality](crate::config::Equality).

```rust
# use otter_norms::config::Equality;
# use otter_norms::db::atom::AtomDB;
# use otter_norms::structures::formula::Formula;
let mut atom_db = AtomDB::default();
let a = Formula::atom(atom_db.atom_or_fresh("a").unwrap());
let b = Formula::atom(atom_db.atom_or_fresh("b").unwrap());

let a_or_b = Formula::or([a.clone(), b.clone()]);
let b_or_a = Formula::or([b, a]);

assert!(!Equality::Textual.holds(&a_or_b, &b_or_a, &atom_db));
assert!(!Equality::Structural.holds(&a_or_b, &b_or_a, &atom_db));
assert!(Equality::Semantic.holds(&a_or_b, &b_or_a, &atom_db));
```
*/

use crate::{
    config::{Equality, NormEquality},
    context::Context,
    db::{atom::AtomDB, keys::NodeKey},
    structures::{formula::Formula, norm::Norm},
    types::err::ErrorKind,
};

impl Equality {
    /// Whether `left` and `right` are equal, on this notion of equality.
    pub fn holds(&self, left: &Formula, right: &Formula, atom_db: &AtomDB) -> bool {
        match self {
            Self::Structural => left == right,

            Self::Textual => {
                left == right
                    || left.display(atom_db).to_string() == right.display(atom_db).to_string()
            }

            Self::Semantic => left.equivalent(right),
        }
    }
}

impl NormEquality {
    /// Whether the inputs and the outputs of `left` and `right` are equal, on the relevant notion of equality.
    pub fn holds(&self, left: &Norm, right: &Norm, atom_db: &AtomDB) -> bool {
        self.input.holds(&left.input, &right.input, atom_db)
            && self.output.holds(&left.output, &right.output, atom_db)
    }
}

impl Context {
    /// Whether the norm of the node matches some premise of the context.
    ///
    /// Premises are checked in the order given.
    pub fn matches_premise(&self, key: NodeKey, equality: NormEquality) -> Result<bool, ErrorKind> {
        let norm = self.graph.norm(key)?;
        Ok(self
            .premises
            .iter()
            .any(|premise| equality.holds(premise, norm, &self.atom_db)))
    }
}
