/*!
A (total) function from atoms to truth values.

The canonical representation of a valuation is a vector of booleans, where each index of the vector is interpreted as an atom.

```rust
# use otter_norms::structures::valuation::Valuation;
let valuation = vec![true, false, true];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.value_of(3), None);
```

Valuations are used to decide [equivalence](crate::structures::formula::Formula::equivalent) of formulas, by enumerating each valuation of the atoms of interest.
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
#[allow(non_camel_case_types)]
pub type CValuation = Vec<bool>;

/// A valuation is something which stores some value of an atom.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<bool>;
}

impl<T: std::ops::Deref<Target = [bool]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }
}

/// Advances `valuation` to the next valuation of `atoms`, as a binary counter over `atoms` with the first atom least significant.
///
/// Returns false once every valuation of `atoms` has been visited, at which point each atom has value false.
/// Atoms outside `atoms` are untouched.
pub fn advance(valuation: &mut [bool], atoms: &[Atom]) -> bool {
    for atom in atoms {
        let value = &mut valuation[*atom as usize];
        if *value {
            *value = false;
        } else {
            *value = true;
            return true;
        }
    }
    false
}
