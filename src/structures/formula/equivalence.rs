use super::Formula;

use crate::structures::{
    atom::Atom,
    valuation::{self, CValuation},
};

impl Formula {
    /// Whether the formula and `other` have the same value on every valuation.
    ///
    /// Formulas with distinct [signatures](Formula::signature) are not equivalent.
    /// Otherwise, equivalence is decided by enumerating the valuations of the atoms occurring in either formula, and so is exponential in the count of those atoms.
    ///
    /// ```rust
    /// # use otter_norms::structures::formula::Formula;
    /// let [x, y] = [0, 1].map(Formula::atom);
    ///
    /// let absorbed = Formula::and([x.clone(), Formula::or([x.clone(), y.clone()])]);
    /// assert!(absorbed.equivalent(&x));
    /// assert!(!absorbed.equivalent(&y));
    /// ```
    pub fn equivalent(&self, other: &Formula) -> bool {
        if self.signature() != other.signature() {
            return false;
        }

        let mut atoms = self.atoms();
        atoms.extend(other.atoms());
        let atoms: Vec<Atom> = atoms.into_iter().collect();

        let width = match atoms.last() {
            Some(atom) => *atom as usize + 1,
            None => 0,
        };
        let mut valuation: CValuation = vec![false; width];

        loop {
            if self.evaluate(&valuation) != other.evaluate(&valuation) {
                return false;
            }
            if !valuation::advance(&mut valuation, &atoms) {
                return true;
            }
        }
    }
}

/// The values of an atom on each of 64 fixed valuations, one valuation to each bit.
///
/// A splitmix64 finalizer over the atom, so the sampled values of distinct atoms are (roughly) independent.
fn sample_values(atom: Atom) -> u64 {
    let mut z = (atom as u64)
        .wrapping_add(1)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl Formula {
    /// The values of the formula on 64 fixed valuations, one valuation to each bit.
    ///
    /// Equivalent formulas have the same signature, and so a signature is a cheap key when searching for an equivalent formula.
    /// The converse does not hold, though distinct signatures are typical for inequivalent formulas.
    ///
    /// ```rust
    /// # use otter_norms::structures::formula::Formula;
    /// let [x, y] = [0, 1].map(Formula::atom);
    ///
    /// let absorbed = Formula::or([x.clone(), Formula::and([x.clone(), y.clone()])]);
    /// assert_eq!(absorbed.signature(), x.signature());
    /// assert_eq!(Formula::Top.signature(), u64::MAX);
    /// ```
    pub fn signature(&self) -> u64 {
        match self {
            Formula::Bottom => 0,
            Formula::Top => u64::MAX,
            Formula::Atom(atom) => sample_values(*atom),
            Formula::Not(inner) => !inner.signature(),
            Formula::And(operands) => operands
                .iter()
                .fold(u64::MAX, |values, operand| values & operand.signature()),
            Formula::Or(operands) => operands
                .iter()
                .fold(0, |values, operand| values | operand.signature()),
        }
    }
}
