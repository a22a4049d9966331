/*!
The atom database: the universe of atoms of a context, together with their external names.

Atoms are issued in order, from 0, and each atom has exactly one external name.
Names are identifiers, i.e. a letter or underscore followed by letters, digits, or underscores, other than the operator names `And`, `Or`, and `Not`.

```rust
# use otter_norms::db::atom::AtomDB;
let mut atom_db = AtomDB::default();

let p = atom_db.atom_or_fresh("p").unwrap();
let q = atom_db.atom_or_fresh("q").unwrap();

assert_eq!(atom_db.atom_or_fresh("p"), Ok(p));
assert_eq!(atom_db.external_representation(q), Some("q"));
assert!(atom_db.atom_or_fresh("Or").is_err());
assert_eq!(atom_db.count(), 2);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::atom::{ATOM_MAX, Atom},
    types::err::AtomDBError,
};

/// Names reserved for operators.
pub const RESERVED_NAMES: [&str; 3] = ["And", "Or", "Not"];

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// The external name of each atom, indexed by atom.
    names: Vec<String>,

    /// The atom of each external name.
    atoms: HashMap<String, Atom>,
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// A fresh atom with external name `name`.
    ///
    /// Note, this does not check whether `name` is already in use, and a second atom with the same name shadows the first.
    /// For most purposes, [atom_or_fresh](AtomDB::atom_or_fresh) is preferable.
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        if !valid_name(name) {
            log::info!(target: targets::PARSE, "Invalid atom name: {name}");
            return Err(AtomDBError::InvalidName(name.to_owned()));
        }

        let atom = match self.names.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                return Err(AtomDBError::AtomsExhausted);
            }
        };

        self.names.push(name.to_owned());
        self.atoms.insert(name.to_owned(), atom);

        Ok(atom)
    }

    /// The atom with external name `name`, if one exists, and otherwise a fresh atom with that name.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        match self.atoms.get(name) {
            Some(atom) => Ok(*atom),
            None => self.fresh_atom(name),
        }
    }

    /// The atom with external name `name`, if one exists.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The external name of `atom`, if `atom` is part of the database.
    pub fn external_representation(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// Each atom of the database, paired with its external name.
    pub fn atoms(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (index as Atom, name.as_str()))
    }
}

/// Whether `name` may be used as the external name of an atom.
pub fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let leading = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => false,
    };

    leading
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(valid_name("a"));
        assert!(valid_name("_tmp2"));
        assert!(!valid_name(""));
        assert!(!valid_name("2a"));
        assert!(!valid_name("a b"));
        assert!(!valid_name("Not"));
    }

    #[test]
    fn atoms_are_issued_in_order() {
        let mut atom_db = AtomDB::default();
        let names = ["x", "y", "z"];
        let atoms: Vec<Atom> = names
            .iter()
            .map(|name| atom_db.atom_or_fresh(name).unwrap())
            .collect();

        assert_eq!(atoms, vec![0, 1, 2]);
        assert_eq!(atom_db.atom_of("y"), Some(1));
        assert_eq!(atom_db.atom_of("w"), None);
        assert_eq!(atom_db.external_representation(3), None);
    }
}
