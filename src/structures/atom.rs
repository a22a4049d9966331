/*!
(The internal representation of) an atom (aka. a 'proposition').

- 'Internal' atoms are used within a context.
- 'External' atoms are used when reading or writing a formula, e.g. `a`, `rain`, `p_1`. \
  External atoms are identifiers: a letter or underscore, followed by letters, digits, or underscores.
  The operator names `And`, `Or`, and `Not` are reserved.

Each (internal) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

```rust
# use otter_norms::structures::atom::Atom;
let m = 6;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&5));
```

That the atoms are [0..*m*) for some *m* allows atoms to be used as the indicies of a structure, e.g. a [valuation](crate::structures::valuation).

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
*/

/// An atom, aka. a 'proposition'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
