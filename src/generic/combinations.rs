/*!
Combinations of indicies, in lexicographic order.

```rust
# use otter_norms::generic::combinations::Combinations;
let pairs: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
assert_eq!(
    pairs,
    vec![
        vec![0, 1],
        vec![0, 2],
        vec![0, 3],
        vec![1, 2],
        vec![1, 3],
        vec![2, 3]
    ]
);
```

Combinations are used to choose the operands of one part of a split, and to build candidate formulas from a pool.
*/

/// An iterator over each (increasing) choice of `r` indicies from `0..n`.
pub struct Combinations {
    n: usize,

    /// The next combination, if any.
    indicies: Option<Vec<usize>>,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        let indicies = match r <= n {
            true => Some((0..r).collect()),
            false => None,
        };
        Combinations { n, indicies }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.indicies.take()?;
        let r = current.len();

        // The rightmost index which may be advanced, i.e. which is not at its maximum n - r + position.
        let mut advanced = current.clone();
        let mut position = r;
        while position > 0 {
            position -= 1;
            if advanced[position] < self.n - r + position {
                advanced[position] += 1;
                for later in position + 1..r {
                    advanced[later] = advanced[later - 1] + 1;
                }
                self.indicies = Some(advanced);
                break;
            }
        }

        Some(current)
    }
}
