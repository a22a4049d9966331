/*!
Configuration of a context.

All configuration for a search is contained within the context.

# Matching

Each rule matches the nodes it introduces to premises with its own [notion of equality](NormEquality), given as a notion of equality for inputs and for outputs.
The defaults are deliberately mixed:

| Rule             | Input      | Output  |
|------------------|------------|---------|
| OR-split         | Textual    | Textual |
| AND-split        | Structural | Textual |
| Output weakening | Semantic   | Semantic |
| Input strengthening | Semantic | Semantic |

So, for example, by default an OR-split of `Or(a, b, c)` into `b` and `Or(a, c)` is not matched to a premise with input `Or(c, a)`, though weakening or strengthening would match the two.

```rust
# use otter_norms::config::{Config, Equality, NormEquality};
let mut config = Config::default();
assert_eq!(config.and_split_equality.value.input, Equality::Structural);

config.set_matching(Equality::Semantic);
assert_eq!(config.or_split_equality.value, NormEquality::uniform(Equality::Semantic));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod matching;
pub use matching::{Equality, NormEquality};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Equality when matching the parts of an OR-split to premises.
    pub or_split_equality: ConfigOption<NormEquality>,

    /// Equality when matching the parts of an AND-split to premises.
    pub and_split_equality: ConfigOption<NormEquality>,

    /// Equality when matching a weakened output to premises.
    ///
    /// Also used to match the conclusion to premises, before any rule is applied.
    pub weaken_equality: ConfigOption<NormEquality>,

    /// Equality when matching a strengthened input to premises.
    pub strengthen_equality: ConfigOption<NormEquality>,

    /// Include the negation of each formula in a candidate pool.
    pub negated_candidates: ConfigOption<bool>,

    /// Weaken outputs and strengthen inputs, if splits do not complete a derivation.
    pub completion: ConfigOption<bool>,
}

impl Config {
    /// Use the same notion of equality for every rule.
    pub fn set_matching(&mut self, equality: Equality) {
        let uniform = NormEquality::uniform(equality);
        self.or_split_equality.value = uniform;
        self.and_split_equality.value = uniform;
        self.weaken_equality.value = uniform;
        self.strengthen_equality.value = uniform;
    }

    /// A line for each option of the configuration.
    pub fn summary(&self) -> Vec<String> {
        vec![
            self.or_split_equality.to_string(),
            self.and_split_equality.to_string(),
            self.weaken_equality.to_string(),
            self.strengthen_equality.to_string(),
            self.negated_candidates.to_string(),
            self.completion.to_string(),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            or_split_equality: ConfigOption {
                name: "or_split_equality",
                value: NormEquality {
                    input: Equality::Textual,
                    output: Equality::Textual,
                },
            },

            and_split_equality: ConfigOption {
                name: "and_split_equality",
                value: NormEquality {
                    input: Equality::Structural,
                    output: Equality::Textual,
                },
            },

            weaken_equality: ConfigOption {
                name: "weaken_equality",
                value: NormEquality::uniform(Equality::Semantic),
            },

            strengthen_equality: ConfigOption {
                name: "strengthen_equality",
                value: NormEquality::uniform(Equality::Semantic),
            },

            negated_candidates: ConfigOption {
                name: "negated_candidates",
                value: true,
            },

            completion: ConfigOption {
                name: "completion",
                value: true,
            },
        }
    }
}
