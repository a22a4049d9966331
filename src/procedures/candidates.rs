/*!
Candidate formulas for weakening outputs and strengthening inputs.

A pool of formulas is gathered for each side of a norm, from the top-level operands of the premises and of the (normalized) conclusion:
- The input pool contains the operands of each input, and the output pool the operands of each output.
  A formula which is neither a conjunction nor a disjunction is its own (single) operand.
- Each pool keeps the first occurrence of a formula, in the order premises were given, followed by the conclusion.
- If [configured](crate::config::Config::negated_candidates), the negation of each formula in a pool is added to the end of the pool.

Candidates are then each choice of at most half of a pool, in order of size and then lexicographically.
A choice of several input formulas is their disjunction, and a choice of several output formulas their conjunction.

```rust
# use otter_norms::procedures::candidates::CandidatePool;
# use otter_norms::structures::{formula::Formula, norm::Norm};
let [a, b, x, y] = [0, 1, 2, 3].map(Formula::atom);
let premises = vec![Norm::new(a.clone(), x.clone())];
let conclusion = Norm::new(b.clone(), Formula::and([x.clone(), y.clone()]));

let pool = CandidatePool::build(&premises, &conclusion, false);
assert_eq!(pool.inputs, vec![a.clone(), b.clone()]);
assert_eq!(pool.outputs, vec![x.clone(), y.clone()]);

let with_negations = CandidatePool::build(&premises, &conclusion, true);
assert_eq!(with_negations.inputs.len(), 4 + 6);
```
*/

use crate::{
    generic::combinations::Combinations,
    misc::log::targets::{self},
    structures::{formula::Formula, norm::Norm},
};

/// Candidate formulas for each side of a norm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    /// Candidates with which to strengthen an input.
    pub inputs: Vec<Formula>,

    /// Candidates with which to weaken an output.
    pub outputs: Vec<Formula>,
}

impl CandidatePool {
    /// The candidate pool for the given premises and (normalized) conclusion.
    pub fn build(premises: &[Norm], conclusion: &Norm, negations: bool) -> Self {
        let mut input_forms: Vec<Formula> = Vec::default();
        let mut output_forms: Vec<Formula> = Vec::default();

        for norm in premises.iter().chain(std::iter::once(conclusion)) {
            gather(&mut input_forms, &norm.input);
            gather(&mut output_forms, &norm.output);
        }

        if negations {
            add_negations(&mut input_forms);
            add_negations(&mut output_forms);
        }

        let pool = CandidatePool {
            inputs: choices(&input_forms, |chosen| Formula::or(chosen)),
            outputs: choices(&output_forms, |chosen| Formula::and(chosen)),
        };

        log::info!(target: targets::COMPLETION,
            "Candidate pool of {} inputs and {} outputs", pool.inputs.len(), pool.outputs.len());

        pool
    }
}

fn gather(forms: &mut Vec<Formula>, formula: &Formula) {
    for operand in formula.top_level_operands() {
        if !forms.contains(operand) {
            forms.push(operand.clone());
        }
    }
}

fn add_negations(forms: &mut Vec<Formula>) {
    let negations: Vec<Formula> = forms.iter().map(|form| form.clone().negate()).collect();
    for negation in negations {
        if !forms.contains(&negation) {
            forms.push(negation);
        }
    }
}

fn choices(forms: &[Formula], combine: fn(Vec<Formula>) -> Formula) -> Vec<Formula> {
    let mut candidates = Vec::default();
    for size in 1..=forms.len() / 2 {
        for choice in Combinations::new(forms.len(), size) {
            let mut chosen: Vec<Formula> = choice.iter().map(|index| forms[*index].clone()).collect();
            let candidate = match chosen.len() {
                1 => chosen.swap_remove(0),
                _ => combine(chosen),
            };
            candidates.push(candidate);
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_without_negations() {
        let [a, b, c, x] = [0, 1, 2, 3].map(Formula::atom);
        let premises = vec![
            Norm::new(Formula::or([a.clone(), b.clone()]), x.clone()),
            Norm::new(b.clone(), x.clone()),
        ];
        let conclusion = Norm::new(Formula::or([a.clone(), c.clone()]), x.clone());

        let pool = CandidatePool::build(&premises, &conclusion, false);

        assert_eq!(pool.inputs, vec![a.clone(), b.clone(), c.clone()]);
        assert!(pool.outputs.is_empty());
    }

    #[test]
    fn combinations_by_side() {
        let [a, b, x, y] = [0, 1, 2, 3].map(Formula::atom);
        let conclusion = Norm::new(
            Formula::or([a.clone(), b.clone()]),
            Formula::and([x.clone(), y.clone()]),
        );

        let pool = CandidatePool::build(&[], &conclusion, true);

        assert_eq!(pool.inputs.len(), 10);
        assert_eq!(pool.inputs[4], Formula::or([a.clone(), b.clone()]));
        assert_eq!(pool.outputs[4], Formula::and([x.clone(), y.clone()]));
        assert_eq!(pool.inputs[5], Formula::Top);
        assert_eq!(pool.outputs[5], Formula::Bottom);
    }
}
