use otter_norms::{
    config::{Config, Equality, NormEquality},
    context::Context,
    db::graph::{NodeState, Operation},
    structures::{formula::Formula, norm::Norm},
};

fn context_with_premises(config: Config, premises: &[&str]) -> Context {
    let mut the_context = Context::from_config(config);
    for premise in premises {
        let premise = the_context.norm_from_string(premise).unwrap();
        the_context.add_premise(premise);
    }
    the_context
}

mod splits {
    use super::*;

    #[test]
    fn or_split_parts_recover_the_input() {
        let mut the_context = context_with_premises(Config::default(), &[]);
        let conclusion = the_context.norm_from_string("(Or(a, b, c), x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion.clone());

        assert!(the_context.or_split(root).is_ok());

        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 6);

        for pair in children.chunks(2) {
            let first = the_context.graph.node(pair[0]).unwrap();
            let second = the_context.graph.node(pair[1]).unwrap();

            assert_eq!(first.operation, Operation::OrSplit);
            assert_eq!(first.partner, Some(pair[1]));
            assert_eq!(second.partner, Some(pair[0]));
            assert_eq!(first.norm.output, conclusion.output);

            let recovered = Formula::or([first.norm.input.clone(), second.norm.input.clone()]);
            assert!(recovered.equivalent(&conclusion.input));
        }
    }

    #[test]
    fn and_split_parts_recover_the_output() {
        let mut the_context = context_with_premises(Config::default(), &[]);
        let conclusion = the_context.norm_from_string("(a, And(x, y, z, w))").unwrap();
        let root = the_context.graph.reset_with_root(conclusion.clone());

        assert!(the_context.and_split(root).is_ok());

        // Choices of two beyond the third repeat an earlier pair.
        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 14);

        for pair in children.chunks(2) {
            let first = the_context.graph.node(pair[0]).unwrap();
            let second = the_context.graph.node(pair[1]).unwrap();

            assert_eq!(first.operation, Operation::AndSplit);
            assert_eq!(first.norm.input, conclusion.input);

            let recovered = Formula::and([first.norm.output.clone(), second.norm.output.clone()]);
            assert!(recovered.equivalent(&conclusion.output));
        }
    }

    #[test]
    fn atomic_targets_are_not_split() {
        let mut the_context = context_with_premises(Config::default(), &[]);
        let conclusion = the_context.norm_from_string("(a, Or(x, y))").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.or_split(root).is_ok());
        assert!(the_context.and_split(root).is_ok());
        assert!(the_context.graph.children(root).unwrap().is_empty());
        assert_eq!(the_context.graph.state(root), Ok(NodeState::Unexpanded));
    }

    #[test]
    fn textual_matching_misses_reordered_premises() {
        let premises = ["(b, x)", "(Or(c, a), x)"];
        let mut the_context = context_with_premises(Config::default(), &premises);
        let conclusion = the_context.norm_from_string("(Or(a, b, c), x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.or_split(root).is_ok());

        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 2);
        assert!(the_context.graph.is_premise(children[0]).unwrap());
        assert!(!the_context.graph.is_premise(children[1]).unwrap());

        let free = the_context.graph.free_nodes().unwrap();
        let free: Vec<String> = free
            .into_iter()
            .map(|key| {
                let norm = the_context.graph.norm(key).unwrap();
                norm.display(&the_context.atom_db).to_string()
            })
            .collect();
        assert_eq!(free, vec!["(a, x)", "(c, x)", "(Or(a, c), x)"]);
    }

    #[test]
    fn semantic_matching_finds_reordered_premises() {
        let premises = ["(b, x)", "(Or(c, a), x)"];
        let mut config = Config::default();
        config.or_split_equality.value = NormEquality::uniform(Equality::Semantic);

        let mut the_context = context_with_premises(config, &premises);
        let conclusion = the_context.norm_from_string("(Or(a, b, c), x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.or_split(root).is_ok());

        assert_eq!(the_context.graph.free_nodes(), Ok(vec![]));
        assert_eq!(the_context.graph.state(root), Ok(NodeState::Closed));
    }

    #[test]
    fn and_split_inputs_are_compared_structurally() {
        let premises = ["(Or(b, a), x)", "(Or(b, a), y)"];
        let mut the_context = context_with_premises(Config::default(), &premises);
        let conclusion = the_context.norm_from_string("(Or(a, b), And(x, y))").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.and_split(root).is_ok());
        assert_eq!(the_context.graph.premise_nodes(), vec![]);

        let mut config = Config::default();
        config.and_split_equality.value.input = Equality::Semantic;
        let mut the_context = context_with_premises(config, &premises);
        let conclusion = the_context.norm_from_string("(Or(a, b), And(x, y))").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.and_split(root).is_ok());
        assert_eq!(the_context.graph.premise_nodes().len(), 2);
    }

    #[test]
    fn splitting_a_premise_does_nothing() {
        let mut the_context = context_with_premises(Config::default(), &["(a, x)", "(b, x)"]);
        let conclusion = the_context.norm_from_string("(Or(a, b), x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.or_split(root).is_ok());
        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 2);

        for child in &children {
            assert!(the_context.or_split(*child).is_ok());
            assert!(the_context.graph.children(*child).unwrap().is_empty());
        }

        assert!(the_context.or_split(root).is_ok());
        assert_eq!(the_context.graph.children(root).unwrap(), children.as_slice());
    }
}

mod extensions {
    use super::*;

    #[test]
    fn weakening_matches_a_stronger_output() {
        let mut the_context = context_with_premises(Config::default(), &["(a, And(y, x))"]);
        let conclusion = the_context.norm_from_string("(a, x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);
        let x = the_context.formula_from_string("x").unwrap();
        let y = the_context.formula_from_string("y").unwrap();

        assert_eq!(the_context.weaken_output(root, &[Formula::Top, x, y]), Ok(true));

        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 1);

        let child = the_context.graph.node(children[0]).unwrap();
        assert!(child.premise);
        assert_eq!(child.operation, Operation::WeakenOutput);
        assert_eq!(
            child.norm.display(&the_context.atom_db).to_string(),
            "(a, And(x, y))"
        );
    }

    #[test]
    fn strengthening_matches_a_weaker_input() {
        let mut the_context = context_with_premises(Config::default(), &["(Or(b, a), x)"]);
        let conclusion = the_context.norm_from_string("(a, x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);
        let candidates = [
            Formula::Bottom,
            the_context.formula_from_string("c").unwrap(),
            the_context.formula_from_string("b").unwrap(),
        ];

        assert_eq!(the_context.strengthen_input(root, &candidates), Ok(true));

        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 1);
        assert_eq!(the_context.graph.state(root), Ok(NodeState::Closed));
    }

    #[test]
    fn unmatched_extensions_remain() {
        let mut the_context = context_with_premises(Config::default(), &[]);
        let conclusion = the_context.norm_from_string("(a, x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);
        let candidates = [
            the_context.formula_from_string("y").unwrap(),
            the_context.formula_from_string("And(x, y)").unwrap(),
            the_context.formula_from_string("z").unwrap(),
        ];

        assert_eq!(the_context.weaken_output(root, &candidates), Ok(false));

        // And(x, y) repeats the first weakening.
        assert_eq!(the_context.graph.children(root).unwrap().len(), 2);
        assert_eq!(the_context.graph.state(root), Ok(NodeState::ExpandedOpen));

        let free = the_context.graph.free_nodes().unwrap();
        assert_eq!(free.len(), 3);
        assert_eq!(free.last(), Some(&root));
    }

    #[test]
    fn equivalent_extensions_are_skipped() {
        let mut the_context = context_with_premises(Config::default(), &[]);
        let conclusion = the_context.norm_from_string("(a, x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);
        let candidates = [
            the_context.formula_from_string("y").unwrap(),
            the_context.formula_from_string("Or(y, And(y, z))").unwrap(),
            the_context.formula_from_string("And(y, Or(y, z))").unwrap(),
            the_context.formula_from_string("Or(x, z)").unwrap(),
            the_context.formula_from_string("z").unwrap(),
        ];

        assert_eq!(the_context.weaken_output(root, &candidates), Ok(false));

        let outputs: Vec<String> = the_context
            .graph
            .children(root)
            .unwrap()
            .iter()
            .map(|key| {
                let norm = the_context.graph.norm(*key).unwrap();
                norm.output.display(&the_context.atom_db).to_string()
            })
            .collect();
        assert_eq!(outputs, vec!["And(x, y)", "And(x, z)"]);
    }

    #[test]
    fn extensions_stop_at_a_premise_child() {
        let mut the_context = context_with_premises(Config::default(), &["(a, And(x, y))"]);
        let conclusion = the_context.norm_from_string("(a, x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);
        let y = the_context.formula_from_string("y").unwrap();
        let b = the_context.formula_from_string("b").unwrap();

        assert_eq!(the_context.weaken_output(root, &[y.clone()]), Ok(true));
        assert_eq!(the_context.weaken_output(root, &[y]), Ok(false));
        assert_eq!(the_context.strengthen_input(root, &[b]), Ok(false));
        assert_eq!(the_context.graph.children(root).unwrap().len(), 1);
    }
}

mod pruning {
    use super::*;

    #[test]
    fn pruning_keeps_the_matched_pair() {
        let mut the_context = context_with_premises(Config::default(), &["(c, x)"]);
        let conclusion = the_context.norm_from_string("(Or(a, b, c), x)").unwrap();
        let root = the_context.graph.reset_with_root(conclusion);

        assert!(the_context.or_split(root).is_ok());

        let children = the_context.graph.children(root).unwrap().to_vec();
        assert_eq!(children.len(), 2);

        let norms: Vec<Norm> = children
            .iter()
            .map(|key| the_context.graph.norm(*key).unwrap().clone())
            .collect();
        let c = the_context.formula_from_string("c").unwrap();
        let a_or_b = the_context.formula_from_string("Or(a, b)").unwrap();

        assert_eq!(norms[0].input, c);
        assert_eq!(norms[1].input, a_or_b);

        // The unmatched part is split in turn.
        assert_eq!(the_context.graph.children(children[1]).unwrap().len(), 2);
    }
}
