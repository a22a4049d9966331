use otter_norms::{
    config::Config,
    context::Context,
    db::graph::{NodeState, Operation},
    reports::Report,
    types::err::{ErrorKind, SearchError},
};

fn context_from_problem(config: Config, problem: &str) -> Context {
    let mut the_context = Context::from_config(config);
    assert!(the_context.read_problem(problem.as_bytes()).is_ok());
    the_context
}

fn missing_strings(context: &Context) -> Vec<String> {
    context
        .missing_premises()
        .unwrap()
        .iter()
        .map(|norm| norm.display(&context.atom_db).to_string())
        .collect()
}

const WORKED_EXAMPLE: &str = "
conclusion (Or(a, b), And(x, y))
premise (Or(a, b), x)
premise (a, y)
premise (b, y)
";

const MISSING_B_Y: &str = "
conclusion (Or(a, b), And(x, y))
premise (Or(a, b), x)
premise (a, y)
";

mod proved {
    use super::*;

    #[test]
    fn worked_example() {
        let mut the_context = context_from_problem(Config::default(), WORKED_EXAMPLE);

        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(the_context.report(), Report::Proved);

        let root = the_context.graph.root().unwrap();
        assert_eq!(the_context.graph.state(root), Ok(NodeState::Closed));
        assert_eq!(the_context.graph.free_nodes(), Ok(vec![]));

        let used = the_context.used_premises();
        assert_eq!(used.len(), 4);
        assert_eq!(
            used.iter()
                .filter(|(_, operation)| *operation == Operation::AndSplit)
                .count(),
            2
        );
        assert_eq!(
            used.iter()
                .filter(|(_, operation)| *operation == Operation::StrengthenInput)
                .count(),
            2
        );
    }

    #[test]
    fn conclusion_is_a_premise() {
        let problem = "
conclusion (Or(a, b), x)
premise (Or(b, a), x)
";
        let mut the_context = context_from_problem(Config::default(), problem);

        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(the_context.graph.len(), 1);

        let used = the_context.used_premises();
        assert_eq!(used.len(), 1);
        assert_eq!(used[0].1, Operation::Root);
    }

    #[test]
    fn and_split_closes_the_root() {
        let problem = "
conclusion (a, And(x, y))
premise (a, x)
premise (a, y)
";
        let mut the_context = context_from_problem(Config::default(), problem);

        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(the_context.counters.and_split_nodes, 2);
        assert_eq!(the_context.counters.premise_matches, 2);
        assert_eq!(the_context.counters.weaken_nodes, 0);
    }

    #[test]
    fn premise_nodes_have_no_children() {
        let mut the_context = context_from_problem(Config::default(), WORKED_EXAMPLE);
        assert_eq!(the_context.search(), Ok(Report::Proved));

        for key in the_context.graph.premise_nodes() {
            assert!(the_context.graph.children(key).unwrap().is_empty());
        }
    }
}

mod unproved {
    use super::*;

    #[test]
    fn missing_premise() {
        let mut the_context = context_from_problem(Config::default(), MISSING_B_Y);

        assert_eq!(the_context.search(), Ok(Report::Unproved));
        assert_eq!(missing_strings(&the_context), vec!["(b, y)"]);

        let root = the_context.graph.root().unwrap();
        assert_eq!(the_context.graph.state(root), Ok(NodeState::Closed));
    }

    #[test]
    fn missing_premises_complete_a_derivation() {
        let mut the_context = context_from_problem(Config::default(), MISSING_B_Y);
        assert_eq!(the_context.search(), Ok(Report::Unproved));

        let missing = the_context.missing_premises().unwrap().to_vec();
        for premise in missing {
            the_context.add_premise(premise);
        }

        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(
            the_context.missing_premises(),
            Err(ErrorKind::InvalidState)
        );
    }

    #[test]
    fn missing_premises_of_later_rounds() {
        let problem = "
conclusion (Or(a, b, c), x)
premise (Or(b, c), And(x, y, z))
premise (c, And(x, y, z))
";
        let mut the_context = context_from_problem(Config::default(), problem);

        assert_eq!(the_context.search(), Ok(Report::Unproved));
        assert_eq!(missing_strings(&the_context), vec!["(a, x)", "(b, x)"]);
        assert_eq!(the_context.counters.rounds, 3);
        assert_eq!(the_context.premises().len(), 2);

        let missing = the_context.missing_premises().unwrap().to_vec();
        for premise in missing {
            the_context.add_premise(premise);
        }

        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(the_context.counters.rounds, 1);
    }

    #[test]
    fn missing_premises_complete_derivations() {
        let conclusions = ["(Or(a, b, c), x)", "(Or(a, b), And(x, y))", "(a, And(x, y, z))"];
        let premises = [
            "(Or(b, c), And(x, y, z))",
            "(c, And(x, y, z))",
            "(a, y)",
            "(Or(a, b), x)",
            "(b, And(y, z))",
        ];

        for conclusion in conclusions {
            for first in 0..premises.len() {
                for second in first + 1..premises.len() {
                    let mut the_context = Context::from_config(Config::default());
                    let norm = the_context.norm_from_string(conclusion).unwrap();
                    the_context.set_conclusion(norm);
                    for premise in [premises[first], premises[second]] {
                        let norm = the_context.norm_from_string(premise).unwrap();
                        the_context.add_premise(norm);
                    }

                    if the_context.search() != Ok(Report::Unproved) {
                        continue;
                    }

                    let missing = the_context.missing_premises().unwrap().to_vec();
                    for premise in missing {
                        the_context.add_premise(premise);
                    }
                    assert_eq!(the_context.search(), Ok(Report::Proved), "{conclusion}");
                }
            }
        }
    }

    #[test]
    fn no_premises() {
        let mut the_context = context_from_problem(Config::default(), "conclusion (a, x)");

        assert_eq!(the_context.search(), Ok(Report::Unproved));
        assert_eq!(missing_strings(&the_context), vec!["(a, x)"]);
        assert_eq!(the_context.used_premises().len(), 1);
    }

    #[test]
    fn completion() {
        let problem = "
conclusion (a, x)
premise (a, And(x, y))
";
        let mut the_context = context_from_problem(Config::default(), problem);
        assert_eq!(the_context.search(), Ok(Report::Proved));
        assert_eq!(the_context.used_premises()[0].1, Operation::WeakenOutput);

        let mut config = Config::default();
        config.completion.value = false;
        let mut the_context = context_from_problem(config, problem);
        assert_eq!(the_context.search(), Ok(Report::Unproved));
        assert_eq!(missing_strings(&the_context), vec!["(a, x)"]);
        assert_eq!(the_context.counters.candidates, (0, 0));
    }
}

mod context {
    use super::*;

    #[test]
    fn no_conclusion() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            the_context.search(),
            Err(ErrorKind::Search(SearchError::NoConclusion))
        );
    }

    #[test]
    fn missing_premises_before_search() {
        let the_context = context_from_problem(Config::default(), MISSING_B_Y);

        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            the_context.missing_premises(),
            Err(ErrorKind::InvalidState)
        );
    }

    #[test]
    fn searches_are_deterministic() {
        let mut first = context_from_problem(Config::default(), MISSING_B_Y);
        let mut second = context_from_problem(Config::default(), MISSING_B_Y);

        assert_eq!(first.search(), second.search());
        assert_eq!(
            first.graph.dot(&first.atom_db),
            second.graph.dot(&second.atom_db)
        );
        assert_eq!(missing_strings(&first), missing_strings(&second));
    }

    #[test]
    fn repeated_searches_agree() {
        let mut the_context = context_from_problem(Config::default(), MISSING_B_Y);

        assert_eq!(the_context.search(), Ok(Report::Unproved));
        let graph = the_context.graph.dot(&the_context.atom_db);
        let total = the_context.counters.total_nodes();

        assert_eq!(the_context.search(), Ok(Report::Unproved));
        assert_eq!(the_context.graph.dot(&the_context.atom_db), graph);
        assert_eq!(the_context.counters.total_nodes(), total);
        assert_eq!(missing_strings(&the_context), vec!["(b, y)"]);
    }
}
