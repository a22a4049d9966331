use otter_norms::{config::Config, context::Context, structures::formula::Formula};

mod normal_forms {
    use super::*;

    #[test]
    fn dnf_distributes() {
        let mut the_context = Context::from_config(Config::default());
        let formula = the_context.formula_from_string("And(a, Or(b, c))").unwrap();
        let expected = the_context
            .formula_from_string("Or(And(a, b), And(a, c))")
            .unwrap();

        assert_eq!(formula.to_dnf(), expected);
        assert!(formula.to_dnf().equivalent(&formula));
    }

    #[test]
    fn cnf_distributes() {
        let mut the_context = Context::from_config(Config::default());
        let formula = the_context.formula_from_string("Or(a, And(b, c))").unwrap();
        let expected = the_context
            .formula_from_string("And(Or(a, b), Or(a, c))")
            .unwrap();

        assert_eq!(formula.to_cnf(), expected);
    }

    #[test]
    fn negations_are_pushed_to_atoms() {
        let mut the_context = Context::from_config(Config::default());
        let formula = the_context.formula_from_string("~And(a, ~b)").unwrap();
        let expected = the_context.formula_from_string("Or(~a, b)").unwrap();

        assert_eq!(formula.to_dnf(), expected);
        assert_eq!(formula.to_cnf(), expected);
    }

    #[test]
    fn normal_forms_are_fixed() {
        let mut the_context = Context::from_config(Config::default());
        let disjunction = the_context.formula_from_string("Or(a, b)").unwrap();
        let conjunction = the_context.formula_from_string("And(x, y)").unwrap();

        assert_eq!(disjunction.to_dnf(), disjunction);
        assert_eq!(disjunction.to_cnf(), disjunction);
        assert_eq!(conjunction.to_dnf(), conjunction);
        assert_eq!(conjunction.to_cnf(), conjunction);
    }

    #[test]
    fn contradictions_and_tautologies() {
        let mut the_context = Context::from_config(Config::default());
        let contradiction = the_context
            .formula_from_string("And(Or(a, b), ~a, ~b)")
            .unwrap();
        let tautology = the_context.formula_from_string("Or(a, ~a)").unwrap();

        assert_eq!(contradiction.to_dnf(), Formula::Bottom);
        assert!(contradiction.equivalent(&Formula::Bottom));
        assert_eq!(tautology, Formula::Top);
    }
}

mod equivalence {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        let mut the_context = Context::from_config(Config::default());
        let left = the_context.formula_from_string("Or(a, c)").unwrap();
        let right = the_context.formula_from_string("Or(c, a)").unwrap();

        assert_ne!(left, right);
        assert!(left.equivalent(&right));
    }

    #[test]
    fn distinct_atoms() {
        let mut the_context = Context::from_config(Config::default());
        let a = the_context.formula_from_string("a").unwrap();
        let b = the_context.formula_from_string("b").unwrap();

        assert!(!a.equivalent(&b));
        assert!(!a.equivalent(&Formula::or([a.clone(), b.clone()])));
        assert!(Formula::Top.equivalent(&Formula::or([b.clone(), b.negate()])));
    }
}

mod display {
    use super::*;

    #[test]
    fn canonical_text() {
        let mut the_context = Context::from_config(Config::default());
        for text in ["1", "0", "a", "~a", "And(x, y)", "Or(a, ~b, And(c, d))", "~Or(a, b)"] {
            let formula = the_context.formula_from_string(text).unwrap();
            assert_eq!(formula.display(&the_context.atom_db).to_string(), text);
        }
    }

    #[test]
    fn not_is_written_with_a_tilde() {
        let mut the_context = Context::from_config(Config::default());
        let formula = the_context.formula_from_string("Not(And(a, b))").unwrap();

        assert_eq!(
            formula.display(&the_context.atom_db).to_string(),
            "~And(a, b)"
        );
    }
}
