use rand::{rngs::StdRng, SeedableRng};
use wff::{
    equivalence::{are_equivalent, check_answer, AnswerError},
    generate::generate,
    parser::{parse_formula, ParseError},
};

#[test]
fn equivalences() {
    let test_cases = [
        ("~(~p&q)", "(p|~q)", true),
        ("~(~p&q)", "~(q&~p)", true),
        ("~(~p&q)", "(((p&q)|(p&~q))|(~p&~q))", true),
        ("~(~p&q)", "(p|q)", false),
        ("(p->q)", "(~q->~p)", true),
        ("(p->q)", "(q->p)", false),
        ("(p<>q)", "((p->q)&(q->p))", true),
        ("(p|~p)", "T", true),
        ("(p&~p)", "F", true),
        ("p", "(p&(q|~q))", true),
        ("p", "q", false),
    ];

    for (a, b, expected) in test_cases {
        let a = parse_formula(a).unwrap();
        let b = parse_formula(b).unwrap();

        assert_eq!(are_equivalent(&a, &b), Ok(expected), "{a} ~ {b}");
        assert_eq!(are_equivalent(&b, &a), Ok(expected), "{b} ~ {a}");
    }
}

#[test]
fn reflexive_on_generated_formulas() {
    let mut rng = StdRng::seed_from_u64(7);

    for size in 1..=6 {
        for _ in 0..10 {
            let formula = generate(size, &mut rng).unwrap();
            assert_eq!(are_equivalent(&formula, &formula), Ok(true), "{formula}");
        }
    }
}

#[test]
fn symmetric_on_generated_formulas() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let a = generate(3, &mut rng).unwrap();
        let b = generate(3, &mut rng).unwrap();

        assert_eq!(are_equivalent(&a, &b), are_equivalent(&b, &a), "{a} ~ {b}");
    }
}

#[test]
fn answers() {
    let reference = parse_formula("~(~p&q)").unwrap();

    assert_eq!(check_answer("(p|~q)", &reference), Ok(true));
    assert_eq!(check_answer("~(q&~p)", &reference), Ok(true));
    assert_eq!(
        check_answer("(((p&q)|(p&~q))|(~p&~q))", &reference),
        Ok(true)
    );
    assert_eq!(check_answer("(p|q)", &reference), Ok(false));
}

#[test]
fn answers_with_extra_variables() {
    let reference = parse_formula("(p&q)").unwrap();

    assert_eq!(check_answer("((p&q)&(r|~r))", &reference), Ok(true));
    assert_eq!(check_answer("((p&q)&r)", &reference), Ok(false));
}

#[test]
fn malformed_answers() {
    let reference = parse_formula("(p&q)").unwrap();

    assert_eq!(
        check_answer("(p&q", &reference),
        Err(AnswerError::Malformed(ParseError::UnclosedParenthesis {
            remainder: "".to_owned()
        }))
    );
    assert_eq!(
        check_answer("", &reference),
        Err(AnswerError::Malformed(ParseError::EmptyInput))
    );
    assert!(matches!(
        check_answer("p & q", &reference),
        Err(AnswerError::Malformed(ParseError::TrailingCharacters { .. }))
    ));
}
