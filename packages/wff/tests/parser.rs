use pretty_assertions::assert_eq;
use wff::{
    ast::Formula,
    parser::{parse_formula, parse_prefix, ParseError, MAX_DEPTH},
    symbols::{BinaryOperation, Constant, Variable},
};

fn var(name: char) -> Formula {
    Formula::variable(Variable::from_char(name).unwrap())
}

#[test]
fn prefixes() {
    // (input, parsed prefix, remainder)
    let test_cases: [(&str, Option<&str>, &str); 30] = [
        ("", None, ""),
        ("x", Some("x"), ""),
        ("T", Some("T"), ""),
        ("a", None, ""),
        (")", None, ""),
        ("x&", Some("x"), "&"),
        ("p&y", Some("p"), "&y"),
        ("F)", Some("F"), ")"),
        ("~x", Some("~x"), ""),
        ("~", None, ""),
        ("x", Some("x"), ""),
        ("x|y", Some("x"), "|y"),
        ("(p|x)", Some("(p|x)"), ""),
        ("((p|x))", None, ""),
        ("x->x", Some("x"), "->x"),
        ("(x->x)", Some("(x->x)"), ""),
        ("(x&y", None, ""),
        ("(T)", None, ""),
        ("(x&&y)", None, ""),
        ("-|x", None, ""),
        ("-->", None, ""),
        ("(q~p)", None, ""),
        ("(~F)", None, ""),
        ("(r&(y|(z->w)))", Some("(r&(y|(z->w)))"), ""),
        ("~~~x~~", Some("~~~x"), "~~"),
        ("(((~T->s)&s)|~y)", Some("(((~T->s)&s)|~y)"), ""),
        (
            "((p->q)->(~q->~p))->T)",
            Some("((p->q)->(~q->~p))"),
            "->T)",
        ),
        ("((p->q)->(~q->~p)->T)", None, ""),
        ("(x|y|z)", None, ""),
        (
            "~((~x->p)&~~(~F|~p))",
            Some("~((~x->p)&~~(~F|~p))"),
            "",
        ),
    ];

    for (input, expected, expected_remainder) in test_cases {
        match (parse_prefix(input), expected) {
            (Ok((formula, remainder)), Some(expected)) => {
                assert_eq!(formula.to_string(), expected, "prefix of {input:?}");
                assert_eq!(remainder, expected_remainder, "remainder of {input:?}");
            }
            (Err(_), None) => {}
            (result, expected) => {
                panic!("parsing {input:?} gave {result:?}, expected {expected:?}")
            }
        }
    }
}

#[test]
fn whole_formulas() {
    for input in [
        "x",
        "T",
        "~x",
        "(p|x)",
        "(x->x)",
        "(r&(y|(z->w)))",
        "(((~T->s)&s)|~y)",
        "~((~x->p)&~~(~F|~p))",
        "(p<>~~q)",
    ] {
        let formula = parse_formula(input).unwrap();
        assert_eq!(formula.serialize(), input);
    }
}

#[test]
fn errors() {
    let test_cases: [(&str, ParseError); 12] = [
        ("", ParseError::EmptyInput),
        ("~", ParseError::EmptyInput),
        (
            "a",
            ParseError::UnknownToken {
                remainder: "a".to_owned(),
            },
        ),
        (
            "x&",
            ParseError::TrailingCharacters {
                remainder: "&".to_owned(),
            },
        ),
        (
            "(p|x)x",
            ParseError::TrailingCharacters {
                remainder: "x".to_owned(),
            },
        ),
        (
            "(x|y|z)",
            ParseError::UnclosedParenthesis {
                remainder: "|z)".to_owned(),
            },
        ),
        (
            "(x&y",
            ParseError::UnclosedParenthesis {
                remainder: "".to_owned(),
            },
        ),
        (
            "((p|x))",
            ParseError::MissingConnective {
                remainder: ")".to_owned(),
            },
        ),
        (
            "(q~p)",
            ParseError::MissingConnective {
                remainder: "~p)".to_owned(),
            },
        ),
        (
            "(p-q)",
            ParseError::MissingConnective {
                remainder: "-q)".to_owned(),
            },
        ),
        (
            "(x&&y)",
            ParseError::UnknownToken {
                remainder: "&y)".to_owned(),
            },
        ),
        (
            "¬p",
            ParseError::UnknownToken {
                remainder: "¬p".to_owned(),
            },
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_formula(input), Err(expected), "parsing {input:?}");
    }
}

#[test]
fn error_carries_remainder() {
    let error = parse_formula("(p∧q)").unwrap_err();

    assert_eq!(error.remainder(), "∧q)");
    assert_eq!(
        error.to_string(),
        "expected a binary connective at the beginning of \"∧q)\""
    );
}

#[test]
fn tree_shape() {
    let formula: Formula = "(~p->(q<>T))".parse().unwrap();

    assert_eq!(
        formula,
        Formula::binary(
            BinaryOperation::Implication,
            Formula::negation(var('p')),
            Formula::binary(
                BinaryOperation::Equivalence,
                var('q'),
                Formula::constant(Constant::Tautology),
            ),
        )
    );
}

#[test]
fn two_character_connectives_win() {
    let (formula, remainder) = parse_prefix("(p->q)r").unwrap();

    assert_eq!(formula.to_string(), "(p->q)");
    assert_eq!(remainder, "r");
}

#[test]
fn nested_negations() {
    let formula = parse_formula("~~~x").unwrap();

    assert_eq!(formula.depth(), 3);
    assert_eq!(formula.to_string(), "~~~x");
}

#[test]
fn nesting_limit() {
    let deepest = format!("{}p", "~".repeat(MAX_DEPTH));
    assert_eq!(parse_formula(&deepest).unwrap().depth(), MAX_DEPTH);

    let too_deep = format!("{}p", "~".repeat(MAX_DEPTH + 1));
    assert_eq!(
        parse_formula(&too_deep),
        Err(ParseError::TooDeep {
            remainder: "p".to_owned(),
        })
    );
}

#[test]
fn very_deep_input_is_rejected() {
    let test_cases = [
        format!("{}p", "~".repeat(10_000)),
        format!("{}p", "~".repeat(200_000)),
        format!("{}p{}", "(p&".repeat(10_000), ")".repeat(10_000)),
        "(".repeat(50_000),
    ];

    for input in test_cases {
        assert!(
            matches!(parse_formula(&input), Err(ParseError::TooDeep { .. })),
            "{} characters",
            input.len()
        );
        assert!(parse_prefix(&input).is_err());
    }
}
