use indexmap::indexmap;
use wff::{
    are_equivalent, parse_formula,
    symbols::{Atom, Constant, Variable},
    Evaluate, Formula, ParseError, Valuation,
};

fn var(name: char) -> Variable {
    Variable::from_char(name).unwrap()
}

#[test]
fn negated_conjunction() {
    let formula = parse_formula("~(p&q)").unwrap();

    let valuation = Valuation(indexmap! { var('p') => true, var('q') => false });
    assert_eq!(formula.evaluate(&valuation), Ok(true));

    let valuation = Valuation(indexmap! { var('p') => true, var('q') => true });
    assert_eq!(formula.evaluate(&valuation), Ok(false));
}

#[test]
fn de_morgan() {
    let a = parse_formula("~(~p&q)").unwrap();

    assert_eq!(are_equivalent(&a, &parse_formula("(p|~q)").unwrap()), Ok(true));
    assert_eq!(are_equivalent(&a, &parse_formula("(p|q)").unwrap()), Ok(false));
}

#[test]
fn incomplete_and_overlong_inputs() {
    assert!(matches!(
        parse_formula("x&"),
        Err(ParseError::TrailingCharacters { .. })
    ));
    assert!(parse_formula("(x|y|z)").is_err());
}

#[test]
fn constants_are_not_free() {
    let variables = parse_formula("(T&p)").unwrap().variables();

    assert_eq!(variables.len(), 1);
    assert!(variables.contains(&var('p')));
    assert_eq!(variables.to_string(), "{p}");
}

#[test]
fn boundaries() {
    assert_eq!(parse_formula(""), Err(ParseError::EmptyInput));
    assert_eq!(parse_formula("q"), Ok(Formula::variable(var('q'))));
    assert_eq!(
        parse_formula("F"),
        Ok(Formula::Atom(Atom::Constant(Constant::Contradiction)))
    );

    let formula = parse_formula("~~~x").unwrap();
    assert_eq!(
        formula.evaluate(&Valuation(indexmap! { var('x') => false })),
        Ok(true)
    );
}

#[test]
fn tree_rendering() {
    let formula = parse_formula("(~p->q)").unwrap();
    let tree = formula.get_tree().to_string();

    let lines = tree.lines().collect::<Vec<_>>();
    assert_eq!(lines.first(), Some(&"->"));
    assert!(lines.iter().any(|line| line.ends_with('~')));
    assert!(lines.iter().any(|line| line.ends_with('p')));
    assert!(lines.iter().any(|line| line.ends_with('q')));
}

#[test]
fn formulas_can_be_shared_across_threads() {
    let formula = parse_formula("((p->q)<>(~q->~p))").unwrap();

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| are_equivalent(&formula, &formula)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    });
}
