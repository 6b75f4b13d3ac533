use derive_more::{Display, Error};

use crate::{
    ast::Formula,
    evaluate::{Evaluate, EvaluationError, Valuation},
    log::targets,
    parser::{parse_formula, ParseError},
};

/// Whether `a` and `b` take the same value under every valuation of the
/// variables occurring in either of them.
///
/// This walks all 2ⁿ valuations, with n the number of distinct variables.
pub fn are_equivalent(a: &Formula, b: &Formula) -> Result<bool, EvaluationError> {
    let variables = a.variables().union(b.variables());

    log::debug!(target: targets::EQUIVALENCE, "Comparing {a} and {b} over {variables}");

    for valuation in Valuation::generate_all(&variables) {
        let left = a.evaluate(&valuation)?;
        let right = b.evaluate(&valuation)?;

        if left != right {
            log::debug!(
                target: targets::EQUIVALENCE,
                "{a} and {b} differ under {valuation}"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[display("malformed answer: {_0}")]
    Malformed(ParseError),
    #[display("{_0}")]
    Evaluation(EvaluationError),
}

/// Parses `candidate` and checks it against `reference`.
///
/// An answer that does not parse is an error, not a wrong answer.
pub fn check_answer(candidate: &str, reference: &Formula) -> Result<bool, AnswerError> {
    let candidate = parse_formula(candidate).map_err(AnswerError::Malformed)?;

    are_equivalent(&candidate, reference).map_err(AnswerError::Evaluation)
}
