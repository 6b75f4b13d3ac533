use std::fmt::Display;

use indexmap::IndexMap;
use rand::{seq::index::sample, Rng};
use wff::{
    ast::Formula,
    equivalence::{check_answer, AnswerError},
    generate::{generate, GenerateError},
    parser::{parse_formula, ParseError},
    symbols::{Atom, BinaryOperation, Constant, UnaryOperation, Variable},
};

use crate::store::ExerciseRecord;

const NOUNS: [&str; 13] = [
    "Water", "Bread", "Pizza", "Celery", "Pasta", "Soda", "Cheese", "Milk", "Chocolate", "Tea",
    "Coffee", "Sugar", "Salt",
];

const ADJECTIVES: [&str; 17] = [
    "Red", "Green", "Blue", "Yellow", "Orange", "Purple", "Violet", "Hot", "Cold", "Warm",
    "Tasty", "Bland", "Spicy", "Sour", "Sweet", "Salty", "Mild",
];

/// An English sentence of the form "<noun> is <adjective>".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
    pub noun: String,
    pub adjective: String,
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is {}", self.noun, self.adjective)
    }
}

/// A translation exercise: an English prompt and the formula it stands for.
#[derive(Debug, Clone)]
pub struct Exercise {
    formula: Formula,
    prompt: String,
    propositions: IndexMap<Variable, Proposition>,
}

impl Exercise {
    /// A random exercise with `difficulty` variables.
    pub fn generate<R: Rng + ?Sized>(
        difficulty: usize,
        rng: &mut R,
    ) -> Result<Self, GenerateError> {
        let formula = generate(difficulty, rng)?;
        let propositions = assign_propositions(&formula, rng);
        let prompt = render(&formula, &propositions);

        Ok(Exercise {
            formula,
            prompt,
            propositions,
        })
    }

    pub fn from_record(record: &ExerciseRecord) -> Result<Self, ParseError> {
        Ok(Exercise {
            formula: parse_formula(&record.formula)?,
            prompt: record.prompt.clone(),
            propositions: IndexMap::new(),
        })
    }

    pub fn to_record(&self) -> ExerciseRecord {
        ExerciseRecord {
            prompt: self.prompt.clone(),
            formula: self.formula.serialize(),
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The English meaning of each variable, empty for stored exercises.
    pub fn propositions(&self) -> &IndexMap<Variable, Proposition> {
        &self.propositions
    }

    /// Whether `answer` is logically equivalent to the exercise's formula.
    /// Whitespace in the answer is ignored.
    pub fn check_answer(&self, answer: &str) -> Result<bool, AnswerError> {
        check_answer(&strip_whitespace(answer), &self.formula)
    }
}

impl Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}

pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn assign_propositions<R: Rng + ?Sized>(
    formula: &Formula,
    rng: &mut R,
) -> IndexMap<Variable, Proposition> {
    let variables = formula.variables();
    let nouns = sample(rng, NOUNS.len(), variables.len());
    let adjectives = sample(rng, ADJECTIVES.len(), variables.len());

    variables
        .into_iter()
        .zip(nouns.into_iter().zip(adjectives))
        .map(|(variable, (noun, adjective))| {
            (
                variable,
                Proposition {
                    noun: NOUNS[noun].to_owned(),
                    adjective: ADJECTIVES[adjective].to_owned(),
                },
            )
        })
        .collect()
}

/// Reads `formula` out in English, using `propositions` for its variables.
/// The parentheses around the whole sentence are left out.
pub fn render(formula: &Formula, propositions: &IndexMap<Variable, Proposition>) -> String {
    let sentence = render_inner(formula, propositions);

    match sentence.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) if formula.connective().is_some() => inner.to_owned(),
        _ => sentence,
    }
}

fn render_inner(formula: &Formula, propositions: &IndexMap<Variable, Proposition>) -> String {
    match formula {
        Formula::Atom(Atom::Variable(variable)) => match propositions.get(variable) {
            Some(proposition) => format!("'{proposition}'"),
            None => variable.to_string(),
        },
        Formula::Atom(Atom::Constant(Constant::Tautology)) => "true".to_owned(),
        Formula::Atom(Atom::Constant(Constant::Contradiction)) => "false".to_owned(),
        Formula::Unary {
            operation: UnaryOperation::Negation,
            operand,
        } => format!("({} is false)", render_inner(operand, propositions)),
        Formula::Binary {
            operation,
            left,
            right,
        } => {
            let l = render_inner(left, propositions);
            let r = render_inner(right, propositions);

            match operation {
                BinaryOperation::Conjunction => format!("({l} and {r})"),
                BinaryOperation::Disjunction => format!("({l} or {r})"),
                BinaryOperation::Implication => format!("(If {l}, then {r})"),
                BinaryOperation::Equivalence => format!("({l} if and only if {r})"),
            }
        }
    }
}
