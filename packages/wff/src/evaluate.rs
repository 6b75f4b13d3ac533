use std::fmt;

use derive_more::{Display, Error};
use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    ast::{Formula, VariableSet},
    log::targets,
    symbols::{Atom, Variable},
};

/// An assignment of truth values to variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Valuation(pub IndexMap<Variable, bool>);

impl Valuation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every total assignment over `variables`, in truth-table order: counting
    /// up from all-false with the last variable changing fastest.
    ///
    /// A set holds at most `ALPHABET.len()` distinct variables, so the count
    /// always fits.
    pub fn generate_all(variables: &VariableSet) -> impl Iterator<Item = Valuation> {
        let variables = variables.iter().copied().collect::<Vec<_>>();
        let n = variables.len();
        let valuation_count = 1usize << n;

        (0..valuation_count).map(move |i| {
            let mut valuation = Valuation::new();
            for (position, variable) in variables.iter().enumerate() {
                let bit = n - 1 - position;
                valuation.insert(*variable, (i >> bit) & 1 == 1);
            }
            valuation
        })
    }

    pub fn insert(&mut self, variable: Variable, value: bool) -> Option<bool> {
        self.0.insert(variable, value)
    }

    pub fn get(&self, variable: &Variable) -> Option<bool> {
        self.0.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &bool)> {
        self.0.iter()
    }
}

impl FromIterator<(Variable, bool)> for Valuation {
    fn from_iter<T: IntoIterator<Item = (Variable, bool)>>(iter: T) -> Self {
        Valuation(iter.into_iter().collect())
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assignments = self
            .0
            .iter()
            .map(|(variable, &value)| format!("{variable}: {}", truth_symbol(value)))
            .join(", ");

        write!(f, "{{{assignments}}}")
    }
}

/// `T` or `F`, as shown in truth tables.
pub fn truth_symbol(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

/// See [`Valuation::generate_all`].
pub fn all_valuations(variables: &VariableSet) -> impl Iterator<Item = Valuation> {
    Valuation::generate_all(variables)
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[display("no value assigned to variable {variable}")]
    UnboundVariable { variable: Variable },
}

pub trait Evaluate {
    fn evaluate(&self, valuation: &Valuation) -> Result<bool, EvaluationError>;
}

impl Evaluate for Variable {
    fn evaluate(&self, valuation: &Valuation) -> Result<bool, EvaluationError> {
        valuation.get(self).ok_or_else(|| {
            log::debug!(target: targets::EVALUATION, "{self} is unbound in {valuation}");
            EvaluationError::UnboundVariable { variable: *self }
        })
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, valuation: &Valuation) -> Result<bool, EvaluationError> {
        match self {
            Formula::Atom(Atom::Constant(constant)) => Ok(constant.value()),
            Formula::Atom(Atom::Variable(variable)) => variable.evaluate(valuation),
            Formula::Unary { operation, operand } => {
                Ok(operation.apply(operand.evaluate(valuation)?))
            }
            Formula::Binary {
                operation,
                left,
                right,
            } => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;

                Ok(operation.apply(left, right))
            }
        }
    }
}

/// The value of `formula` under each of `valuations`, in order.
pub fn truth_values<'a>(
    formula: &Formula,
    valuations: impl IntoIterator<Item = &'a Valuation>,
) -> Result<Vec<bool>, EvaluationError> {
    valuations
        .into_iter()
        .map(|valuation| formula.evaluate(valuation))
        .collect()
}
