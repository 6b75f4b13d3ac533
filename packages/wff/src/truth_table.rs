use std::fmt::Display;

use crate::{
    ast::Formula,
    evaluate::{truth_symbol, Evaluate, EvaluationError, Valuation},
    symbols::Variable,
};

/// The truth table of a single formula: one column per variable, in the order
/// the variables first occur, followed by the value of the formula.
#[derive(Debug, Clone)]
pub struct TruthTable {
    formula: Formula,
    variables: Vec<Variable>,
    rows: Vec<(Valuation, bool)>,
}

impl TruthTable {
    pub fn new(formula: &Formula) -> Result<Self, EvaluationError> {
        let variable_set = formula.variables();
        let variables = variable_set.iter().copied().collect::<Vec<_>>();

        let rows = Valuation::generate_all(&variable_set)
            .map(|valuation| {
                let value = formula.evaluate(&valuation)?;
                Ok((valuation, value))
            })
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        Ok(TruthTable {
            formula: formula.clone(),
            variables,
            rows,
        })
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[(Valuation, bool)] {
        &self.rows
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|&(_, value)| value)
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut header = String::from("|");
        for variable in &self.variables {
            header.push_str(&format!(" {variable} |"));
        }
        header.push_str(&format!(" {}", self.formula));

        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for (valuation, value) in &self.rows {
            write!(f, "|")?;
            for (_, &assigned) in valuation.iter() {
                write!(f, " {} |", truth_symbol(assigned))?;
            }
            writeln!(f, " {}", truth_symbol(*value))?;
        }

        Ok(())
    }
}
