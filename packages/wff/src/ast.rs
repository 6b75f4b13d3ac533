use std::fmt::Display;

use indexmap::IndexSet;
use itertools::Itertools;
use termtree::Tree;

use crate::symbols::{
    Atom, BinaryOperation, Constant, Connective, Symbol, UnaryOperation, Variable,
};

/// A well-formed formula.
///
/// Every node has exactly the children its connective needs; a tree is never
/// modified once built.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Formula {
    Atom(Atom),
    Unary {
        operation: UnaryOperation,
        operand: Box<Formula>,
    },
    Binary {
        operation: BinaryOperation,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

/// Variables in the order they are first met when reading a formula left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet(pub IndexSet<Variable>);

impl VariableSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.0.contains(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.0.iter()
    }

    /// Appends the variables of `other` that are not already present.
    pub fn union(mut self, other: VariableSet) -> VariableSet {
        self.0.extend(other.0);
        self
    }
}

impl IntoIterator for VariableSet {
    type Item = Variable;
    type IntoIter = indexmap::set::IntoIter<Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Variable> for VariableSet {
    fn from_iter<T: IntoIterator<Item = Variable>>(iter: T) -> Self {
        VariableSet(iter.into_iter().collect())
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Formula {
    pub fn variable(variable: Variable) -> Self {
        Formula::Atom(Atom::Variable(variable))
    }

    pub fn constant(constant: Constant) -> Self {
        Formula::Atom(Atom::Constant(constant))
    }

    pub fn negation(operand: Formula) -> Self {
        Formula::Unary {
            operation: UnaryOperation::Negation,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operation: BinaryOperation, left: Formula, right: Formula) -> Self {
        Formula::Binary {
            operation,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The connective at the root, if the formula is not an atom.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Formula::Atom(_) => None,
            Formula::Unary { operation, .. } => Some(Connective::Unary(*operation)),
            Formula::Binary { operation, .. } => Some(Connective::Binary(*operation)),
        }
    }

    /// The symbol at the root: the leaf itself or the connective.
    pub fn symbol(&self) -> Symbol {
        match self {
            Formula::Atom(atom) => (*atom).into(),
            Formula::Unary { operation, .. } => Symbol::Connective(Connective::Unary(*operation)),
            Formula::Binary { operation, .. } => {
                Symbol::Connective(Connective::Binary(*operation))
            }
        }
    }

    /// The free variables of the formula. Truth constants are not variables.
    pub fn variables(&self) -> VariableSet {
        let mut variables = VariableSet::default();
        self.collect_variables(&mut variables.0);
        variables
    }

    fn collect_variables(&self, variables: &mut IndexSet<Variable>) {
        match self {
            Formula::Atom(Atom::Variable(variable)) => {
                variables.insert(*variable);
            }
            Formula::Atom(Atom::Constant(_)) => {}
            Formula::Unary { operand, .. } => operand.collect_variables(variables),
            Formula::Binary { left, right, .. } => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    /// Number of variable leaves, counting repeated variables once per occurrence.
    pub fn variable_occurrences(&self) -> usize {
        match self {
            Formula::Atom(Atom::Variable(_)) => 1,
            Formula::Atom(Atom::Constant(_)) => 0,
            Formula::Unary { operand, .. } => operand.variable_occurrences(),
            Formula::Binary { left, right, .. } => {
                left.variable_occurrences() + right.variable_occurrences()
            }
        }
    }

    pub fn binary_connective_count(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Unary { operand, .. } => operand.binary_connective_count(),
            Formula::Binary { left, right, .. } => {
                1 + left.binary_connective_count() + right.binary_connective_count()
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Unary { operand, .. } => 1 + operand.depth(),
            Formula::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// The canonical, fully parenthesized text of the formula. Parsing it gives
    /// back an identical tree.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn get_tree(&self) -> Tree<String> {
        let symbol = self.symbol().to_string();

        match self {
            Formula::Atom(_) => Tree::new(symbol),
            Formula::Unary { operand, .. } => {
                Tree::new(symbol).with_leaves(vec![operand.get_tree()])
            }
            Formula::Binary { left, right, .. } => {
                Tree::new(symbol).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }
}

impl From<Variable> for Formula {
    fn from(variable: Variable) -> Self {
        Formula::variable(variable)
    }
}

impl From<Constant> for Formula {
    fn from(constant: Constant) -> Self {
        Formula::constant(constant)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Unary { operation, operand } => write!(f, "{}{operand}", operation.token()),
            Formula::Binary {
                operation,
                left,
                right,
            } => write!(f, "({left}{}{right})", operation.token()),
        }
    }
}
