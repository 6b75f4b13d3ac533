//! The alphabet of the formula language: variables, the two truth constants and
//! the five connectives, together with their surface tokens.

use std::fmt;

use derive_more::Display;
use strum::{EnumIter, IntoEnumIterator};

/// Variable letters, in the order the generator hands them out.
pub const ALPHABET: [char; 11] = ['p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z'];

/// A propositional variable, one of the reserved letters in [`ALPHABET`].
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(char);

impl Variable {
    pub fn from_char(c: char) -> Option<Self> {
        matches!(c, 'p'..='z').then_some(Variable(c))
    }

    pub fn name(self) -> char {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Constant {
    Tautology,
    Contradiction,
}

impl Constant {
    pub fn symbol(self) -> char {
        match self {
            Constant::Tautology => 'T',
            Constant::Contradiction => 'F',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Constant::iter().find(|constant| constant.symbol() == c)
    }

    pub fn value(self) -> bool {
        self == Constant::Tautology
    }
}

/// Anything that can sit in a leaf of a formula.
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Atom {
    Variable(Variable),
    Constant(Constant),
}

impl Atom {
    pub fn from_char(c: char) -> Option<Self> {
        Variable::from_char(c)
            .map(Atom::Variable)
            .or_else(|| Constant::from_char(c).map(Atom::Constant))
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum UnaryOperation {
    Negation,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum BinaryOperation {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl UnaryOperation {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOperation::Negation => "~",
        }
    }

    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOperation::Negation => !value,
        }
    }
}

impl BinaryOperation {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperation::Conjunction => "&",
            BinaryOperation::Disjunction => "|",
            BinaryOperation::Implication => "->",
            BinaryOperation::Equivalence => "<>",
        }
    }

    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOperation::Conjunction => left && right,
            BinaryOperation::Disjunction => left || right,
            BinaryOperation::Implication => !left || right,
            BinaryOperation::Equivalence => left == right,
        }
    }
}

/// The closed set of logical connectives.
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Connective {
    Unary(UnaryOperation),
    Binary(BinaryOperation),
}

impl Connective {
    pub const NEGATION: Connective = Connective::Unary(UnaryOperation::Negation);

    pub fn all() -> impl Iterator<Item = Connective> {
        UnaryOperation::iter()
            .map(Connective::Unary)
            .chain(BinaryOperation::iter().map(Connective::Binary))
    }

    pub fn token(self) -> &'static str {
        match self {
            Connective::Unary(operation) => operation.token(),
            Connective::Binary(operation) => operation.token(),
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Connective::Unary(_) => 1,
            Connective::Binary(_) => 2,
        }
    }

    /// Looks up a connective whose token is exactly one character long.
    pub fn one_char(token: &str) -> Option<Self> {
        (token.chars().count() == 1)
            .then(|| lookup_connective(token))
            .flatten()
    }

    /// Looks up a connective whose token is exactly two characters long.
    pub fn two_char(token: &str) -> Option<Self> {
        (token.chars().count() == 2)
            .then(|| lookup_connective(token))
            .flatten()
    }
}

/// A single symbol of the language.
#[derive(Debug, Display, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Symbol {
    Variable(Variable),
    Constant(Constant),
    Connective(Connective),
}

/// Whether `token` is a single leaf symbol: a reserved variable letter or a
/// truth constant.
pub fn is_variable(token: &str) -> bool {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Atom::from_char(c).is_some(),
        _ => false,
    }
}

pub fn lookup_connective(token: &str) -> Option<Connective> {
    Connective::all().find(|connective| connective.token() == token)
}

/// Resolves the connective at the beginning of `input`, trying the two-character
/// tokens before the one-character ones. Returns the connective and the text
/// following its token.
pub fn lookup_connective_prefix(input: &str) -> Option<(Connective, &str)> {
    let two = input
        .get(..2)
        .and_then(|token| Connective::two_char(token).map(|c| (c, &input[2..])));

    two.or_else(|| {
        let first = input.chars().next()?;
        let (token, rest) = input.split_at(first.len_utf8());
        Connective::one_char(token).map(|c| (c, rest))
    })
}

pub fn binary_connectives() -> impl Iterator<Item = BinaryOperation> {
    BinaryOperation::iter()
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<Variable> for Atom {
    fn from(variable: Variable) -> Self {
        Atom::Variable(variable)
    }
}

impl From<Constant> for Atom {
    fn from(constant: Constant) -> Self {
        Atom::Constant(constant)
    }
}

impl From<Atom> for Symbol {
    fn from(atom: Atom) -> Self {
        match atom {
            Atom::Variable(v) => Symbol::Variable(v),
            Atom::Constant(c) => Symbol::Constant(c),
        }
    }
}
