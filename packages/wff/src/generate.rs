//! Random well-formed formulas for exercises.

use derive_more::{Display, Error};
use rand::Rng;

use crate::{
    ast::Formula,
    log::targets,
    symbols::{binary_connectives, BinaryOperation, Variable, ALPHABET},
};

/// One in `NEGATION_ODDS` eligible nodes is negated.
const NEGATION_ODDS: u32 = 4;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[display("a formula needs at least one variable")]
    EmptySize,
    #[display("cannot generate {requested} distinct variables from an alphabet of {available}")]
    AlphabetExhausted { requested: usize, available: usize },
}

/// Builds a random formula with `size` variable leaves and `size - 1` binary
/// connectives. Leaves use distinct letters from [`ALPHABET`], in order, so
/// the result reads `p`, `q`, `r`, ... from left to right. Negations are added
/// on top of that budget.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Formula, GenerateError> {
    if size == 0 {
        return Err(GenerateError::EmptySize);
    }
    if size > ALPHABET.len() {
        return Err(GenerateError::AlphabetExhausted {
            requested: size,
            available: ALPHABET.len(),
        });
    }

    let mut pool = ALPHABET[..size].iter().filter_map(|&c| Variable::from_char(c));
    let connectives = binary_connectives().collect::<Vec<_>>();

    let formula = Generator {
        rng,
        pool: &mut pool,
        connectives: &connectives,
    }
    .formula(size - 1, false);

    log::debug!(target: targets::GENERATOR, "Generated {formula} with {size} variables");

    Ok(formula)
}

struct Generator<'a, R: ?Sized, I> {
    rng: &'a mut R,
    pool: &'a mut I,
    connectives: &'a [BinaryOperation],
}

impl<R, I> Generator<'_, R, I>
where
    R: Rng + ?Sized,
    I: Iterator<Item = Variable>,
{
    fn formula(&mut self, connectives: usize, negated: bool) -> Formula {
        if connectives == 0 {
            return match self.pool.next() {
                Some(variable) => Formula::variable(variable),
                // The pool holds exactly one variable per leaf.
                None => unreachable!("variable pool exhausted"),
            };
        }

        if !negated && self.rng.random_ratio(1, NEGATION_ODDS) {
            return Formula::negation(self.formula(connectives, true));
        }

        let remaining = connectives - 1;
        let operation = self.connectives[self.rng.random_range(0..self.connectives.len())];
        let left_share = self.rng.random_range(0..=remaining);

        let left = self.formula(left_share, false);
        let right = self.formula(remaining - left_share, false);

        Formula::binary(operation, left, right)
    }
}
