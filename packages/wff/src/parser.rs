//! Parser for the fully parenthesized formula syntax:
//!
//! ```text
//! Formula := Variable | Constant
//!          | '~' Formula
//!          | '(' Formula Connective_bin Formula ')'
//! ```
//!
//! Each step consumes a prefix of its input and leaves whatever it did not
//! read in the stream, so the caller of a sub-formula continues exactly where
//! it stopped.

use std::str::FromStr;

use derive_more::{Display, Error};
use winnow::{
    combinator::{alt, cut_err, eof, preceded, terminated},
    error::{ErrMode, ErrorKind, ParserError},
    stream::Stream,
    token::{any, take},
    PResult, Parser, Stateful,
};

use crate::{
    ast::Formula,
    log::targets,
    symbols::{Atom, BinaryOperation, Connective, UnaryOperation},
};

/// Deepest nesting of negations and parentheses accepted, counted the way
/// [`Formula::depth`] counts it.
pub const MAX_DEPTH: usize = 256;

/// Why a string is not a well-formed formula. Every variant except
/// [`ParseError::EmptyInput`] carries the text at which parsing stopped.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[display("empty input")]
    EmptyInput,
    #[display("unknown token at the beginning of \"{remainder}\"")]
    UnknownToken { remainder: String },
    #[display("expected a binary connective at the beginning of \"{remainder}\"")]
    MissingConnective { remainder: String },
    #[display("expected a closing parenthesis at the beginning of \"{remainder}\"")]
    UnclosedParenthesis { remainder: String },
    #[display("trailing characters after a complete formula: \"{remainder}\"")]
    TrailingCharacters { remainder: String },
    #[display("formula nested more than {} levels deep at \"{remainder}\"", MAX_DEPTH)]
    TooDeep { remainder: String },
}

impl ParseError {
    /// The unparsed text the error refers to.
    pub fn remainder(&self) -> &str {
        match self {
            ParseError::EmptyInput => "",
            ParseError::UnknownToken { remainder }
            | ParseError::MissingConnective { remainder }
            | ParseError::UnclosedParenthesis { remainder }
            | ParseError::TrailingCharacters { remainder }
            | ParseError::TooDeep { remainder } => remainder,
        }
    }

    fn unexpected(remainder: &str) -> Self {
        if remainder.is_empty() {
            ParseError::EmptyInput
        } else {
            ParseError::UnknownToken {
                remainder: remainder.to_owned(),
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct State {
    depth: usize,
}

type Input<'a> = Stateful<&'a str, State>;

// Token-level failures start out as "unexpected text here"; `expected`
// narrows them where a specific token was required.
impl<'a> ParserError<Input<'a>> for ParseError {
    fn from_error_kind(input: &Input<'a>, _kind: ErrorKind) -> Self {
        ParseError::unexpected(input.input)
    }

    fn append(
        self,
        _input: &Input<'a>,
        _token_start: &<Input<'a> as Stream>::Checkpoint,
        _kind: ErrorKind,
    ) -> Self {
        self
    }
}

/// Parses a whole string as a single formula.
pub fn parse_formula(input: &str) -> Result<Formula, ParseError> {
    log::trace!(target: targets::PARSER, "Parsing \"{input}\"");

    let mut stream = Input {
        input,
        state: State::default(),
    };

    terminated(formula, end_of_input)
        .parse_next(&mut stream)
        .map_err(into_parse_error)
}

/// Parses the longest formula at the beginning of `input` and returns it with
/// the text that follows it.
pub fn parse_prefix(input: &str) -> Result<(Formula, &str), ParseError> {
    log::trace!(target: targets::PARSER, "Parsing prefix of \"{input}\"");

    let mut stream = Input {
        input,
        state: State::default(),
    };
    let formula = formula.parse_next(&mut stream).map_err(into_parse_error)?;

    Ok((formula, stream.input))
}

fn into_parse_error(error: ErrMode<ParseError>) -> ParseError {
    match error {
        ErrMode::Backtrack(error) | ErrMode::Cut(error) => error,
        // Complete `&str` input never asks for more.
        ErrMode::Incomplete(_) => ParseError::EmptyInput,
    }
}

fn formula(input: &mut Input) -> PResult<Formula, ParseError> {
    alt((atom, negation, binary_formula)).parse_next(input)
}

fn atom(input: &mut Input) -> PResult<Formula, ParseError> {
    any.verify_map(Atom::from_char)
        .map(Formula::Atom)
        .parse_next(input)
}

fn negation(input: &mut Input) -> PResult<Formula, ParseError> {
    preceded(UnaryOperation::Negation.token(), cut_err(nested(formula)))
        .map(Formula::negation)
        .parse_next(input)
}

fn binary_formula(input: &mut Input) -> PResult<Formula, ParseError> {
    preceded(
        '(',
        cut_err(nested(terminated(
            (formula, binary_connective, formula),
            expected(')', |remainder| ParseError::UnclosedParenthesis { remainder }),
        ))),
    )
    .map(|(left, operation, right)| Formula::binary(operation, left, right))
    .parse_next(input)
}

/// Two-character tokens are tried before one-character ones, so `->` is never
/// read as a stray `-`.
fn binary_connective(input: &mut Input) -> PResult<BinaryOperation, ParseError> {
    expected(
        alt((
            take(2usize).verify_map(Connective::two_char),
            take(1usize).verify_map(Connective::one_char),
        ))
        .verify_map(|connective| match connective {
            Connective::Binary(operation) => Some(operation),
            Connective::Unary(_) => None,
        }),
        |remainder| ParseError::MissingConnective { remainder },
    )
    .parse_next(input)
}

fn end_of_input(input: &mut Input) -> PResult<(), ParseError> {
    expected(eof.void(), |remainder| {
        log::debug!(target: targets::PARSER, "\"{remainder}\" left over");
        ParseError::TrailingCharacters { remainder }
    })
    .parse_next(input)
}

/// Replaces a failure of `parser` with `error` applied to the text `parser`
/// started at.
fn expected<'a, O>(
    mut parser: impl Parser<Input<'a>, O, ParseError>,
    error: impl Fn(String) -> ParseError,
) -> impl FnMut(&mut Input<'a>) -> PResult<O, ParseError> {
    move |input| {
        let remainder = input.input;

        parser
            .parse_next(input)
            .map_err(|e| e.map(|_| error(remainder.to_owned())))
    }
}

/// Runs `parser` one nesting level deeper, failing once [`MAX_DEPTH`] is
/// passed.
fn nested<'a, O>(
    mut parser: impl Parser<Input<'a>, O, ParseError>,
) -> impl FnMut(&mut Input<'a>) -> PResult<O, ParseError> {
    move |input| {
        if input.state.depth >= MAX_DEPTH {
            log::debug!(target: targets::PARSER, "Nesting limit of {MAX_DEPTH} reached");
            return Err(ErrMode::Cut(ParseError::TooDeep {
                remainder: input.input.to_owned(),
            }));
        }

        input.state.depth += 1;
        let result = parser.parse_next(input);
        input.state.depth -= 1;

        result
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}
