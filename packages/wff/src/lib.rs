pub mod ast;
pub mod equivalence;
pub mod evaluate;
pub mod generate;
pub mod log;
pub mod parser;
pub mod symbols;
pub mod truth_table;

pub use ast::{Formula, VariableSet};
pub use equivalence::{are_equivalent, check_answer, AnswerError};
pub use evaluate::{all_valuations, Evaluate, EvaluationError, Valuation};
pub use generate::{generate, GenerateError};
pub use parser::{parse_formula, parse_prefix, ParseError};
pub use truth_table::TruthTable;
