//! User-authored exercises, kept as one JSON record per line.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use wff::parser::{parse_formula, ParseError};

use crate::exercise::{strip_whitespace, Exercise};

/// A saved exercise: the prompt shown to the player and the canonical text of
/// the expected formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub prompt: String,
    pub formula: String,
}

#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display("cannot access the exercise store: {_0}")]
    Io(io::Error),
    #[display("malformed exercise record on line {line}: {source}")]
    Record { line: usize, source: serde_json::Error },
    #[display("exercise on line {line} has a corrupted formula: {source}")]
    Corrupted { line: usize, source: ParseError },
    #[display("not a well-formed formula: {_0}")]
    InvalidFormula(ParseError),
    #[display("cannot encode exercise: {_0}")]
    Encode(serde_json::Error),
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseStore {
    path: PathBuf,
}

impl ExerciseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored exercise, in the order they were added. A missing file is
    /// an empty store.
    pub fn load(&self) -> Result<Vec<Exercise>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
            Err(error) => return Err(error.into()),
        };

        let mut exercises = vec![];

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let line_number = index + 1;
            let record: ExerciseRecord =
                serde_json::from_str(line).map_err(|source| StoreError::Record {
                    line: line_number,
                    source,
                })?;
            let exercise = Exercise::from_record(&record).map_err(|source| {
                StoreError::Corrupted {
                    line: line_number,
                    source,
                }
            })?;

            exercises.push(exercise);
        }

        log::info!("Loaded {} exercises from {}", exercises.len(), self.path.display());

        Ok(exercises)
    }

    /// Validates `formula` and appends it with `prompt` to the store. The
    /// formula is saved in canonical form.
    pub fn add(&self, prompt: &str, formula: &str) -> Result<ExerciseRecord, StoreError> {
        let formula =
            parse_formula(&strip_whitespace(formula)).map_err(StoreError::InvalidFormula)?;

        let record = ExerciseRecord {
            prompt: prompt.trim().to_owned(),
            formula: formula.serialize(),
        };
        let line = serde_json::to_string(&record).map_err(StoreError::Encode)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        log::info!("Saved {} to {}", record.formula, self.path.display());

        Ok(record)
    }
}
