use std::{error::Error, io, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use quiz::{
    exercise::{strip_whitespace, Exercise},
    logging,
    store::ExerciseStore,
};
use rand::{rngs::StdRng, SeedableRng};
use wff::{
    equivalence::{are_equivalent, check_answer, AnswerError},
    parser::parse_formula,
    truth_table::TruthTable,
    Formula,
};

#[derive(Debug, Parser)]
#[command(name = "quiz", about = "Translate English sentences into propositional logic")]
struct Cli {
    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Seed for generated exercises.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File holding user-authored exercises.
    #[arg(long, global = true, default_value = "saved_exercises.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a random exercise.
    Generate {
        /// Number of variables in the formula.
        #[arg(short, long, default_value_t = 2)]
        size: usize,
    },
    /// Show the canonical form and the variables of a formula.
    Parse {
        formula: String,
        /// Also draw the syntax tree.
        #[arg(long)]
        tree: bool,
    },
    /// Print the truth table of a formula.
    Table { formula: String },
    /// Decide whether two formulas are logically equivalent.
    Equivalent { a: String, b: String },
    /// Check an answer against a reference formula.
    Check {
        answer: String,
        #[arg(short, long)]
        reference: String,
    },
    /// Save a new exercise.
    Add {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        formula: String,
    },
    /// List saved exercises.
    List,
    /// Answer exercises interactively.
    Play {
        /// Number of variables in generated exercises.
        #[arg(short, long, default_value_t = 2)]
        size: usize,
        /// Number of generated exercises when the store is empty.
        #[arg(short, long, default_value_t = 3)]
        rounds: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", "Error:".red().bold(), error.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    logging::init(cli.verbose)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let store = ExerciseStore::new(&cli.store);

    match cli.command {
        Command::Generate { size } => {
            let exercise = Exercise::generate(size, &mut rng)?;

            println!("{}", exercise.prompt().blue());
            for (variable, proposition) in exercise.propositions() {
                println!("  {} = {}", variable.to_string().cyan(), proposition);
            }
            println!("Answer: {}", exercise.formula().to_string().green());
        }
        Command::Parse { formula, tree } => {
            let formula = read_formula(&formula)?;

            println!("Formula: {}", formula.to_string().green());
            println!("Variables: {}", formula.variables().to_string().cyan());
            if tree {
                print!("{}", formula.get_tree());
            }
        }
        Command::Table { formula } => {
            let formula = read_formula(&formula)?;

            print!("{}", TruthTable::new(&formula)?);
        }
        Command::Equivalent { a, b } => {
            let a = read_formula(&a)?;
            let b = read_formula(&b)?;

            if are_equivalent(&a, &b)? {
                println!("{} ∼ {}", a.to_string().green(), b.to_string().green());
            } else {
                println!("{} ≁ {}", a.to_string().red(), b.to_string().red());
            }
        }
        Command::Check { answer, reference } => {
            let reference = read_formula(&reference)?;

            report(check_answer(&strip_whitespace(&answer), &reference));
        }
        Command::Add { prompt, formula } => {
            let record = store.add(&prompt, &formula)?;

            println!(
                "Saved \"{}\" as {} in {}",
                record.prompt,
                record.formula.green(),
                store.path().display()
            );
        }
        Command::List => {
            for (i, exercise) in store.load()?.iter().enumerate() {
                println!(
                    "{}. {} => {}",
                    i + 1,
                    exercise.prompt(),
                    exercise.formula().to_string().green()
                );
            }
        }
        Command::Play { size, rounds } => {
            let mut exercises = store.load()?;
            if exercises.is_empty() {
                exercises = (0..rounds)
                    .map(|_| Exercise::generate(size, &mut rng))
                    .collect::<Result<_, _>>()?;
            }

            play(&exercises)?;
        }
    }

    Ok(())
}

fn read_formula(input: &str) -> Result<Formula, Box<dyn Error>> {
    Ok(parse_formula(&strip_whitespace(input))?)
}

fn report(result: Result<bool, AnswerError>) {
    match result {
        Ok(true) => println!("{}", "Correct!".green()),
        Ok(false) => println!("{}", "Incorrect.".red()),
        Err(AnswerError::Malformed(error)) => {
            println!("{} {error}", "Your answer is malformed:".yellow())
        }
        Err(error) => println!("{}", error.to_string().red()),
    }
}

fn play(exercises: &[Exercise]) -> io::Result<()> {
    println!(
        "Connectives: {} not, {} and, {} or, {} implies, {} if and only if.",
        "~".cyan(),
        "&".cyan(),
        "|".cyan(),
        "->".cyan(),
        "<>".cyan()
    );

    let mut lines = io::stdin().lines();
    let mut score = 0;

    for (i, exercise) in exercises.iter().enumerate() {
        println!("\n{}. {}", i + 1, exercise.prompt().blue());
        for (variable, proposition) in exercise.propositions() {
            println!("  {} = {}", variable.to_string().cyan(), proposition);
        }

        let Some(answer) = lines.next().transpose()? else {
            break;
        };

        let result = exercise.check_answer(&answer);
        if let Ok(true) = result {
            score += 1;
        }
        report(result);
        println!("Expected: {}", exercise.formula().to_string().green());
    }

    println!("\nScore: {score}/{}", exercises.len());

    Ok(())
}
