use rustyline::error::ReadlineError;
use thiserror::Error;

const UNKNOWN_COMMAND: &str = "Unknown command! Does not match any valid command of the language.";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", UNKNOWN_COMMAND)]
    UnrecognizedCharacter { character: char, column: usize },
    #[error("{}", UNKNOWN_COMMAND)]
    Syntax(String),
    #[error("{}", UNKNOWN_COMMAND)]
    UnknownCommand,
    #[error("{}", UNKNOWN_COMMAND)]
    InvalidExpression(String),
    #[error("Unknown word [{0}]")]
    InvalidVariableName(String),
    #[error("Error! [{0}] is not defined!")]
    VariableNotFound(String),
    #[error("Error! Operands must be of the same type in an\narithmetic operation!")]
    MixedType,
    #[error("Only one command per line is allowed.")]
    MultipleCommands,
    #[error("Error! No value was given for [{0}].")]
    EndOfInput(String),
    #[error("Error! {0}")]
    Io(#[from] std::io::Error),
    #[error("Error! {0}")]
    Terminal(#[from] ReadlineError),
}

pub type Result<T> = std::result::Result<T, Error>;
