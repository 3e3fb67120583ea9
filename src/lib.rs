pub mod console;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod repl;

pub use console::{Console, Script, Terminal};
pub use error::{Error, Result};
pub use interpreter::{FlowControl, Interpreter, Value, VariableStore};
pub use parser::{parse, tokenize_line, Command, Token, TokenType};
pub use repl::Session;
