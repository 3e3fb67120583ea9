mod ast;
mod grammar;
pub mod tokenizer;

pub use ast::{Command, Identifier};
pub use grammar::parse;
pub use tokenizer::{has_multiple_commands, tokenize_line, Token, TokenType};

#[cfg(test)]
mod test;
