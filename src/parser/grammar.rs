// # ========================= SNOL COMMAND GRAMMAR =========================
// #
// # One command per line. Rules are tried top to bottom; the first rule whose
// # leading token matches decides the outcome, so a malformed command is
// # rejected instead of falling through to a later rule.
// #
// # command:
// #     | 'EXIT!'
// #     | 'BEG' IDENTIFIER
// #     | 'PRINT' (IDENTIFIER | NUMBER | OPERATOR | ASSIGN)
// #     | IDENTIFIER '=' expression
// #     | expression
// # expression: (IDENTIFIER | NUMBER | OPERATOR)*
// #
// # Keywords are never valid after the first position and an expression
// # statement cannot begin with an operator.

use super::ast::Command;
use super::tokenizer::{Token, TokenType as TT};
use crate::error::{Error, Result};

pub fn parse(tokens: &[Token]) -> Result<Command> {
    let first = tokens.first().ok_or(Error::UnknownCommand)?;
    match first.typ {
        TT::KEYWORD => keyword_command(first, &tokens[1..]),
        TT::OPERATOR => Err(Error::UnknownCommand),
        _ => statement(tokens),
    }
}

fn keyword_command(keyword: &Token, rest: &[Token]) -> Result<Command> {
    match (keyword.lexeme.as_str(), rest) {
        // 'EXIT!'
        ("EXIT!", []) => Ok(Command::Exit),
        ("EXIT!", _) => Err(Error::Syntax("EXIT! must be used alone".to_string())),
        // 'BEG' IDENTIFIER
        ("BEG", [var]) if var.typ == TT::IDENTIFIER => Command::beg(&var.lexeme),
        ("BEG", _) => Err(Error::Syntax("BEG expects one variable name".to_string())),
        // 'PRINT' operand
        ("PRINT", [operand]) => Ok(Command::Print(operand.lexeme.clone())),
        ("PRINT", _) => Err(Error::Syntax("PRINT expects one operand".to_string())),
        (other, _) => Err(Error::Syntax(format!("unexpected keyword {other}"))),
    }
}

fn statement(tokens: &[Token]) -> Result<Command> {
    if tokens[1..].iter().any(|t| t.typ == TT::KEYWORD) {
        return Err(Error::UnknownCommand);
    }
    match tokens.iter().position(|t| t.typ == TT::ASSIGN) {
        // IDENTIFIER '=' expression
        Some(idx) => match &tokens[..idx] {
            [var] if var.typ == TT::IDENTIFIER => {
                Command::assign(&var.lexeme, join(&tokens[idx + 1..]))
            }
            lhs => Err(Error::InvalidVariableName(
                lhs.first().map_or("?", |t| t.lexeme.as_str()).to_string(),
            )),
        },
        // expression
        None => Ok(Command::Expr(join(tokens))),
    }
}

fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
