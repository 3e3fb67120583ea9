mod evaluator;
mod store;
mod value;

pub use evaluator::{Evaluator, Operator, TypePolicy};
pub use store::VariableStore;
pub use value::{Value, ValueType};

use crate::console::Console;
use crate::error::{Error, Result};
use crate::parser::tokenizer::NUMERIC;
use crate::parser::{Command, Identifier};

pub const INPUT_PROMPT: &str = "Input: ";
pub const TERMINATED: &str = "Interpreter is now terminated...";

/// What the session does after a command ran without a hard failure.
#[derive(Debug)]
pub enum FlowControl {
    NextCommand,
    /// The command completed but has a diagnostic to show.
    Warning(Error),
    Exit,
}

#[derive(Debug, Default)]
pub struct Interpreter {
    store: VariableStore,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn execute<C: Console>(&mut self, command: &Command, console: &mut C) -> Result<FlowControl> {
        match command {
            Command::Beg(var) => self.beg(var, console),
            Command::Print(operand) => self.print(operand, console),
            Command::Assign(var, expr) => self.assign(var, expr),
            Command::Expr(expr) => self.expression(expr),
            Command::Exit => {
                console.write_line(TERMINATED)?;
                Ok(FlowControl::Exit)
            }
        }
    }

    fn beg<C: Console>(&mut self, var: &Identifier, console: &mut C) -> Result<FlowControl> {
        console.write_line(&format!("SNOL> Please enter value for [{var}]"))?;
        let input = console
            .read_line(INPUT_PROMPT)?
            .ok_or_else(|| Error::EndOfInput(var.to_string()))?;
        let value = Value::parse_literal(input.trim())
            .ok_or_else(|| Error::Syntax(format!("Invalid input for variable [{var}]")))?;
        self.store.set(var.as_str(), value);
        Ok(FlowControl::NextCommand)
    }

    fn print<C: Console>(&self, operand: &str, console: &mut C) -> Result<FlowControl> {
        if let Some(value) = self.store.get(operand) {
            console.write_line(&format!("SNOL> [{operand}] = {value}"))?;
        } else if NUMERIC.is_match(operand) {
            console.write_line(&format!("SNOL> [literal] = [{operand}]"))?;
        } else {
            return Err(Error::VariableNotFound(operand.to_string()));
        }
        Ok(FlowControl::NextCommand)
    }

    // Mixed operand types are promoted here rather than rejected.
    fn assign(&mut self, var: &Identifier, expr: &str) -> Result<FlowControl> {
        let value = Evaluator::new(&self.store, TypePolicy::Promote)
            .evaluate(expr)
            .map_err(|err| Error::Syntax(format!("Invalid expression in assignment: {err:?}")))?;
        self.store.set(var.as_str(), value);
        Ok(FlowControl::NextCommand)
    }

    // Undefined variables and mixed types are soft failures here.
    fn expression(&self, expr: &str) -> Result<FlowControl> {
        match Evaluator::new(&self.store, TypePolicy::Homogeneous).evaluate(expr) {
            Ok(_) => Ok(FlowControl::NextCommand),
            Err(err @ (Error::VariableNotFound(_) | Error::MixedType)) => {
                Ok(FlowControl::Warning(err))
            }
            Err(err) => Err(Error::Syntax(format!("Invalid expression: {err:?}"))),
        }
    }
}
