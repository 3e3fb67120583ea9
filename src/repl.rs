use crate::console::Console;
use crate::error::{Error, Result};
use crate::interpreter::{FlowControl, Interpreter};
use crate::parser::{has_multiple_commands, parse, tokenize_line};
use derivative::Derivative;

pub const BANNER: &str =
    "The SNOL environment is now active, you may proceed with giving your commands.";
pub const COMMAND_PROMPT: &str = "Command: ";

/// Drives one interpreter over a console until `EXIT!` or end of input.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Session<C> {
    interpreter: Interpreter,
    #[derivative(Debug = "ignore")]
    console: C,
    debug: bool,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            interpreter: Interpreter::new(),
            console,
            debug: false,
        }
    }

    /// Dump each line's tokens and parsed command to stderr.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Every per-line failure is reported and the loop carries on. Only a
    /// broken console ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        self.console.write_line(BANNER)?;
        while let Some(line) = self.console.read_line(COMMAND_PROMPT)? {
            match self.run_line(&line) {
                Ok(FlowControl::Exit) => break,
                Ok(FlowControl::NextCommand) => {}
                Err(err @ (Error::Io(_) | Error::Terminal(_))) => return Err(err),
                Ok(FlowControl::Warning(err)) | Err(err) => self.report(&err)?,
            }
        }
        Ok(())
    }

    pub fn run_line(&mut self, line: &str) -> Result<FlowControl> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(FlowControl::NextCommand);
        }
        if has_multiple_commands(line) {
            return Err(Error::MultipleCommands);
        }
        let tokens = tokenize_line(line)?;
        if self.debug {
            eprintln!("Tokens:");
            for token in tokens.iter() {
                eprintln!("{}", token);
            }
        }
        let command = parse(&tokens)?;
        if self.debug {
            eprintln!("Parsed command: {:?}", command);
        }
        self.interpreter.execute(&command, &mut self.console)
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        if self.debug {
            eprintln!("{:?}", err);
        }
        self.console.write_line(&format!("SNOL> {err}"))
    }
}
