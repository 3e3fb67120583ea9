use crate::error::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

/// Where a session reads its lines and writes its messages.
pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    /// `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Interactive console with line editing and in-memory history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(std::io::stdout(), "{line}")?;
        Ok(())
    }
}

/// Reads lines from any buffered reader and echoes prompts to the output,
/// producing the same transcript as piping the lines into a terminal.
pub struct Script<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Script<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for Script<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
