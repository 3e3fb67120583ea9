use super::tokenizer::is_identifier;
use crate::error::{Error, Result};

/// A variable name that passed the identifier grammar and is not reserved.
#[derive(Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: &str) -> Result<Self> {
        if is_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidVariableName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identifier(\"{}\")", self.0)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Beg(Identifier),
    Print(String),
    Assign(Identifier, String),
    Expr(String),
    Exit,
}

impl Command {
    pub fn beg(var: &str) -> Result<Self> {
        Ok(Self::Beg(Identifier::new(var)?))
    }

    pub fn assign(var: &str, expr: String) -> Result<Self> {
        Ok(Self::Assign(Identifier::new(var)?, expr))
    }
}
