use super::store::VariableStore;
use super::value::{Value, ValueType};
use crate::error::{Error, Result};
use crate::parser::tokenizer::IDENTIFIER;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operator {
    fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        };
        f.write_str(symbol)
    }
}

/// How operands of different types are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePolicy {
    /// Mixing Integer and Float operands is a `MixedType` error.
    Homogeneous,
    /// Integer operands are promoted when they meet a Float.
    Promote,
}

#[derive(Debug, Clone)]
enum Item {
    Operand { value: Value, signed: bool },
    Operator(Operator),
    Unknown(String),
}

pub struct Evaluator<'s> {
    store: &'s VariableStore,
    policy: TypePolicy,
}

impl<'s> Evaluator<'s> {
    pub fn new(store: &'s VariableStore, policy: TypePolicy) -> Self {
        Self { store, policy }
    }

    /// Evaluates whitespace separated expression text. Undefined variables
    /// are reported first, then mixed operand types, then everything else as
    /// `InvalidExpression`.
    pub fn evaluate(&self, expr: &str) -> Result<Value> {
        let items = expr
            .split_whitespace()
            .map(|word| self.classify(word))
            .collect::<Result<Vec<_>>>()?;
        if self.policy == TypePolicy::Homogeneous {
            check_homogeneous(&items)?;
        }
        let mut parser = ExpressionParser { items, pos: 0 };
        let value = parser.expression()?;
        match parser.items.get(parser.pos) {
            None => Ok(value),
            Some(item) => Err(unexpected(item)),
        }
    }

    fn classify(&self, word: &str) -> Result<Item> {
        if IDENTIFIER.is_match(word) {
            let value = self
                .store
                .get(word)
                .ok_or_else(|| Error::VariableNotFound(word.to_string()))?;
            return Ok(Item::Operand {
                value,
                signed: false,
            });
        }
        if let Some(value) = Value::parse_literal(word) {
            return Ok(Item::Operand {
                value,
                signed: word.starts_with('-'),
            });
        }
        Ok(Operator::from_lexeme(word)
            .map(Item::Operator)
            .unwrap_or_else(|| Item::Unknown(word.to_string())))
    }
}

fn check_homogeneous(items: &[Item]) -> Result<()> {
    let types: HashSet<ValueType> = items
        .iter()
        .filter_map(|item| match item {
            Item::Operand { value, .. } => Some(value.typ()),
            _ => None,
        })
        .collect();
    if types.len() > 1 {
        return Err(Error::MixedType);
    }
    Ok(())
}

fn unexpected(item: &Item) -> Error {
    let found = match item {
        Item::Operand { value, .. } => value.to_string(),
        Item::Operator(op) => op.to_string(),
        Item::Unknown(word) => word.clone(),
    };
    Error::InvalidExpression(format!("unexpected '{found}'"))
}

fn arithmetic(lhs: Value, op: Operator, rhs: Value) -> Result<Value> {
    lhs.apply(op, rhs)
        .ok_or_else(|| Error::InvalidExpression(format!("cannot compute {lhs} {op} {rhs}")))
}

// expression: term (('+' | '-') term)*
// term: unary (('*' | '/' | '%') unary)*
// unary: ('+' | '-') unary | operand
struct ExpressionParser {
    items: Vec<Item>,
    pos: usize,
}

impl ExpressionParser {
    fn peek(&self) -> Option<Item> {
        self.items.get(self.pos).cloned()
    }

    fn expression(&mut self) -> Result<Value> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Item::Operator(op @ (Operator::Add | Operator::Sub))) => {
                    self.pos += 1;
                    op
                }
                // `x -1` is a subtraction written without a space.
                Some(Item::Operand {
                    value,
                    signed: true,
                }) => {
                    let magnitude = value.negate().ok_or_else(|| {
                        Error::InvalidExpression(format!("cannot negate {value}"))
                    })?;
                    self.items[self.pos] = Item::Operand {
                        value: magnitude,
                        signed: false,
                    };
                    Operator::Sub
                }
                _ => return Ok(lhs),
            };
            let rhs = self.term()?;
            lhs = arithmetic(lhs, op, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Value> {
        let mut lhs = self.unary()?;
        while let Some(Item::Operator(op @ (Operator::Mul | Operator::Div | Operator::Rem))) =
            self.peek()
        {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = arithmetic(lhs, op, rhs)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Value> {
        let item = self.peek().ok_or_else(|| {
            Error::InvalidExpression("unexpected end of expression".to_string())
        })?;
        self.pos += 1;
        match item {
            Item::Operand { value, .. } => Ok(value),
            Item::Operator(Operator::Add) => self.unary(),
            Item::Operator(Operator::Sub) => {
                let value = self.unary()?;
                value
                    .negate()
                    .ok_or_else(|| Error::InvalidExpression(format!("cannot negate {value}")))
            }
            other => Err(unexpected(&other)),
        }
    }
}
