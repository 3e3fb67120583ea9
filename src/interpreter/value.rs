use super::evaluator::Operator;
use crate::parser::tokenizer::{FLOAT, INTEGER};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
}

impl Value {
    /// Reads a literal in SNOL's number shapes: `-?digits` for integers and
    /// `-?digits.digits` for floats. Anything else, including integers that
    /// overflow `i64`, is rejected.
    pub fn parse_literal(text: &str) -> Option<Self> {
        if INTEGER.is_match(text) {
            text.parse().ok().map(Self::Integer)
        } else if FLOAT.is_match(text) {
            text.parse().ok().map(Self::Float)
        } else {
            None
        }
    }

    pub fn typ(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(x) => x,
        }
    }

    pub(crate) fn negate(self) -> Option<Self> {
        match self {
            Self::Integer(i) => i.checked_neg().map(Self::Integer),
            Self::Float(x) => Some(Self::Float(-x)),
        }
    }

    /// Integer arithmetic stays integral except for `/`, which is true
    /// division. A Float on either side promotes the other operand.
    /// `None` on overflow or a zero divisor.
    pub(crate) fn apply(self, op: Operator, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => match op {
                Operator::Add => a.checked_add(b).map(Self::Integer),
                Operator::Sub => a.checked_sub(b).map(Self::Integer),
                Operator::Mul => a.checked_mul(b).map(Self::Integer),
                Operator::Div if b == 0 => None,
                Operator::Div => Some(Self::Float(a as f64 / b as f64)),
                Operator::Rem => floored_rem(a, b).map(Self::Integer),
            },
            (lhs, rhs) => {
                let (a, b) = (lhs.as_f64(), rhs.as_f64());
                match op {
                    Operator::Add => Some(Self::Float(a + b)),
                    Operator::Sub => Some(Self::Float(a - b)),
                    Operator::Mul => Some(Self::Float(a * b)),
                    Operator::Div | Operator::Rem if b == 0.0 => None,
                    Operator::Div => Some(Self::Float(a / b)),
                    Operator::Rem => {
                        let r = a % b;
                        Some(Self::Float(if r != 0.0 && (r < 0.0) != (b < 0.0) {
                            r + b
                        } else {
                            r
                        }))
                    }
                }
            }
        }
    }
}

// The remainder takes the sign of the divisor.
fn floored_rem(a: i64, b: i64) -> Option<i64> {
    // `i64::MIN % -1` overflows in `checked_rem`, but every remainder by -1 is 0.
    if b == -1 {
        return Some(0);
    }
    let r = a.checked_rem(b)?;
    Some(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => f.write_str(&float_repr(*x)),
        }
    }
}

/// Shortest round-trip form, always marked as a float: `5.0`, `1e+16`,
/// `1e-05`.
fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
