use crate::error::{Error, Result};
use const_format::concatcp;
use derivative::Derivative;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

#[derive(Clone, Copy, Default, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct Token {
    pub typ: TokenType,
    pub lexeme: String,
    #[derivative(PartialEq = "ignore")]
    pub span: Span,
}

impl Token {
    pub fn new(typ: TokenType, lexeme: &str) -> Self {
        Self {
            typ,
            lexeme: lexeme.to_string(),
            span: Span::default(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.typ, self.lexeme)
    }
}

#[allow(non_camel_case_types)]
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenType {
    KEYWORD,
    IDENTIFIER,
    NUMBER,
    OPERATOR,
    ASSIGN,
}

/// The reserved command words. `EXIT!` ends in punctuation, so only the
/// alphabetic keywords are matched on word boundaries.
pub const KEYWORDS: [&str; 3] = ["BEG", "PRINT", "EXIT!"];

macro_rules! alternative {
    ($t:expr) => {{
        $t
    }};
    ($t:expr, $($ts:expr),+) => {{
        concatcp!($t, "|", alternative!($($ts),+))
    }}
}

macro_rules! group {
    ($($ts:expr),+) => {{
        concatcp!(r"(?:", alternative!($($ts),+), ")")
    }}
}

macro_rules! maybe {
    ($($ts:expr),+) => {
        concatcp!(group!($($ts),+), r"?")
    }
}

macro_rules! whole {
    ($t:expr) => {
        concatcp!("^", $t, "$")
    };
}

const S_WHITESPACE: &str = r"\s+";
const S_KEYWORD: &str = alternative!(r"\bBEG\b", r"\bPRINT\b", r"EXIT!");
const S_IDENTIFIER: &str = r"[a-zA-Z][a-zA-Z0-9]*";
const S_INTEGER: &str = r"-?[0-9]+";
const S_FRACTION: &str = r"\.[0-9]+";
const S_FLOAT: &str = concatcp!(S_INTEGER, S_FRACTION);
const S_NUMBER: &str = concatcp!(S_INTEGER, maybe!(S_FRACTION));
const S_OPERATOR: &str = r"[+\-*/%]";
const S_ASSIGN: &str = r"=";

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));
static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(S_KEYWORD).expect("Error compiling regex."));
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(S_IDENTIFIER).expect("Error compiling regex."));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(S_NUMBER).expect("Error compiling regex."));
static OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_OPERATOR).expect("Error compiling regex."));
static ASSIGN: Lazy<Regex> = Lazy::new(|| Regex::new(S_ASSIGN).expect("Error compiling regex."));

pub(crate) static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_IDENTIFIER)).expect("Error compiling regex."));
pub(crate) static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_INTEGER)).expect("Error compiling regex."));
pub(crate) static FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_FLOAT)).expect("Error compiling regex."));
pub(crate) static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(whole!(S_NUMBER)).expect("Error compiling regex."));

/// Is `name` usable as a variable: identifier-shaped and not reserved?
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !KEYWORDS.contains(&name)
}

pub struct Tokenizer<'l> {
    line: &'l str,
    tokens: Vec<Token>,
    start: usize,
}

impl<'l> Tokenizer<'l> {
    pub fn new(line: &'l str) -> Self {
        Self {
            line,
            tokens: vec![],
            start: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while self.start < self.line.len() {
            if let Some(m) = self.find(&WHITESPACE) {
                self.start = m.end();
                continue;
            }
            if self.find_by_regex(&KEYWORD, TokenType::KEYWORD) {
                continue;
            }
            if self.find_by_regex(&NAME, TokenType::IDENTIFIER) {
                continue;
            }
            if self.find_by_regex(&NUMBER, TokenType::NUMBER) {
                continue;
            }
            if self.find_by_regex(&OPERATOR, TokenType::OPERATOR) {
                continue;
            }
            if self.find_by_regex(&ASSIGN, TokenType::ASSIGN) {
                continue;
            }
            let character = self.line[self.start..].chars().next().unwrap_or_default();
            return Err(Error::UnrecognizedCharacter {
                character,
                column: self.start,
            });
        }
        Ok(self.tokens)
    }

    /// Matches only at the current position. Searching from the start of the
    /// line instead of a sliced suffix keeps `\b` aware of the preceding
    /// character.
    fn find(&self, regex: &Regex) -> Option<Match<'l>> {
        regex
            .find_at(self.line, self.start)
            .filter(|m| m.start() == self.start)
    }

    fn find_by_regex(&mut self, regex: &Regex, token_type: TokenType) -> bool {
        if let Some(m) = self.find(regex) {
            self.tokens.push(Token {
                typ: token_type,
                lexeme: m.as_str().to_string(),
                span: Span {
                    start: m.start(),
                    end: m.end(),
                },
            });
            self.start = m.end();
            return true;
        }
        false
    }
}

pub fn tokenize_line(line: &str) -> Result<Vec<Token>> {
    Tokenizer::new(line).tokenize()
}

/// Counts distinct keyword lexemes anywhere in the raw line, including
/// inside longer words.
pub fn has_multiple_commands(line: &str) -> bool {
    KEYWORDS.iter().filter(|k| line.contains(*k)).count() > 1
}
