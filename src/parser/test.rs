use super::tokenizer::{has_multiple_commands, tokenize_line, Token, TokenType as TT};
use super::{parse, Command, Identifier};
use crate::error::Error;

fn parse_string(input: &str) -> Result<Command, Error> {
    let tokens = tokenize_line(input)?;
    parse(&tokens)
}

fn tokens_match(input: &str, expected: &[(TT, &str)]) {
    let tokens = tokenize_line(input).unwrap();
    let expected: Vec<Token> = expected
        .iter()
        .map(|(typ, lexeme)| Token::new(*typ, lexeme))
        .collect();
    assert_eq!(
        tokens, expected,
        "\nFailed to tokenize \"{}\"\n",
        input
    );
}

fn command_matches(input: &str, repr: &str) {
    let result = parse_string(input);
    assert!(result.is_ok(), "\nFailed to parse \"{}\": {:?}\n", input, result);
    let result_repr = format!("{:?}", result.unwrap());
    assert_eq!(result_repr, repr, "\nUnexpected command for \"{}\"\n", input);
}

fn assert_raises_error(input: &str, check: fn(&Error) -> bool) {
    let result = parse_string(input);
    assert!(
        matches!(result, Err(ref e) if check(e)),
        "\nUnexpected result for \"{}\": {:?}\n",
        input,
        result
    );
}

#[test]
fn test_tokenize_assignment() {
    tokens_match(
        "num1 = 5 * num2",
        &[
            (TT::IDENTIFIER, "num1"),
            (TT::ASSIGN, "="),
            (TT::NUMBER, "5"),
            (TT::OPERATOR, "*"),
            (TT::IDENTIFIER, "num2"),
        ],
    );
}

#[test]
fn test_tokenize_keywords() {
    tokens_match("BEG x", &[(TT::KEYWORD, "BEG"), (TT::IDENTIFIER, "x")]);
    tokens_match("PRINT 4.5", &[(TT::KEYWORD, "PRINT"), (TT::NUMBER, "4.5")]);
    tokens_match("EXIT!", &[(TT::KEYWORD, "EXIT!")]);
    tokens_match("BEGIN", &[(TT::IDENTIFIER, "BEGIN")]);
    tokens_match("PRINT2", &[(TT::IDENTIFIER, "PRINT2")]);
    tokens_match("1BEG", &[(TT::NUMBER, "1"), (TT::IDENTIFIER, "BEG")]);
}

#[test]
fn test_tokenize_numbers() {
    tokens_match("-12", &[(TT::NUMBER, "-12")]);
    tokens_match("3.25", &[(TT::NUMBER, "3.25")]);
    tokens_match(
        "x-1",
        &[(TT::IDENTIFIER, "x"), (TT::NUMBER, "-1")],
    );
    tokens_match(
        "x - 1",
        &[(TT::IDENTIFIER, "x"), (TT::OPERATOR, "-"), (TT::NUMBER, "1")],
    );
    tokens_match(
        "7%2/3",
        &[
            (TT::NUMBER, "7"),
            (TT::OPERATOR, "%"),
            (TT::NUMBER, "2"),
            (TT::OPERATOR, "/"),
            (TT::NUMBER, "3"),
        ],
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize_line("  ab = 12").unwrap();
    let spans: Vec<(usize, usize)> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(2, 4), (5, 6), (7, 9)]);
}

#[test]
fn test_unrecognized_character() {
    assert!(matches!(
        tokenize_line("x = 5 $ 2"),
        Err(Error::UnrecognizedCharacter { character: '$', column: 6 })
    ));
    assert!(matches!(
        tokenize_line("EXIT"),
        Ok(ref tokens) if tokens.len() == 1
    ));
    assert!(matches!(
        tokenize_line("x = 1."),
        Err(Error::UnrecognizedCharacter { character: '.', .. })
    ));
    assert!(matches!(
        tokenize_line("x = (1)"),
        Err(Error::UnrecognizedCharacter { character: '(', .. })
    ));
}

#[test]
fn test_multiple_commands() {
    assert!(has_multiple_commands("BEG x PRINT y"));
    assert!(has_multiple_commands("PRINT x EXIT!"));
    assert!(has_multiple_commands("BEGPRINT"));
    assert!(!has_multiple_commands("BEG x BEG y"));
    assert!(!has_multiple_commands("PRINT x"));
}

#[test]
fn test_keyword_commands() {
    command_matches("EXIT!", "Exit");
    command_matches("BEG num", "Beg(Identifier(\"num\"))");
    command_matches("PRINT num", "Print(\"num\")");
    command_matches("PRINT -4.5", "Print(\"-4.5\")");
    command_matches("PRINT +", "Print(\"+\")");
}

#[test]
fn test_keyword_command_arity() {
    let syntax = |e: &Error| matches!(e, Error::Syntax(_));
    assert_raises_error("EXIT! now", syntax);
    assert_raises_error("BEG", syntax);
    assert_raises_error("BEG x y", syntax);
    assert_raises_error("BEG 5", syntax);
    assert_raises_error("BEG x = 5", syntax);
    assert_raises_error("PRINT", syntax);
    assert_raises_error("PRINT x + 1", syntax);
}

#[test]
fn test_assignment() {
    command_matches("x = 5", "Assign(Identifier(\"x\"), \"5\")");
    command_matches("x=y*2", "Assign(Identifier(\"x\"), \"y * 2\")");
    command_matches("total = a + b - -3", "Assign(Identifier(\"total\"), \"a + b - -3\")");
    command_matches("x =", "Assign(Identifier(\"x\"), \"\")");
}

#[test]
fn test_invalid_assignment_target() {
    assert_raises_error("5 = x", |e| matches!(e, Error::InvalidVariableName(n) if n == "5"));
    assert_raises_error("x y = 1", |e| matches!(e, Error::InvalidVariableName(n) if n == "x"));
    assert_raises_error("= 1", |e| matches!(e, Error::InvalidVariableName(n) if n == "?"));
}

#[test]
fn test_expressions() {
    command_matches("x", "Expr(\"x\")");
    command_matches("x+y", "Expr(\"x + y\")");
    command_matches("42", "Expr(\"42\")");
}

#[test]
fn test_unknown_commands() {
    let unknown = |e: &Error| matches!(e, Error::UnknownCommand);
    assert_raises_error("", unknown);
    assert_raises_error("+ x", unknown);
    assert_raises_error("* 2 3", unknown);
    assert_raises_error("x PRINT", unknown);
    assert_raises_error("x = BEG", unknown);
}

#[test]
fn test_identifier_validation() {
    for name in ["BEG", "PRINT", "EXIT!", "1x", "x_1", ""] {
        let rejected = |r: &Result<_, Error>| {
            matches!(r, Err(Error::InvalidVariableName(n)) if n == name)
        };
        assert!(rejected(&Identifier::new(name).map(|_| ())), "{:?} accepted", name);
        assert!(rejected(&Command::beg(name).map(|_| ())), "{:?} accepted by BEG", name);
        assert!(
            rejected(&Command::assign(name, "1".to_string()).map(|_| ())),
            "{:?} accepted by assignment",
            name
        );
    }
    assert_eq!(Identifier::new("a1").unwrap().as_str(), "a1");
    assert!(matches!(Command::beg("a1"), Ok(Command::Beg(ref v)) if v.as_str() == "a1"));
    assert!(matches!(
        Command::assign("BEGIN", "2".to_string()),
        Ok(Command::Assign(ref v, ref e)) if v.as_str() == "BEGIN" && e == "2"
    ));
}
