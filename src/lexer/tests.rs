//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and punctuation
//! - Numeric and string literals
//! - End-of-line tokens and line numbers
//! - Comments
//! - Lookahead and consumption on the token buffer
//! - Error cases

use super::{
    lexer::tokenize,
    stream::{TokenBuffer, TokenStream},
    tokens::{Token, TokenKind, EOL},
};

fn drain(mut tokens: TokenBuffer) -> Vec<Token> {
    let mut out = vec![];
    loop {
        let token = tokens.read();
        if token.is_eof() {
            return out;
        }
        out.push(token);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = drain(tokenize("foo bar baz_123 _underscore CamelCase").unwrap());

    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", EOL]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let tokens = drain(tokenize("42 0 100").unwrap());

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].number, 42);
    assert_eq!(tokens[1].number, 0);
    assert_eq!(tokens[2].number, 100);
    assert_eq!(tokens[2].text(), "100");
}

#[test]
fn test_tokenize_operators_are_identifiers() {
    let tokens = drain(tokenize("a == b <= c >= d && e || f = g; { }").unwrap());

    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(
        texts,
        vec!["a", "==", "b", "<=", "c", ">=", "d", "&&", "e", "||", "f", "=", "g", ";", "{", "}", EOL]
    );
    assert!(tokens.iter().all(|t| t.is_identifier()));
}

#[test]
fn test_tokenize_adjacent_symbols() {
    let tokens = drain(tokenize("x=-1").unwrap());

    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["x", "=", "-", "1", EOL]);
    assert!(tokens[3].is_number());
}

#[test]
fn test_tokenize_strings() {
    let tokens = drain(tokenize(r#"print "hello world" "a\"b" "c\\d" "e\nf""#).unwrap());

    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].text(), "hello world");
    assert_eq!(tokens[2].text(), "a\"b");
    assert_eq!(tokens[3].text(), "c\\d");
    assert_eq!(tokens[4].text(), "e\nf");
}

#[test]
fn test_tokenize_comments() {
    let tokens = drain(tokenize("x = 1 // set x\n// whole line\ny").unwrap());

    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["x", "=", "1", EOL, EOL, "y", EOL]);
}

#[test]
fn test_tokenize_line_numbers() {
    let tokens = drain(tokenize("a\n\nb c\n").unwrap());

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 1); // end of line 1
    assert_eq!(tokens[2].line, 2); // end of the empty line
    assert_eq!(tokens[3].line, 3);
    assert_eq!(tokens[4].line, 3);
}

#[test]
fn test_tokenize_eof() {
    let mut tokens = tokenize("a\nb").unwrap();

    while !tokens.at_eof() {
        tokens.read();
    }
    let eof = tokens.read();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.line, 2);

    // Reading past the end keeps yielding EOF.
    assert!(tokens.read().is_eof());
    assert!(tokens.peek(3).is_eof());
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert!(tokens.at_eof());
    assert!(tokens.peek(0).is_eof());
}

#[test]
fn test_peek_does_not_consume() {
    let mut tokens = tokenize("a b c").unwrap();

    assert_eq!(tokens.peek(0).text(), "a");
    assert_eq!(tokens.peek(2).text(), "c");
    assert_eq!(tokens.peek(0).text(), "a");
    assert_eq!(tokens.position(), 0);

    assert_eq!(tokens.read().text(), "a");
    assert_eq!(tokens.peek(0).text(), "b");
    assert_eq!(tokens.position(), 1);
    assert_eq!(tokens.remaining(), 3);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("a = 1\nb = §").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_token().text(), "§");
}

#[test]
fn test_tokenize_number_overflow() {
    let error = tokenize("x = 99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_token_display() {
    assert_eq!(Token::identifier("while", 1).to_string(), "while");
    assert_eq!(Token::identifier(EOL, 1).to_string(), "\\n");
    assert_eq!(Token::number(12, 1).to_string(), "12");
    assert_eq!(Token::eof(1).to_string(), "EOF");
}
