//! Unit tests for error handling.
//!
//! This module contains tests for error construction, accessors and display.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::Token;

#[test]
fn test_unexpected_token_error() {
    let error = Error::unexpected(Token::identifier("}", 3));

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_line(), 3);
    assert_eq!(error.get_token().text(), "}");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_expected_error() {
    let error = Error::expected(")", Token::number(7, 12));

    assert_eq!(error.get_error_name(), "Expected");
    assert_eq!(error.get_line(), 12);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::Expected {
            expected: ")".to_string(),
            token: "7".to_string(),
        }
    );
    assert_eq!(error.get_tip().to_string(), "`)` expected");
}

#[test]
fn test_error_display() {
    let error = Error::expected(")", Token::identifier(";", 4));
    assert_eq!(error.to_string(), "syntax error around \";\" at line 4. ) expected");

    let error = Error::unexpected(Token::string("hi", 2));
    assert_eq!(
        error.to_string(),
        "syntax error around \"hi\" at line 2. unexpected token: \"hi\""
    );
}

#[test]
fn test_error_display_at_eof() {
    let error = Error::expected("}", Token::eof(9));

    assert_eq!(error.to_string(), "syntax error around the last line. } expected");
    assert_eq!(error.get_line(), 9);
}

#[test]
fn test_error_display_end_of_line() {
    let error = Error::unexpected(Token::identifier("\n", 1));

    assert_eq!(
        error.to_string(),
        "syntax error around \"\\n\" at line 1. unexpected token: \"\\\\n\""
    );
}

#[test]
fn test_number_parse_error_tip() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Token::identifier("99999999999999999999", 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source() {
    let error = Error::unexpected(Token::identifier("@", 1));
    let source = std::error::Error::source(&error).map(|e| e.to_string());

    assert_eq!(source, Some("unexpected token: \"@\"".to_string()));
}
