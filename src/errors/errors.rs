use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

use crate::lexer::tokens::Token;

/// The single error raised while lexing or parsing.
///
/// Carries the offending token so callers can always report a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    token: Token,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        debug!(error = %error_impl, line = token.line, "syntax error");
        Error {
            internal_error: error_impl,
            token,
        }
    }

    /// Generic form: `token` was not acceptable here.
    pub fn unexpected(token: Token) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            token,
        )
    }

    /// Expectation form: `expected` should have appeared where `token` is.
    pub fn expected(expected: &str, token: Token) -> Self {
        Error::new(
            ErrorImpl::Expected {
                expected: String::from(expected),
                token: token.to_string(),
            },
            token,
        )
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_line(&self) -> usize {
        self.token.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Expected { .. } => "Expected",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Expected { expected, .. } => {
                ErrorTip::Suggestion(format!("`{}` expected", expected))
            }
        }
    }

    fn location(&self) -> String {
        if self.token.is_eof() {
            String::from("the last line")
        } else {
            format!("\"{}\" at line {}", self.token, self.token.line)
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error around {}. {}", self.location(), self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("{expected} expected")]
    Expected { expected: String, token: String },
}
