use std::fmt::Display;

/// Text of the token emitted at the end of every source line.
pub const EOL: &str = "\n";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    /// Names, keywords and punctuation all lex as identifiers.
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for identifiers, decoded contents for strings.
    pub value: String,
    /// Only meaningful for `TokenKind::Number`.
    pub number: i64,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Identifier if self.value == EOL => write!(f, "\\n"),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    pub fn identifier(text: &str, line: usize) -> Self {
        Token {
            kind: TokenKind::Identifier,
            value: String::from(text),
            number: 0,
            line,
        }
    }

    pub fn number(value: i64, line: usize) -> Self {
        Token {
            kind: TokenKind::Number,
            value: value.to_string(),
            number: value,
            line,
        }
    }

    pub fn string(literal: &str, line: usize) -> Self {
        Token {
            kind: TokenKind::String,
            value: String::from(literal),
            number: 0,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            number: 0,
            line,
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn line(&self) -> usize {
        self.line
    }
}
