use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    stream::TokenBuffer,
    tokens::{Token, TokenKind, EOL},
};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored; the first one that matches the remainder wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"(\\"|\\\\|\\n|[^"])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(==|<=|>=|&&|\|\|)").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[[:punct:]]").unwrap(), handler: symbol_handler },
    ];
}

/// Line-oriented tokenizer.
///
/// Each source line is matched against [`PATTERNS`] until it is consumed,
/// then an end-of-line identifier is emitted for it.
pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            line: 0,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn read_line(&mut self, source: &str) -> Result<(), Error> {
        self.line += 1;
        let mut rest = source;

        while !rest.is_empty() {
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(rest) {
                    (pattern.handler)(self, found.as_str())?;
                    rest = &rest[found.end()..];
                    matched = true;
                    break;
                }
            }

            if !matched {
                let bad = rest.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: bad.clone() },
                    Token::identifier(&bad, self.line),
                ));
            }
        }

        let line = self.line;
        self.push(MK_TOKEN!(TokenKind::Identifier, String::from(EOL), 0, line));
        Ok(())
    }

    fn finish(self) -> TokenBuffer {
        let eof = Token::eof(self.line);
        TokenBuffer::new(self.tokens, eof)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

fn skip_handler(_lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let line = lexer.line();
    let value: i64 = matched.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            Token::identifier(matched, line),
        )
    })?;

    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched), value, line));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let literal = &matched[1..matched.len() - 1];
    let mut result = String::new();
    let mut chars = literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('"') => {
                    result.push('"');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                _ => result.push(ch), // Keep the backslash
            }
        } else {
            result.push(ch);
        }
    }

    let line = lexer.line();
    lexer.push(MK_TOKEN!(TokenKind::String, result, 0, line));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let line = lexer.line();
    lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(matched), 0, line));
    Ok(())
}

/// Lexes `source` into a buffer ready for parsing.
///
/// # Returns
///
/// The token buffer, or the first unrecognised character as an `Error`.
pub fn tokenize(source: &str) -> Result<TokenBuffer, Error> {
    let mut lex = Lexer::new();

    for line in source.lines() {
        lex.read_line(line)?;
    }

    trace!(tokens = lex.tokens.len(), lines = lex.line, "tokenized source");
    Ok(lex.finish())
}
