use super::tokens::Token;

/// Lookahead-capable source of tokens consumed by the grammar engine.
///
/// `peek` borrows immutably, so anything that only holds a `&TokenStream`
/// cannot advance it. Once the input is exhausted both methods keep
/// returning the EOF token.
pub trait TokenStream {
    /// Returns the token `k` positions ahead of the cursor without consuming it.
    fn peek(&self, k: usize) -> &Token;
    /// Consumes and returns the token under the cursor.
    fn read(&mut self) -> Token;
    /// Number of tokens consumed so far.
    fn position(&self) -> usize;
}

/// A fully lexed token list with a read cursor.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    eof: Token,
    pos: usize,
}

impl TokenBuffer {
    /// `tokens` must not contain the EOF token; `eof` is appended implicitly.
    pub fn new(tokens: Vec<Token>, eof: Token) -> Self {
        TokenBuffer {
            tokens,
            eof,
            pos: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

impl TokenStream for TokenBuffer {
    fn peek(&self, k: usize) -> &Token {
        self.tokens.get(self.pos + k).unwrap_or(&self.eof)
    }

    fn read(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }

    fn position(&self) -> usize {
        self.pos
    }
}
