//! Lexical analysis module.
//!
//! This module contains the token source consumed by the grammar engine:
//!
//! - Token classification (identifier, number, string, EOF) with line info
//! - A regex-driven, line-oriented tokenizer
//! - The `TokenStream` lookahead contract and its buffered implementation

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
