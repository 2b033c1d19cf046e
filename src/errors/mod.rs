//! Error types and error handling for the grammar engine.
//!
//! This module defines the single error type raised by the lexer and by
//! every grammar element. It includes:
//!
//! - The error structure carrying the offending token (and hence its line)
//! - Generic "unexpected token" and "X expected" construction forms
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
