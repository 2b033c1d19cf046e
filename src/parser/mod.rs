//! Grammar combinator module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent engine that grammar authors
//! assemble parsers from. It provides:
//!
//! - Rule handles with a chaining builder API (sequences, alternation,
//!   repetition, token leaves, keyword and separator literals)
//! - Forward-declared and recursive rules through shared handles
//! - Operator-precedence expressions driven by an operator table
//!
//! Every element exposes a pure lookahead test (`matches`) and a consuming
//! `parse` that appends the nodes it builds.

pub mod element;
pub mod lookups;
pub mod parser;
